use std::borrow::Cow;

use crate::core::Entry;

#[cfg(feature = "tracing")]
use tracing::{debug, warn};

/// Icon handle shown next to an entry and on the rename overlay.
///
/// The grid treats icons as opaque tokens; hosts map them to textures or glyphs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Icon(Cow<'static, str>);

impl Icon {
    /// Icon used for directories by [`StdFileSystemModel`].
    pub const FOLDER: Icon = Icon(Cow::Borrowed("folder"));
    /// Icon used for everything else by [`StdFileSystemModel`].
    pub const FILE: Icon = Icon(Cow::Borrowed("file"));

    /// Icon with a custom token.
    pub fn new(token: impl Into<Cow<'static, str>>) -> Self {
        Self(token.into())
    }

    /// The icon token.
    pub fn token(&self) -> &str {
        &self.0
    }
}

/// File system operations the grid delegates to.
///
/// The grid itself never touches the disk; directory tests, renames, icons and
/// file name rules all come from this trait.
pub trait FileSystemModel {
    /// Whether `entry` is a directory.
    fn is_directory(&self, entry: &Entry) -> bool;
    /// Rename `entry` to `dest`. Returns `false` when the rename was refused.
    /// Renaming an existing entry onto itself succeeds without effect.
    fn rename(&self, entry: &Entry, dest: &Entry) -> bool;
    /// Icon for `entry`.
    fn icon_for(&self, entry: &Entry) -> Icon;
    /// Human-readable reason why `name` is not an acceptable file name, or
    /// `None` when it is.
    fn invalid_name_reason(&self, name: &str) -> Option<String>;
}

/// Portable file name check shared by the bundled file system models.
///
/// Rejects empty names, `.`/`..`, and names containing path separators or NUL.
pub fn invalid_file_name_reason(name: &str) -> Option<String> {
    if name.trim().is_empty() {
        return Some("File name cannot be empty".into());
    }
    if name == "." || name == ".." {
        return Some(format!("'{name}' is not a valid file name"));
    }
    if name.contains('/') || name.contains('\\') {
        return Some("File name cannot contain path separators".into());
    }
    if name.contains('\0') {
        return Some("File name cannot contain NUL characters".into());
    }
    None
}

/// [`FileSystemModel`] backed by `std::fs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFileSystemModel;

impl FileSystemModel for StdFileSystemModel {
    fn is_directory(&self, entry: &Entry) -> bool {
        std::fs::metadata(entry.as_path())
            .map(|md| md.is_dir())
            .unwrap_or(false)
    }

    fn rename(&self, entry: &Entry, dest: &Entry) -> bool {
        if entry == dest {
            return std::fs::symlink_metadata(entry.as_path()).is_ok();
        }
        // std::fs::rename silently replaces files on Unix; never clobber.
        if std::fs::symlink_metadata(dest.as_path()).is_ok() {
            trace_rename_refused(entry, dest, "target already exists");
            return false;
        }
        match std::fs::rename(entry.as_path(), dest.as_path()) {
            Ok(()) => {
                trace_rename_done(entry, dest);
                true
            }
            Err(e) => {
                trace_rename_refused(entry, dest, &e.to_string());
                false
            }
        }
    }

    fn icon_for(&self, entry: &Entry) -> Icon {
        if self.is_directory(entry) {
            Icon::FOLDER
        } else {
            Icon::FILE
        }
    }

    fn invalid_name_reason(&self, name: &str) -> Option<String> {
        invalid_file_name_reason(name)
    }
}

#[cfg(feature = "tracing")]
fn trace_rename_done(entry: &Entry, dest: &Entry) {
    debug!(
        event = "fs.rename",
        from = %entry,
        to = %dest,
        "renamed on disk"
    );
}

#[cfg(not(feature = "tracing"))]
fn trace_rename_done(_entry: &Entry, _dest: &Entry) {}

#[cfg(feature = "tracing")]
fn trace_rename_refused(entry: &Entry, dest: &Entry, reason: &str) {
    warn!(
        event = "fs.rename_refused",
        from = %entry,
        to = %dest,
        reason,
        "rename refused"
    );
}

#[cfg(not(feature = "tracing"))]
fn trace_rename_refused(_entry: &Entry, _dest: &Entry, _reason: &str) {}
