use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A filesystem path shown as one cell of the grid.
///
/// Entries compare by path value. The grid never creates entries on its own
/// except for the destination of a successful rename.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entry(PathBuf);

impl Entry {
    /// Wrap a path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// The wrapped path.
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Consume the entry and return its path.
    pub fn into_path(self) -> PathBuf {
        self.0
    }

    /// Parent directory, if the path has one.
    pub fn parent(&self) -> Option<&Path> {
        self.0.parent()
    }

    /// Name shown in the cell and pre-filled in the rename field.
    ///
    /// This is the last path component; paths without one (e.g. `/`) fall back
    /// to the full path.
    pub fn display_name(&self) -> String {
        match self.0.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.0.display().to_string(),
        }
    }

    /// Sibling entry with the same parent and a different name.
    pub fn sibling(&self, name: &str) -> Entry {
        match self.parent() {
            Some(parent) => Entry(parent.join(name)),
            None => Entry(PathBuf::from(name)),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<PathBuf> for Entry {
    fn from(value: PathBuf) -> Self {
        Self(value)
    }
}

impl From<&Path> for Entry {
    fn from(value: &Path) -> Self {
        Self(value.to_path_buf())
    }
}

impl From<String> for Entry {
    fn from(value: String) -> Self {
        Self(PathBuf::from(value))
    }
}

impl From<&str> for Entry {
    fn from(value: &str) -> Self {
        Self(PathBuf::from(value))
    }
}

impl AsRef<Path> for Entry {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

/// Axis-aligned rectangle in grid content coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub pos: [f32; 2],
    /// Width and height.
    pub size: [f32; 2],
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    pub fn new(pos: [f32; 2], size: [f32; 2]) -> Self {
        Self { pos, size }
    }

    /// Whether `point` lies inside the rectangle (right/bottom edges excluded).
    pub fn contains(&self, point: [f32; 2]) -> bool {
        point[0] >= self.pos[0]
            && point[1] >= self.pos[1]
            && point[0] < self.pos[0] + self.size[0]
            && point[1] < self.pos[1] + self.size[1]
    }
}

/// Keyboard modifier keys used by click selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Ctrl key held.
    pub ctrl: bool,
    /// Shift key held.
    pub shift: bool,
}

/// Mouse button that produced a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Secondary button.
    Right,
    /// Middle button.
    Middle,
}

/// Keys the grid and its rename field react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Enter / Return.
    Enter,
    /// Escape.
    Escape,
    /// Any other key; ignored by the grid.
    Other,
}

/// Contract violations between the grid and its entry model.
///
/// These are never caused by user input. They mean the caller or the model got
/// out of sync with the grid and should be treated as bugs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// An edit was requested for an index that has no entry.
    #[error("internal error: asked to edit index {index} but the model has no entry there")]
    NoEntryAtIndex {
        /// Requested index.
        index: usize,
    },
    /// The entry being renamed disappeared from the model.
    #[error("internal error: edited entry {entry} is no longer in the model")]
    EditedEntryMissing {
        /// The entry that was being edited.
        entry: Entry,
    },
}
