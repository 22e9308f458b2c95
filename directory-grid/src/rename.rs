use std::ops::Range;

use crate::core::{Entry, GridError, Rect};
use crate::fs::{FileSystemModel, Icon};
use crate::host::ChooserHost;
use crate::model::EntryModel;

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

/// One in-place rename: the entry, its original name and the text being typed,
/// plus where the overlay sits.
#[derive(Clone, Debug, PartialEq)]
pub struct EditSession {
    entry: Entry,
    original_name: String,
    text: String,
    text_selection: Range<usize>,
    bounds: Rect,
    icon: Icon,
    focus_requested: bool,
    pending_message: Option<String>,
}

impl EditSession {
    fn new(entry: Entry, bounds: Rect, icon: Icon) -> Self {
        let original_name = entry.display_name();
        let text = original_name.clone();
        Self {
            text_selection: 0..text.len(),
            entry,
            original_name,
            text,
            bounds,
            icon,
            focus_requested: true,
            pending_message: None,
        }
    }

    /// Entry being renamed.
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Display name the session started with.
    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    /// Current text of the rename field.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Selected byte range of the field text; the whole name right after start.
    pub fn text_selection(&self) -> Range<usize> {
        self.text_selection.clone()
    }

    /// Overlay rectangle, equal to the edited cell's bounds.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Icon shown on the overlay label.
    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    /// Whether the overlay still wants keyboard focus.
    pub fn focus_requested(&self) -> bool {
        self.focus_requested
    }

    /// Last rejection reason shown while this session was open.
    pub fn pending_message(&self) -> Option<&str> {
        self.pending_message.as_deref()
    }
}

/// How a confirm or commit request ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenameOutcome {
    /// No session was open.
    NotEditing,
    /// The name was rejected; the session stays open.
    Rejected(String),
    /// The name was rejected while committing; the session was closed.
    Aborted(String),
    /// The file system renamed the entry; the model was updated in place.
    Renamed {
        /// Model index of the renamed entry.
        index: usize,
        /// New entry.
        entry: Entry,
    },
    /// The file system refused the rename; the session was closed.
    Failed,
}

/// State machine for the single rename overlay (`Idle` / `Editing`).
#[derive(Clone, Debug, Default)]
pub struct InlineRenameEditor {
    session: Option<EditSession>,
}

impl InlineRenameEditor {
    /// Idle editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a session is open.
    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    /// The open session.
    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Open a session on `entry`, placing the overlay at `bounds`.
    ///
    /// An already open session is replaced as a whole, including any pending
    /// rejection message; the replaced session is returned.
    pub fn start(&mut self, entry: Entry, bounds: Rect, icon: Icon) -> Option<EditSession> {
        trace_edit_started(&entry);
        self.session.replace(EditSession::new(entry, bounds, icon))
    }

    /// Replace the field text (the user typed). Collapses the text selection
    /// to the end.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        session.text = text.into();
        let end = session.text.len();
        session.text_selection = end..end;
        true
    }

    /// Clear and return the focus request once the host has focused the field.
    pub fn take_focus_request(&mut self) -> bool {
        self.session
            .as_mut()
            .map(|s| std::mem::take(&mut s.focus_requested))
            .unwrap_or(false)
    }

    /// Close the session without touching the model. Returns `false` when
    /// nothing was open, so repeated cancels are harmless.
    pub fn cancel(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                trace_edit_cancelled(&session.entry);
                true
            }
            None => false,
        }
    }

    /// Enter pressed in the field.
    ///
    /// An invalid name keeps the session open, preserves the text and puts the
    /// reason in the status area. A valid name commits.
    pub fn confirm<M>(
        &mut self,
        model: &mut M,
        fs: &dyn FileSystemModel,
        host: &mut dyn ChooserHost,
    ) -> Result<RenameOutcome, GridError>
    where
        M: EntryModel + ?Sized,
    {
        let Some(session) = self.session.as_mut() else {
            return Ok(RenameOutcome::NotEditing);
        };
        if let Some(reason) = fs.invalid_name_reason(&session.text) {
            trace_name_rejected(&session.entry, &reason);
            host.set_status_text(&reason);
            session.pending_message = Some(reason.clone());
            return Ok(RenameOutcome::Rejected(reason));
        }
        self.commit(model, fs, host)
    }

    /// Close the session and try to rename the entry to the typed name.
    ///
    /// This is also what focus loss does: leaving the field keeps what was
    /// typed. An invalid name aborts the rename with a status message.
    pub fn commit<M>(
        &mut self,
        model: &mut M,
        fs: &dyn FileSystemModel,
        host: &mut dyn ChooserHost,
    ) -> Result<RenameOutcome, GridError>
    where
        M: EntryModel + ?Sized,
    {
        let Some(session) = self.session.take() else {
            return Ok(RenameOutcome::NotEditing);
        };

        if let Some(reason) = fs.invalid_name_reason(&session.text) {
            trace_name_rejected(&session.entry, &reason);
            host.set_status_text(&format!("Rename aborted - {reason}"));
            return Ok(RenameOutcome::Aborted(reason));
        }

        let index = model
            .index_of(&session.entry)
            .ok_or_else(|| GridError::EditedEntryMissing {
                entry: session.entry.clone(),
            })?;

        let dest = session.entry.sibling(&session.text);
        if fs.rename(&session.entry, &dest) {
            trace_rename_committed(&session.entry, &dest, index);
            host.set_status_text("");
            model.replace_at(index, dest.clone());
            host.reselect_and_reveal(&dest);
            Ok(RenameOutcome::Renamed { index, entry: dest })
        } else {
            trace_rename_failed(&session.entry, &dest);
            host.set_status_text(&format!("Unable to rename {}", session.entry));
            Ok(RenameOutcome::Failed)
        }
    }
}

#[cfg(feature = "tracing")]
fn trace_edit_started(entry: &Entry) {
    trace!(event = "rename.started", entry = %entry, "rename editor opened");
}

#[cfg(not(feature = "tracing"))]
fn trace_edit_started(_entry: &Entry) {}

#[cfg(feature = "tracing")]
fn trace_edit_cancelled(entry: &Entry) {
    trace!(event = "rename.cancelled", entry = %entry, "rename editor closed");
}

#[cfg(not(feature = "tracing"))]
fn trace_edit_cancelled(_entry: &Entry) {}

#[cfg(feature = "tracing")]
fn trace_name_rejected(entry: &Entry, reason: &str) {
    debug!(
        event = "rename.rejected",
        entry = %entry,
        reason,
        "proposed name rejected"
    );
}

#[cfg(not(feature = "tracing"))]
fn trace_name_rejected(_entry: &Entry, _reason: &str) {}

#[cfg(feature = "tracing")]
fn trace_rename_committed(from: &Entry, to: &Entry, index: usize) {
    debug!(
        event = "rename.committed",
        from = %from,
        to = %to,
        index,
        "entry renamed"
    );
}

#[cfg(not(feature = "tracing"))]
fn trace_rename_committed(_from: &Entry, _to: &Entry, _index: usize) {}

#[cfg(feature = "tracing")]
fn trace_rename_failed(from: &Entry, to: &Entry) {
    debug!(
        event = "rename.failed",
        from = %from,
        to = %to,
        "file system refused rename"
    );
}

#[cfg(not(feature = "tracing"))]
fn trace_rename_failed(_from: &Entry, _to: &Entry) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ModelChange, VecEntryModel};
    use crate::testing::{FakeFs, HostCall, RecordingHost};

    fn bounds() -> Rect {
        Rect::new([0.0, 0.0], [120.0, 21.0])
    }

    fn editing(entry: &str) -> InlineRenameEditor {
        let mut editor = InlineRenameEditor::new();
        editor.start(Entry::from(entry), bounds(), Icon::FILE);
        editor
    }

    #[test]
    fn start_prefills_display_name_and_selects_it() {
        let editor = editing("/docs/report.txt");
        let session = editor.session().unwrap();
        assert_eq!(session.text(), "report.txt");
        assert_eq!(session.original_name(), "report.txt");
        assert_eq!(session.text_selection(), 0.."report.txt".len());
        assert!(session.focus_requested());
        assert_eq!(session.bounds(), bounds());
    }

    #[test]
    fn typing_collapses_selection() {
        let mut editor = editing("/docs/a.txt");
        assert!(editor.set_text("abc"));
        assert_eq!(editor.session().unwrap().text_selection(), 3..3);
    }

    #[test]
    fn focus_request_is_taken_once() {
        let mut editor = editing("/docs/a.txt");
        assert!(editor.take_focus_request());
        assert!(!editor.take_focus_request());
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut editor = editing("/docs/a.txt");
        assert!(editor.cancel());
        assert!(!editor.cancel());
        assert!(!editor.is_editing());
    }

    #[test]
    fn confirm_with_invalid_name_keeps_session_and_model() {
        let mut model = VecEntryModel::from_entries(["/docs/a.txt"]);
        let fs = FakeFs::default();
        let mut host = RecordingHost::default();
        let mut editor = editing("/docs/a.txt");
        editor.set_text("bad/name");

        let out = editor.confirm(&mut model, &fs, &mut host).unwrap();
        assert!(matches!(out, RenameOutcome::Rejected(_)));
        let session = editor.session().unwrap();
        assert_eq!(session.text(), "bad/name");
        assert!(session.pending_message().is_some());
        assert_eq!(model.entries(), &[Entry::from("/docs/a.txt")]);
        assert!(model.take_changes().is_empty());
        assert_eq!(host.statuses().len(), 1);
        assert!(fs.renames.borrow().is_empty());
    }

    #[test]
    fn confirm_with_valid_name_renames_in_place() {
        let mut model = VecEntryModel::from_entries(["/docs/a.txt", "/docs/b.txt"]);
        let fs = FakeFs::default();
        let mut host = RecordingHost::default();
        let mut editor = editing("/docs/a.txt");
        editor.set_text("z.txt");

        let out = editor.confirm(&mut model, &fs, &mut host).unwrap();
        assert_eq!(
            out,
            RenameOutcome::Renamed {
                index: 0,
                entry: Entry::from("/docs/z.txt")
            }
        );
        assert!(!editor.is_editing());
        assert_eq!(
            model.entries(),
            &[Entry::from("/docs/z.txt"), Entry::from("/docs/b.txt")]
        );
        assert_eq!(model.take_changes(), vec![ModelChange::ContentChanged(0..1)]);
        assert_eq!(
            host.take(),
            vec![
                HostCall::Status(String::new()),
                HostCall::Reveal(Entry::from("/docs/z.txt")),
            ]
        );
    }

    #[test]
    fn refused_rename_closes_session_and_reports_original() {
        let mut model = VecEntryModel::from_entries(["/docs/a.txt"]);
        let fs = FakeFs {
            refuse_renames: true,
            ..FakeFs::default()
        };
        let mut host = RecordingHost::default();
        let mut editor = editing("/docs/a.txt");
        editor.set_text("z.txt");

        let out = editor.confirm(&mut model, &fs, &mut host).unwrap();
        assert_eq!(out, RenameOutcome::Failed);
        assert!(!editor.is_editing());
        assert_eq!(model.entries(), &[Entry::from("/docs/a.txt")]);
        assert_eq!(host.statuses(), vec!["Unable to rename /docs/a.txt".to_string()]);
    }

    #[test]
    fn commit_with_invalid_name_aborts() {
        let mut model = VecEntryModel::from_entries(["/docs/a.txt"]);
        let fs = FakeFs::default();
        let mut host = RecordingHost::default();
        let mut editor = editing("/docs/a.txt");
        editor.set_text("");

        let out = editor.commit(&mut model, &fs, &mut host).unwrap();
        assert!(matches!(out, RenameOutcome::Aborted(_)));
        assert!(!editor.is_editing());
        assert!(host.statuses()[0].starts_with("Rename aborted - "));
    }

    #[test]
    fn commit_on_vanished_entry_is_an_error() {
        let mut model = VecEntryModel::from_entries(["/docs/other.txt"]);
        let fs = FakeFs::default();
        let mut host = RecordingHost::default();
        let mut editor = editing("/docs/a.txt");
        editor.set_text("z.txt");

        let err = editor.commit(&mut model, &fs, &mut host).unwrap_err();
        assert_eq!(
            err,
            GridError::EditedEntryMissing {
                entry: Entry::from("/docs/a.txt")
            }
        );
    }

    #[test]
    fn untouched_name_still_requests_rename_and_reselects() {
        let mut model = VecEntryModel::from_entries(["/docs/a.txt"]);
        let fs = FakeFs::default();
        let mut host = RecordingHost::default();
        let mut editor = editing("/docs/a.txt");

        let out = editor.commit(&mut model, &fs, &mut host).unwrap();
        let same = Entry::from("/docs/a.txt");
        assert_eq!(
            out,
            RenameOutcome::Renamed {
                index: 0,
                entry: same.clone()
            }
        );
        assert_eq!(*fs.renames.borrow(), vec![(same.clone(), same.clone())]);
        assert_eq!(
            host.take(),
            vec![HostCall::Status(String::new()), HostCall::Reveal(same)]
        );
    }

    #[test]
    fn restarting_drops_pending_message() {
        let mut model = VecEntryModel::from_entries(["/docs/a.txt", "/docs/b.txt"]);
        let fs = FakeFs::default();
        let mut host = RecordingHost::default();
        let mut editor = editing("/docs/a.txt");
        editor.set_text("..");
        editor.confirm(&mut model, &fs, &mut host).unwrap();

        let old = editor
            .start(Entry::from("/docs/b.txt"), bounds(), Icon::FILE)
            .unwrap();
        assert!(old.pending_message().is_some());
        let session = editor.session().unwrap();
        assert_eq!(session.text(), "b.txt");
        assert_eq!(session.pending_message(), None);
    }

    #[test]
    fn idle_editor_ignores_confirm_and_commit() {
        let mut model = VecEntryModel::new();
        let fs = FakeFs::default();
        let mut host = RecordingHost::default();
        let mut editor = InlineRenameEditor::new();
        assert_eq!(
            editor.confirm(&mut model, &fs, &mut host).unwrap(),
            RenameOutcome::NotEditing
        );
        assert_eq!(
            editor.commit(&mut model, &fs, &mut host).unwrap(),
            RenameOutcome::NotEditing
        );
        assert!(!editor.set_text("x"));
    }
}
