use crate::core::Entry;

/// Callbacks into the file chooser dialog hosting the grid.
pub trait ChooserHost {
    /// The user changed the selection; `entries` are in index order.
    fn user_selected_entries(&mut self, entries: &[Entry]);
    /// The user asked to open a directory.
    fn navigate_into(&mut self, entry: &Entry);
    /// The user picked a file.
    fn user_chose_entry(&mut self, entry: &Entry);
    /// Enter was pressed with zero or several entries selected; the dialog
    /// decides what that means.
    fn confirm_dialog(&mut self);
    /// Show `message` in the dialog's status area. An empty string clears it.
    fn set_status_text(&mut self, message: &str);
    /// Select `entry` and scroll it into view after a rename.
    fn reselect_and_reveal(&mut self, entry: &Entry);
}
