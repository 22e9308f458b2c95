use std::fmt;

use crate::cell_size::{CellGeometry, CellSizeCalculator, TextMetrics};
use crate::config::{GridConfig, Viewport};
use crate::core::{Entry, GridError, Key, MouseButton, Rect};
use crate::events::GridEvent;
use crate::fs::FileSystemModel;
use crate::host::ChooserHost;
use crate::layout::GridLayout;
use crate::model::{EntryModel, ModelChange};
use crate::rename::{EditSession, InlineRenameEditor, RenameOutcome};
use crate::selection::SelectionController;

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

/// Wrapped grid of directory entries with in-place rename.
///
/// The grid owns its [`EntryModel`] and drains the model's change
/// notifications before every input event, so cell sizes and selection indices
/// always match the current listing. It does no I/O: directory tests and
/// renames go through the [`FileSystemModel`] passed with each event, and
/// everything the dialog must react to goes through [`ChooserHost`].
///
/// Examples
/// ```
/// use directory_grid::{
///     ChooserHost, DirectoryGrid, Entry, FixedAdvanceMetrics, GridConfig, GridEvent, Key,
///     StdFileSystemModel, VecEntryModel, Viewport,
/// };
///
/// #[derive(Default)]
/// struct Dialog {
///     chosen: Option<Entry>,
///     confirmed: bool,
/// }
///
/// impl ChooserHost for Dialog {
///     fn user_selected_entries(&mut self, _entries: &[Entry]) {}
///     fn navigate_into(&mut self, _entry: &Entry) {}
///     fn user_chose_entry(&mut self, entry: &Entry) {
///         self.chosen = Some(entry.clone());
///     }
///     fn confirm_dialog(&mut self) {
///         self.confirmed = true;
///     }
///     fn set_status_text(&mut self, _message: &str) {}
///     fn reselect_and_reveal(&mut self, _entry: &Entry) {}
/// }
///
/// let model = VecEntryModel::from_entries(["/nowhere/a.txt", "/nowhere/b.txt"]);
/// let mut grid = DirectoryGrid::new(model, FixedAdvanceMetrics::default(), GridConfig::default())
///     .with_viewport(Viewport::new(400.0, 300.0));
/// let mut dialog = Dialog::default();
///
/// // Enter with nothing selected lets the dialog decide.
/// grid.handle_event(GridEvent::KeyReleased(Key::Enter), &StdFileSystemModel, &mut dialog)
///     .unwrap();
/// assert!(dialog.confirmed);
/// ```
pub struct DirectoryGrid<M> {
    model: M,
    config: GridConfig,
    metrics: Box<dyn TextMetrics>,
    viewport: Option<Viewport>,
    sizer: CellSizeCalculator,
    cell: CellGeometry,
    selection: SelectionController,
    editor: InlineRenameEditor,
    reveal_next: Option<usize>,
    // selection changed while absorbing changes without a host at hand
    selection_dirty: bool,
}

impl<M: EntryModel> DirectoryGrid<M> {
    /// Creates a grid over `model`, measuring labels with `metrics`.
    pub fn new(model: M, metrics: impl TextMetrics + 'static, config: GridConfig) -> Self {
        let mut grid = Self {
            sizer: CellSizeCalculator::new(&config),
            selection: SelectionController::new(config.allow_multi),
            model,
            config,
            metrics: Box::new(metrics),
            viewport: None,
            cell: CellGeometry::default(),
            editor: InlineRenameEditor::new(),
            reveal_next: None,
            selection_dirty: false,
        };
        grid.recompute_cell_dimensions(None);
        grid
    }

    /// Builder-style [`DirectoryGrid::set_viewport`].
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.set_viewport(Some(viewport));
        self
    }

    /// Sets the viewport the grid is shown in.
    ///
    /// Only the wrapping is affected immediately; the cell size is recomputed
    /// on the next insert/content notification.
    pub fn set_viewport(&mut self, viewport: Option<Viewport>) {
        self.viewport = viewport;
    }

    /// Current viewport.
    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    /// Grid configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Entry model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable entry model. Changes are picked up by the next
    /// [`DirectoryGrid::sync_model`] or [`DirectoryGrid::handle_event`].
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Consumes the grid and returns its model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Entry at `index`.
    pub fn entry_at(&self, index: usize) -> Option<&Entry> {
        self.model.entry_at(index)
    }

    /// Size currently applied to every cell.
    pub fn cell_geometry(&self) -> CellGeometry {
        self.cell
    }

    /// Placement of the cells for the current model and viewport.
    pub fn layout(&self) -> GridLayout {
        GridLayout::new(self.cell, self.viewport.as_ref(), self.model.len())
    }

    /// Bounds of the cell at `index`.
    pub fn cell_bounds(&self, index: usize) -> Option<Rect> {
        self.layout().cell_bounds(index)
    }

    /// Index of the cell under `point`.
    pub fn location_to_index(&self, point: [f32; 2]) -> Option<usize> {
        self.layout().location_to_index(point)
    }

    /// Recomputes the uniform cell size from `entries`, or from the whole
    /// model when `None`.
    pub fn recompute_cell_dimensions(&mut self, entries: Option<&[Entry]>) {
        let metrics = self.metrics.as_ref();
        let viewport = self.viewport.as_ref();
        let cell = match entries {
            Some(list) => self.sizer.compute(list.iter(), metrics, viewport),
            None => {
                let all = (0..self.model.len()).filter_map(|i| self.model.entry_at(i));
                self.sizer.compute(all, metrics, viewport)
            }
        };
        trace_cells_recomputed(cell, self.model.len());
        self.cell = cell;
    }

    /// Applies queued model notifications. Returns whether there were any.
    ///
    /// Inserts and content changes recompute the cell size; removals never
    /// shrink it. Any change made while a rename is open closes it.
    pub fn sync_model(&mut self, host: &mut dyn ChooserHost) -> bool {
        let changed = self.absorb_model_changes();
        if std::mem::take(&mut self.selection_dirty) {
            self.notify_selection(host);
        }
        changed
    }

    fn absorb_model_changes(&mut self) -> bool {
        let changes = self.model.take_changes();
        if changes.is_empty() {
            return false;
        }
        if self.editor.cancel() {
            trace_edit_dropped_on_model_change();
        }

        let mut recompute = false;
        for change in changes {
            match change {
                ModelChange::Inserted(range) => {
                    self.selection.on_inserted(range);
                    recompute = true;
                }
                ModelChange::Removed(range) => {
                    self.selection_dirty |= self.selection.on_removed(range);
                }
                ModelChange::ContentChanged(_) => recompute = true,
            }
        }
        self.selection_dirty |= self.selection.retain_valid(self.model.len());

        if recompute {
            self.recompute_cell_dimensions(None);
        }
        true
    }

    /// Single entry point for pointer, keyboard and focus input.
    ///
    /// A click always closes the rename overlay first, then updates the
    /// selection, then notifies the host.
    pub fn handle_event(
        &mut self,
        event: GridEvent,
        fs: &dyn FileSystemModel,
        host: &mut dyn ChooserHost,
    ) -> Result<(), GridError> {
        self.sync_model(host);
        match event {
            GridEvent::MouseClicked {
                position,
                button,
                click_count,
                modifiers,
            } => {
                self.editor.cancel();
                if button != MouseButton::Left {
                    return Ok(());
                }
                if let Some(index) = self.location_to_index(position) {
                    if self.selection.click(index, modifiers) {
                        self.notify_selection(host);
                    }
                }
                if click_count == 2 {
                    self.activate_double_click(fs, host);
                }
            }
            GridEvent::ContextTrigger { position } => {
                if self.editor.is_editing() {
                    trace_context_consumed();
                    return Ok(());
                }
                self.select_at(position, host);
            }
            GridEvent::DragStarted { position } => {
                let index = self.location_to_index(position);
                self.selection.begin_drag(index);
            }
            GridEvent::DragOver { position } => {
                if let Some(index) = self.location_to_index(position) {
                    self.selection.drag_to(index);
                }
            }
            GridEvent::DragEnded => {
                if self.selection.end_drag() {
                    self.notify_selection(host);
                }
            }
            GridEvent::KeyReleased(Key::Enter) => {
                // the overlay owns keyboard focus while editing
                if !self.editor.is_editing() {
                    self.activate(fs, host);
                }
            }
            GridEvent::KeyReleased(_) => {}
            GridEvent::EditorKeyPressed(Key::Escape) | GridEvent::EditorKeyReleased(Key::Escape) => {
                self.editor.cancel();
            }
            GridEvent::EditorKeyReleased(Key::Enter) => {
                let outcome = self.editor.confirm(&mut self.model, fs, host)?;
                self.finish_rename(outcome, host);
            }
            GridEvent::EditorKeyPressed(_) | GridEvent::EditorKeyReleased(_) => {}
            GridEvent::EditorTextChanged(text) => {
                self.editor.set_text(text);
            }
            GridEvent::EditorFocusLost => {
                self.commit_edit(fs, host)?;
            }
            GridEvent::EditorIconClicked { click_count } => {
                if click_count == 2 {
                    self.open_from_editor_icon(fs, host);
                }
            }
        }
        Ok(())
    }

    /// Selects the cell under `point`; no-op over empty space.
    pub fn select_at(&mut self, point: [f32; 2], host: &mut dyn ChooserHost) -> bool {
        let Some(index) = self.location_to_index(point) else {
            return false;
        };
        let changed = self.selection.select_single(index);
        if changed {
            self.notify_selection(host);
        }
        changed
    }

    /// Selected indices in ascending order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selection.indices()
    }

    /// Selected entries in index order.
    pub fn selected_entries(&self) -> Vec<Entry> {
        self.selection.selected_entries(&self.model)
    }

    /// Entry at the lowest selected index.
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selection.lead().and_then(|i| self.model.entry_at(i))
    }

    /// Replaces the selection by index; out-of-range indices are ignored.
    pub fn set_selected_indices<I>(&mut self, indices: I, host: &mut dyn ChooserHost)
    where
        I: IntoIterator<Item = usize>,
    {
        if self.selection.set_indices(indices, self.model.len()) {
            self.notify_selection(host);
        }
    }

    /// Selects `entry` and asks for it to be revealed.
    ///
    /// Nothing happens when it is already the only selected entry or when the
    /// model does not contain it.
    pub fn set_selected_entry(&mut self, entry: &Entry, host: &mut dyn ChooserHost) {
        if let [only] = self.selection.indices().as_slice() {
            if self.model.entry_at(*only) == Some(entry) {
                return;
            }
        }
        let Some(index) = self.model.index_of(entry) else {
            return;
        };
        if self.selection.select_single(index) {
            self.notify_selection(host);
        }
        self.reveal_next = Some(index);
    }

    /// Replaces the selection with `entries`; entries not in the model are
    /// skipped.
    pub fn set_selected_entries<'a, I>(&mut self, entries: I, host: &mut dyn ChooserHost)
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let indices: Vec<usize> = entries
            .into_iter()
            .filter_map(|e| self.model.index_of(e))
            .collect();
        self.set_selected_indices(indices, host);
    }

    /// Index the host should scroll into view, cleared on read.
    pub fn take_reveal_request(&mut self) -> Option<usize> {
        self.reveal_next.take()
    }

    /// Enter on the grid.
    ///
    /// One selected entry is opened (directory) or chosen (file). With none or
    /// several selected the dialog decides.
    pub fn activate(&mut self, fs: &dyn FileSystemModel, host: &mut dyn ChooserHost) {
        match self.selection.indices().as_slice() {
            [index] => self.open_entry(*index, fs, host),
            _ => {
                trace_activation("confirm_dialog", self.selection.len());
                host.confirm_dialog();
            }
        }
    }

    /// Opens a rename session on the entry at `index`.
    ///
    /// Model changes queued before the call are applied first, so a freshly
    /// inserted entry can be renamed right away. The resulting selection
    /// notification is delivered on the next [`DirectoryGrid::sync_model`] or
    /// [`DirectoryGrid::handle_event`]. A missing entry is a caller bug and is
    /// reported as [`GridError::NoEntryAtIndex`].
    pub fn start_edit(&mut self, index: usize, fs: &dyn FileSystemModel) -> Result<(), GridError> {
        self.absorb_model_changes();
        let entry = self
            .model
            .entry_at(index)
            .cloned()
            .ok_or(GridError::NoEntryAtIndex { index })?;
        let bounds = self.cell_bounds(index).unwrap_or_default();
        let icon = fs.icon_for(&entry);
        self.editor.start(entry, bounds, icon);
        Ok(())
    }

    /// Renames the lead selection; no-op without a selection.
    pub fn edit(&mut self, fs: &dyn FileSystemModel) -> Result<(), GridError> {
        match self.selection.lead() {
            Some(index) => self.start_edit(index, fs),
            None => Ok(()),
        }
    }

    /// Closes the rename overlay without renaming.
    pub fn cancel_edit(&mut self) -> bool {
        self.editor.cancel()
    }

    /// Accepts what was typed, as on focus loss.
    pub fn commit_edit(
        &mut self,
        fs: &dyn FileSystemModel,
        host: &mut dyn ChooserHost,
    ) -> Result<RenameOutcome, GridError> {
        let outcome = self.editor.commit(&mut self.model, fs, host)?;
        self.finish_rename(outcome.clone(), host);
        Ok(outcome)
    }

    /// Whether a rename is in progress.
    pub fn is_editing(&self) -> bool {
        self.editor.is_editing()
    }

    /// The open rename session.
    pub fn edit_session(&self) -> Option<&EditSession> {
        self.editor.session()
    }

    /// Returns `true` once after a rename session opened, so the host can move
    /// keyboard focus into the overlay.
    pub fn take_editor_focus_request(&mut self) -> bool {
        self.editor.take_focus_request()
    }

    fn finish_rename(&mut self, outcome: RenameOutcome, host: &mut dyn ChooserHost) {
        let RenameOutcome::Renamed { index, .. } = outcome else {
            return;
        };
        self.sync_model(host);
        if self.selection.select_single(index) {
            self.notify_selection(host);
        }
        self.reveal_next = Some(index);
    }

    fn activate_double_click(&mut self, fs: &dyn FileSystemModel, host: &mut dyn ChooserHost) {
        if let [index] = self.selection.indices().as_slice() {
            self.open_entry(*index, fs, host);
        }
    }

    fn open_entry(&self, index: usize, fs: &dyn FileSystemModel, host: &mut dyn ChooserHost) {
        let Some(entry) = self.model.entry_at(index) else {
            return;
        };
        if fs.is_directory(entry) {
            trace_activation("navigate_into", 1);
            host.navigate_into(entry);
        } else {
            trace_activation("choose_entry", 1);
            host.user_chose_entry(entry);
        }
    }

    fn open_from_editor_icon(&mut self, fs: &dyn FileSystemModel, host: &mut dyn ChooserHost) {
        let Some(entry) = self.editor.session().map(|s| s.entry().clone()) else {
            return;
        };
        if fs.is_directory(&entry) {
            host.navigate_into(&entry);
        }
        self.editor.cancel();
    }

    fn notify_selection(&self, host: &mut dyn ChooserHost) {
        if self.selection.is_dragging() {
            return;
        }
        host.user_selected_entries(&self.selected_entries());
    }
}

impl<M: fmt::Debug> fmt::Debug for DirectoryGrid<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryGrid")
            .field("model", &self.model)
            .field("config", &self.config)
            .field("viewport", &self.viewport)
            .field("cell", &self.cell)
            .field("selection", &self.selection)
            .field("editor", &self.editor)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "tracing")]
fn trace_cells_recomputed(cell: CellGeometry, entries: usize) {
    trace!(
        event = "grid.cells_recomputed",
        width = cell.width,
        height = cell.height,
        entries,
        "cell size recomputed"
    );
}

#[cfg(not(feature = "tracing"))]
fn trace_cells_recomputed(_cell: CellGeometry, _entries: usize) {}

#[cfg(feature = "tracing")]
fn trace_edit_dropped_on_model_change() {
    debug!(
        event = "rename.dropped",
        "model changed while renaming; rename closed"
    );
}

#[cfg(not(feature = "tracing"))]
fn trace_edit_dropped_on_model_change() {}

#[cfg(feature = "tracing")]
fn trace_context_consumed() {
    trace!(
        event = "grid.context_consumed",
        "context gesture ignored while renaming"
    );
}

#[cfg(not(feature = "tracing"))]
fn trace_context_consumed() {}

#[cfg(feature = "tracing")]
fn trace_activation(action: &'static str, selected: usize) {
    debug!(event = "grid.activate", action, selected, "activation");
}

#[cfg(not(feature = "tracing"))]
fn trace_activation(_action: &'static str, _selected: usize) {}
