use std::ops::Range;

use indexmap::IndexSet;

use crate::core::{Entry, Modifiers};
use crate::model::EntryModel;

/// Selection state of the grid.
///
/// Every mutator returns whether the host should be told about the new
/// selection. While a drag gesture is in progress changes are recorded but
/// reported only once, by [`SelectionController::end_drag`].
#[derive(Clone, Debug, Default)]
pub struct SelectionController {
    selected: IndexSet<usize>,
    anchor: Option<usize>,
    allow_multi: bool,
    drag: Option<DragState>,
}

#[derive(Clone, Copy, Debug, Default)]
struct DragState {
    changed: bool,
}

impl SelectionController {
    /// Empty selection.
    pub fn new(allow_multi: bool) -> Self {
        Self {
            allow_multi,
            ..Self::default()
        }
    }

    /// Selected indices in ascending order.
    pub fn indices(&self) -> Vec<usize> {
        let mut out: Vec<usize> = self.selected.iter().copied().collect();
        out.sort_unstable();
        out
    }

    /// Lowest selected index.
    pub fn lead(&self) -> Option<usize> {
        self.selected.iter().copied().min()
    }

    /// Number of selected indices.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Whether `index` is selected.
    pub fn contains(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Whether a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Entries at the selected indices, in index order.
    pub fn selected_entries<M>(&self, model: &M) -> Vec<Entry>
    where
        M: EntryModel + ?Sized,
    {
        self.indices()
            .into_iter()
            .filter_map(|i| model.entry_at(i).cloned())
            .collect()
    }

    /// Make `index` the only selected index.
    pub fn select_single(&mut self, index: usize) -> bool {
        let changed = !(self.selected.len() == 1 && self.selected.contains(&index));
        self.selected.clear();
        self.selected.insert(index);
        self.anchor = Some(index);
        self.settle(changed)
    }

    /// Plain, Ctrl or Shift click on `index`.
    pub fn click(&mut self, index: usize, modifiers: Modifiers) -> bool {
        if self.allow_multi && modifiers.shift {
            if let Some(anchor) = self.anchor {
                return self.select_range(anchor, index);
            }
        }
        if self.allow_multi && modifiers.ctrl {
            if !self.selected.shift_remove(&index) {
                self.selected.insert(index);
            }
            self.anchor = Some(index);
            return self.settle(true);
        }
        self.select_single(index)
    }

    /// Replace the selection; indices `>= len` are dropped.
    pub fn set_indices<I>(&mut self, indices: I, len: usize) -> bool
    where
        I: IntoIterator<Item = usize>,
    {
        let mut next: IndexSet<usize> = indices.into_iter().filter(|i| *i < len).collect();
        if !self.allow_multi {
            next.truncate(1);
        }
        let changed = !same_set(&self.selected, &next);
        self.anchor = next.last().copied();
        self.selected = next;
        self.settle(changed)
    }

    /// Deselect everything.
    pub fn clear(&mut self) -> bool {
        let changed = !self.selected.is_empty();
        self.selected.clear();
        self.anchor = None;
        self.settle(changed)
    }

    /// Start a drag gesture, optionally pressing on `index`.
    pub fn begin_drag(&mut self, index: Option<usize>) {
        self.drag = Some(DragState::default());
        if let Some(index) = index {
            self.select_single(index);
        }
    }

    /// Extend the dragged selection to `index`.
    pub fn drag_to(&mut self, index: usize) {
        if !self.is_dragging() {
            return;
        }
        match self.anchor {
            Some(anchor) if self.allow_multi => {
                self.select_range(anchor, index);
            }
            _ => {
                self.select_single(index);
            }
        }
    }

    /// Finish a drag gesture; returns whether the selection changed during it.
    pub fn end_drag(&mut self) -> bool {
        self.drag.take().map(|d| d.changed).unwrap_or(false)
    }

    /// Shift indices after entries were inserted at `range`.
    pub fn on_inserted(&mut self, range: Range<usize>) {
        let n = range.len();
        let shift = |i: usize| if i >= range.start { i + n } else { i };
        self.selected = self.selected.iter().map(|&i| shift(i)).collect();
        self.anchor = self.anchor.map(shift);
    }

    /// Drop and shift indices after entries at `range` were removed.
    pub fn on_removed(&mut self, range: Range<usize>) -> bool {
        let n = range.len();
        let before = self.selected.len();
        let remap = |i: usize| {
            if range.contains(&i) {
                None
            } else if i >= range.end {
                Some(i - n)
            } else {
                Some(i)
            }
        };
        self.selected = self.selected.iter().filter_map(|&i| remap(i)).collect();
        self.anchor = self.anchor.and_then(remap);
        let changed = self.selected.len() != before;
        self.settle(changed)
    }

    /// Drop indices that no longer exist in a model of `len` entries.
    pub fn retain_valid(&mut self, len: usize) -> bool {
        let before = self.selected.len();
        self.selected.retain(|i| *i < len);
        if self.anchor.is_some_and(|a| a >= len) {
            self.anchor = None;
        }
        let changed = self.selected.len() != before;
        self.settle(changed)
    }

    fn select_range(&mut self, anchor: usize, target: usize) -> bool {
        let (lo, hi) = if anchor <= target {
            (anchor, target)
        } else {
            (target, anchor)
        };
        let next: IndexSet<usize> = (lo..=hi).collect();
        let changed = !same_set(&self.selected, &next);
        self.selected = next;
        self.settle(changed)
    }

    fn settle(&mut self, changed: bool) -> bool {
        match self.drag.as_mut() {
            Some(drag) => {
                drag.changed |= changed;
                false
            }
            None => changed,
        }
    }
}

fn same_set(a: &IndexSet<usize>, b: &IndexSet<usize>) -> bool {
    a.len() == b.len() && a.iter().all(|i| b.contains(i))
}
