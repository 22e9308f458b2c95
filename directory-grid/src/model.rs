use std::ops::Range;

use crate::core::Entry;

/// Change notification queued by an [`EntryModel`].
///
/// Ranges are index ranges at the time the change happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelChange {
    /// Entries were inserted at these indices.
    Inserted(Range<usize>),
    /// Entries at these indices were removed.
    Removed(Range<usize>),
    /// Entries at these indices were replaced in place.
    ContentChanged(Range<usize>),
}

/// Ordered, index-addressable list of entries shown by the grid.
///
/// Indices are stable between change notifications. Implementations queue a
/// [`ModelChange`] for every mutation; the grid drains them with
/// [`EntryModel::take_changes`] before handling input.
pub trait EntryModel {
    /// Number of entries.
    fn len(&self) -> usize;
    /// Whether the model holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Entry at `index`.
    fn entry_at(&self, index: usize) -> Option<&Entry>;
    /// Position of `entry`, or `None` when absent.
    fn index_of(&self, entry: &Entry) -> Option<usize>;
    /// Replace the entry at `index` without reordering; returns the old entry.
    fn replace_at(&mut self, index: usize, entry: Entry) -> Option<Entry>;
    /// Snapshot of every entry in order.
    fn all_entries(&self) -> Vec<Entry> {
        (0..self.len())
            .filter_map(|i| self.entry_at(i).cloned())
            .collect()
    }
    /// Drain queued change notifications, oldest first.
    fn take_changes(&mut self) -> Vec<ModelChange>;
}

/// In-memory [`EntryModel`] backed by a `Vec`.
#[derive(Clone, Debug, Default)]
pub struct VecEntryModel {
    entries: Vec<Entry>,
    changes: Vec<ModelChange>,
}

impl VecEntryModel {
    /// Empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Model pre-filled with entries. No notification is queued for them.
    pub fn from_entries<I, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
            changes: Vec::new(),
        }
    }

    /// Append an entry.
    pub fn push(&mut self, entry: impl Into<Entry>) {
        let index = self.entries.len();
        self.entries.push(entry.into());
        self.changes.push(ModelChange::Inserted(index..index + 1));
    }

    /// Insert an entry at `index` (clamped to the end).
    pub fn insert(&mut self, index: usize, entry: impl Into<Entry>) {
        let index = index.min(self.entries.len());
        self.entries.insert(index, entry.into());
        self.changes.push(ModelChange::Inserted(index..index + 1));
    }

    /// Remove and return the entry at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Entry> {
        if index >= self.entries.len() {
            return None;
        }
        let removed = self.entries.remove(index);
        self.changes.push(ModelChange::Removed(index..index + 1));
        Some(removed)
    }

    /// Replace the whole listing, e.g. after navigating to another directory.
    pub fn set_entries<I, E>(&mut self, entries: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry>,
    {
        let old_len = self.entries.len();
        self.entries = entries.into_iter().map(Into::into).collect();
        if old_len > 0 {
            self.changes.push(ModelChange::Removed(0..old_len));
        }
        if !self.entries.is_empty() {
            self.changes.push(ModelChange::Inserted(0..self.entries.len()));
        }
    }

    /// Borrow the entries.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

impl EntryModel for VecEntryModel {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn entry_at(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    fn index_of(&self, entry: &Entry) -> Option<usize> {
        self.entries.iter().position(|e| e == entry)
    }

    fn replace_at(&mut self, index: usize, entry: Entry) -> Option<Entry> {
        let slot = self.entries.get_mut(index)?;
        let old = std::mem::replace(slot, entry);
        self.changes.push(ModelChange::ContentChanged(index..index + 1));
        Some(old)
    }

    fn all_entries(&self) -> Vec<Entry> {
        self.entries.clone()
    }

    fn take_changes(&mut self) -> Vec<ModelChange> {
        std::mem::take(&mut self.changes)
    }
}
