//! Fake collaborators shared by the unit tests.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::core::Entry;
use crate::fs::{FileSystemModel, Icon, invalid_file_name_reason};
use crate::host::ChooserHost;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum HostCall {
    Selected(Vec<Entry>),
    NavigateInto(Entry),
    Chose(Entry),
    Confirm,
    Status(String),
    Reveal(Entry),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    pub(crate) calls: Vec<HostCall>,
}

impl RecordingHost {
    pub(crate) fn take(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }

    pub(crate) fn statuses(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Status(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }
}

impl ChooserHost for RecordingHost {
    fn user_selected_entries(&mut self, entries: &[Entry]) {
        self.calls.push(HostCall::Selected(entries.to_vec()));
    }

    fn navigate_into(&mut self, entry: &Entry) {
        self.calls.push(HostCall::NavigateInto(entry.clone()));
    }

    fn user_chose_entry(&mut self, entry: &Entry) {
        self.calls.push(HostCall::Chose(entry.clone()));
    }

    fn confirm_dialog(&mut self) {
        self.calls.push(HostCall::Confirm);
    }

    fn set_status_text(&mut self, message: &str) {
        self.calls.push(HostCall::Status(message.to_string()));
    }

    fn reselect_and_reveal(&mut self, entry: &Entry) {
        self.calls.push(HostCall::Reveal(entry.clone()));
    }
}

/// In-memory file system: a set of directories plus a switch for refusing renames.
#[derive(Debug, Default)]
pub(crate) struct FakeFs {
    pub(crate) dirs: HashSet<Entry>,
    pub(crate) refuse_renames: bool,
    pub(crate) renames: RefCell<Vec<(Entry, Entry)>>,
}

impl FakeFs {
    pub(crate) fn with_dirs<I, E>(dirs: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

impl FileSystemModel for FakeFs {
    fn is_directory(&self, entry: &Entry) -> bool {
        self.dirs.contains(entry)
    }

    fn rename(&self, entry: &Entry, dest: &Entry) -> bool {
        if self.refuse_renames {
            return false;
        }
        self.renames.borrow_mut().push((entry.clone(), dest.clone()));
        true
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
