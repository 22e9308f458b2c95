#![allow(dead_code)]

use std::path::{Path, PathBuf};

use directory_grid::Entry;

/// Scratch directory under the system temp dir, removed on drop.
pub struct ScratchDir {
    root: PathBuf,
}

impl ScratchDir {
    pub fn new(tag: &str) -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        let root = std::env::temp_dir().join(format!(
            "directory-grid-{tag}-{}-{nanos}",
            std::process::id()
        ));
        std::fs::create_dir_all(&root).unwrap();
        Self { root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn entry(&self, name: &str) -> Entry {
        Entry::new(self.root.join(name))
    }

    pub fn file(&self, name: &str, contents: &[u8]) -> Entry {
        let entry = self.entry(name);
        std::fs::write(entry.as_path(), contents).unwrap();
        entry
    }

    pub fn dir(&self, name: &str) -> Entry {
        let entry = self.entry(name);
        std::fs::create_dir_all(entry.as_path()).unwrap();
        entry
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}
