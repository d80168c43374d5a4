//! In-memory filesystem for walk tests.
//!
//! Records every probed path so tests can assert on probe order and on
//! probes that must never happen.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{EntryKind, FsProbePort};

#[derive(Debug, Default)]
pub struct FakeFs {
    entries: HashMap<PathBuf, EntryKind>,
    /// Directories whose contents cannot be probed.
    locked: HashSet<PathBuf>,
    probes: Mutex<Vec<PathBuf>>,
}

impl FakeFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory and all of its ancestors.
    #[must_use]
    pub fn dir(mut self, path: &str) -> Self {
        self.insert_ancestors(Path::new(path));
        self.entries.insert(PathBuf::from(path), EntryKind::Directory);
        self
    }

    /// Add a file, creating its ancestors as directories.
    #[must_use]
    pub fn file(mut self, path: &str) -> Self {
        self.insert_ancestors(Path::new(path));
        self.entries.insert(PathBuf::from(path), EntryKind::File);
        self
    }

    /// Make every probe strictly below `path` fail with `PermissionDenied`.
    #[must_use]
    pub fn locked(mut self, path: &str) -> Self {
        self.locked.insert(PathBuf::from(path));
        self
    }

    pub fn probes(&self) -> Vec<PathBuf> {
        self.probes.lock().unwrap().clone()
    }

    pub fn was_probed(&self, path: &str) -> bool {
        self.probes().iter().any(|p| p == Path::new(path))
    }

    fn insert_ancestors(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            self.entries.insert(ancestor.to_path_buf(), EntryKind::Directory);
        }
    }
}

#[async_trait]
impl FsProbePort for FakeFs {
    async fn stat(&self, path: &Path) -> io::Result<EntryKind> {
        self.probes.lock().unwrap().push(path.to_path_buf());
        if self
            .locked
            .iter()
            .any(|dir| path != dir && path.starts_with(dir))
        {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        Ok(self
            .entries
            .get(path)
            .copied()
            .unwrap_or(EntryKind::Missing))
    }
}
