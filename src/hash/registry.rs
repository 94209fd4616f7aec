// File registry module
// Disjoint partition of every identity created during one invocation

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::file::{ExistenceState, FileIdentity};

/// Found, not-found and unreadable paths, keyed by full path
///
/// A path is placed in exactly one set. Registering it again with a different
/// state moves it, so the latest identity for a path decides its class.
#[derive(Debug, Default)]
pub struct FileRegistry {
    states: HashMap<PathBuf, ExistenceState>,
    found: Vec<PathBuf>,
    not_found: Vec<PathBuf>,
    unreadable: Vec<PathBuf>,
}

/// Positions of the searched identities split by existence class, in input order
#[derive(Debug)]
pub struct SearchResult<'a> {
    files: &'a [FileIdentity],
    pub found: Vec<usize>,
    pub not_found: Vec<usize>,
    pub unreadable: Vec<usize>,
}

impl<'a> SearchResult<'a> {
    pub fn found_files(&self) -> impl Iterator<Item = &'a FileIdentity> + '_ {
        let files = self.files;
        self.found.iter().map(move |&i| &files[i])
    }

    /// Not found and unreadable paths together, for user facing reports
    pub fn missing(&self) -> Vec<PathBuf> {
        self.not_found
            .iter()
            .chain(self.unreadable.iter())
            .map(|&i| self.files[i].full_path())
            .collect()
    }
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn register(&mut self, identity: &FileIdentity) {
        let key = identity.full_path();
        let state = identity.state();
        match self.states.insert(key.clone(), state) {
            Some(previous) if previous == state => return,
            Some(previous) => {
                tracing::debug!(path = %key.display(), ?previous, current = ?state, "path reclassified");
                self.set_mut(previous).retain(|p| p != &key);
            }
            None => {}
        }
        self.set_mut(state).push(key);
    }

    fn set_mut(&mut self, state: ExistenceState) -> &mut Vec<PathBuf> {
        match state {
            ExistenceState::Found => &mut self.found,
            ExistenceState::NotFoundOnDisk => &mut self.not_found,
            ExistenceState::ExistsButUnreadable => &mut self.unreadable,
        }
    }

    /// Which set a path was registered in, if any
    pub fn classify(&self, path: &Path) -> Option<ExistenceState> {
        self.states.get(path).copied()
    }

    /// Intersect `files` with each of the three sets
    ///
    /// Identities this registry never saw are left out of every set.
    pub fn search<'a>(&self, files: &'a [FileIdentity]) -> SearchResult<'a> {
        let mut result = SearchResult {
            files,
            found: Vec::new(),
            not_found: Vec::new(),
            unreadable: Vec::new(),
        };
        for (idx, file) in files.iter().enumerate() {
            match self.classify(&file.full_path()) {
                Some(ExistenceState::Found) => result.found.push(idx),
                Some(ExistenceState::NotFoundOnDisk) => result.not_found.push(idx),
                Some(ExistenceState::ExistsButUnreadable) => result.unreadable.push(idx),
                None => {}
            }
        }
        result
    }

    pub fn found(&self) -> &[PathBuf] {
        &self.found
    }

    pub fn not_found(&self) -> &[PathBuf] {
        &self.not_found
    }

    pub fn unreadable(&self) -> &[PathBuf] {
        &self.unreadable
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
