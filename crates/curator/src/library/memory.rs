//! In-memory library grouped by year.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::article::Article;
use crate::error::{CuratorError, Result};

use super::provider::Library;

/// Serializable state of an [`InMemoryLibrary`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibrarySnapshot {
    /// Stored articles keyed by the year they were persisted under.
    #[serde(default)]
    pub articles: BTreeMap<i32, Vec<Article>>,

    /// Title index as of the last refresh.
    #[serde(default)]
    pub titles: BTreeSet<String>,
}

/// Library that keeps everything in memory.
///
/// `persist` appends to the year's bucket. The title index is only rebuilt
/// by `refresh_index`, so freshly persisted titles become visible after the
/// refresh. Inadmissible articles in a persisted batch are stored as given
/// but never indexed.
#[derive(Debug, Default)]
pub struct InMemoryLibrary {
    state: RwLock<LibrarySnapshot>,
}

impl InMemoryLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a library from a snapshot.
    pub fn from_snapshot(snapshot: LibrarySnapshot) -> Self {
        Self {
            state: RwLock::new(snapshot),
        }
    }

    /// Copy out the current state.
    pub fn snapshot(&self) -> Result<LibrarySnapshot> {
        Ok(self.read()?.clone())
    }

    /// Years that have at least one stored article, ascending.
    pub fn years(&self) -> Result<Vec<i32>> {
        Ok(self.read()?.articles.keys().copied().collect())
    }

    /// Articles stored under `year`, in persist order.
    pub fn articles_for_year(&self, year: i32) -> Result<Vec<Article>> {
        Ok(self
            .read()?
            .articles
            .get(&year)
            .cloned()
            .unwrap_or_default())
    }

    /// Total number of stored articles across all years.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.articles.values().map(Vec::len).sum())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, LibrarySnapshot>> {
        self.state
            .read()
            .map_err(|e| CuratorError::Storage(format!("library lock poisoned: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, LibrarySnapshot>> {
        self.state
            .write()
            .map_err(|e| CuratorError::Storage(format!("library lock poisoned: {}", e)))
    }
}

impl Library for InMemoryLibrary {
    fn list_titles(&self) -> Result<Vec<String>> {
        Ok(self.read()?.titles.iter().cloned().collect())
    }

    fn persist(&self, year: i32, batch: &[Article]) -> Result<()> {
        let mut state = self.write()?;
        state
            .articles
            .entry(year)
            .or_default()
            .extend(batch.iter().cloned());
        debug!(year, count = batch.len(), "persisted articles");
        Ok(())
    }

    fn refresh_index(&self) -> Result<()> {
        let mut state = self.write()?;
        let titles: BTreeSet<String> = state
            .articles
            .values()
            .flatten()
            .filter(|a| a.is_admissible())
            .filter_map(|a| a.title.clone())
            .collect();
        debug!(titles = titles.len(), "refreshed title index");
        state.titles = titles;
        Ok(())
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}
