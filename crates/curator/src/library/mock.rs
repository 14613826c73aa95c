//! Mock library for testing.

use std::sync::{Mutex, MutexGuard};

use crate::article::Article;
use crate::error::{CuratorError, Result};

use super::provider::Library;

/// One recorded `persist` call.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistCall {
    pub year: i32,
    pub batch: Vec<Article>,
}

#[derive(Debug, Default)]
struct Recorded {
    persist_calls: Vec<PersistCall>,
    refresh_count: usize,
    list_count: usize,
}

/// Which operation a [`MockLibrary`] should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    ListTitles,
    Persist,
    RefreshIndex,
}

/// Mock library that returns canned titles and records every call.
///
/// ```
/// use std::sync::Arc;
/// use curator::{Curator, MockLibrary};
///
/// let library = Arc::new(MockLibrary::with_titles(["Яблоко", "Абрикос"]));
/// let curator = Curator::new(library.clone());
///
/// curator.submit(&[]).unwrap();
/// assert!(library.persist_calls().is_empty());
/// assert_eq!(library.refresh_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct MockLibrary {
    titles: Vec<String>,
    failure: Option<MockFailure>,
    recorded: Mutex<Recorded>,
}

impl MockLibrary {
    /// Create a mock with no titles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that reports the given titles.
    pub fn with_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Make one operation return a storage error.
    pub fn failing(mut self, failure: MockFailure) -> Self {
        self.failure = Some(failure);
        self
    }

    /// Every `persist` call so far, in order.
    pub fn persist_calls(&self) -> Vec<PersistCall> {
        self.recorded().persist_calls.clone()
    }

    /// Number of `refresh_index` calls so far.
    pub fn refresh_count(&self) -> usize {
        self.recorded().refresh_count
    }

    /// Number of `list_titles` calls so far.
    pub fn list_count(&self) -> usize {
        self.recorded().list_count
    }

    fn recorded(&self) -> MutexGuard<'_, Recorded> {
        self.recorded
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check(&self, op: MockFailure) -> Result<()> {
        if self.failure == Some(op) {
            return Err(CuratorError::Storage(format!("mock failure in {:?}", op)));
        }
        Ok(())
    }
}

impl Library for MockLibrary {
    fn list_titles(&self) -> Result<Vec<String>> {
        self.recorded().list_count += 1;
        self.check(MockFailure::ListTitles)?;
        Ok(self.titles.clone())
    }

    fn persist(&self, year: i32, batch: &[Article]) -> Result<()> {
        self.recorded().persist_calls.push(PersistCall {
            year,
            batch: batch.to_vec(),
        });
        self.check(MockFailure::Persist)
    }

    fn refresh_index(&self) -> Result<()> {
        self.recorded().refresh_count += 1;
        self.check(MockFailure::RefreshIndex)
    }

    fn name(&self) -> &str {
        "mock"
    }
}
