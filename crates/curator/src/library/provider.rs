//! Library trait.

use crate::article::Article;
use crate::error::Result;

/// Storage collaborator used by the curator.
///
/// Implementations own all persistent state and serialize their own access;
/// every method takes `&self`.
pub trait Library: Send + Sync {
    /// All currently known article titles, in no particular order.
    fn list_titles(&self) -> Result<Vec<String>>;

    /// Durably record `batch` under `year`.
    ///
    /// Whether this appends or merges is up to the implementation.
    fn persist(&self, year: i32, batch: &[Article]) -> Result<()>;

    /// Make the title index consistent after one or more `persist` calls.
    fn refresh_index(&self) -> Result<()>;

    /// Human-readable name, used in logs.
    fn name(&self) -> &str {
        "library"
    }
}
