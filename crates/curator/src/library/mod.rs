//! Library (storage) collaborators.
//!
//! The curator never stores anything itself. It talks to a [`Library`],
//! which persists submitted batches and answers which titles exist.
//!
//! # Implementations
//!
//! - [`InMemoryLibrary`] - articles grouped by year, with a title index
//!   rebuilt on [`Library::refresh_index`]. Snapshots through serde.
//! - [`MockLibrary`] - records calls and returns canned titles, for tests.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use curator::{Curator, InMemoryLibrary};
//!
//! let library = Arc::new(InMemoryLibrary::new());
//! let curator = Curator::new(library.clone());
//!
//! assert_eq!(curator.render_catalog().unwrap(), "Список доступных статей:\n");
//! ```

mod memory;
mod mock;
mod provider;

pub use memory::{InMemoryLibrary, LibrarySnapshot};
pub use mock::{MockFailure, MockLibrary, PersistCall};
pub use provider::Library;
