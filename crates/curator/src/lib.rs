//! Curator: admission and cataloging of short articles.
//!
//! The curator decides which submitted articles are admissible, fills in
//! missing creation dates, drops duplicates, and hands batches to a
//! [`Library`] for storage. It also renders the library's titles as a
//! plain-text catalog.
//!
//! # Core Principles
//!
//! - **Best effort**: Inadmissible articles are dropped, never reported as errors
//! - **Non-destructive**: Input articles are never modified
//! - **Stateless**: All persistent state belongs to the library
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use curator::{Article, Curator, InMemoryLibrary, SubmitOutcome};
//!
//! let library = Arc::new(InMemoryLibrary::new());
//! let curator = Curator::new(library.clone());
//!
//! let batch = vec![
//!     Article::new()
//!         .with_title("Яблоко")
//!         .with_content("...")
//!         .with_author("noBrain")
//!         .with_creation_date(NaiveDate::from_ymd_opt(2023, 10, 16).unwrap()),
//!     Article::new().with_title("Абрикос"),
//! ];
//!
//! let outcome = curator.submit(&batch).unwrap();
//! assert_eq!(outcome, SubmitOutcome::Persisted { year: 2023, admitted: 1 });
//! assert_eq!(curator.render_catalog().unwrap(), "Список доступных статей:\n    Яблоко\n");
//! ```

pub mod article;
pub mod catalog;
pub mod error;
pub mod library;
pub mod pipeline;

mod curator;

pub use crate::curator::{Admission, Curator, CuratorConfig, SubmitOutcome};
pub use article::Article;
pub use catalog::CATALOG_HEADER;
pub use error::{CuratorError, Result};
pub use library::{InMemoryLibrary, Library, LibrarySnapshot, MockFailure, MockLibrary, PersistCall};
