//! Main Curator struct and public API.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::article::Article;
use crate::catalog::{CATALOG_HEADER, DEFAULT_INDENT, render_titles};
use crate::error::{CuratorError, Result};
use crate::library::Library;
use crate::pipeline::{prepare_on, today};

/// Configuration for catalog rendering.
#[derive(Debug, Clone)]
pub struct CuratorConfig {
    /// First line of the rendered catalog.
    pub header: String,
    /// Spaces before each title line.
    pub indent: usize,
}

impl Default for CuratorConfig {
    fn default() -> Self {
        Self {
            header: CATALOG_HEADER.to_string(),
            indent: DEFAULT_INDENT,
        }
    }
}

impl CuratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the catalog header.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Set the title indentation.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.indent == 0 {
            return Err(CuratorError::Config(
                "catalog indent must be at least one space".to_string(),
            ));
        }
        if self.header.contains('\n') {
            return Err(CuratorError::Config(
                "catalog header must be a single line".to_string(),
            ));
        }
        Ok(())
    }
}

/// Decision that a batch should be persisted.
///
/// Carries the derived year key and the prepared articles that justified
/// it. The payload written to the library is the caller's original batch,
/// passed separately.
#[derive(Debug, Clone, PartialEq)]
pub struct Admission {
    pub year: i32,
    pub prepared: Vec<Article>,
}

/// What `submit` did with a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SubmitOutcome {
    /// Nothing was admitted; the library was not touched.
    Skipped,
    /// The batch was persisted under `year` and the index refreshed.
    Persisted { year: i32, admitted: usize },
}

/// The curation engine.
///
/// Holds no state besides its configuration and a handle to the library;
/// every method takes `&self` and can be called from several places at once.
pub struct Curator {
    config: CuratorConfig,
    library: Arc<dyn Library>,
}

impl Curator {
    /// Create a curator with the default configuration.
    pub fn new(library: Arc<dyn Library>) -> Self {
        Self {
            config: CuratorConfig::default(),
            library,
        }
    }

    /// Create a curator with a custom configuration.
    pub fn with_config(library: Arc<dyn Library>, config: CuratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, library })
    }

    pub fn config(&self) -> &CuratorConfig {
        &self.config
    }

    /// Filter, date, and deduplicate a batch using today's local date.
    pub fn prepare(&self, batch: &[Article]) -> Vec<Article> {
        self.prepare_on(batch, today())
    }

    /// Filter, date, and deduplicate a batch using `today` as the default date.
    pub fn prepare_on(&self, batch: &[Article], today: NaiveDate) -> Vec<Article> {
        prepare_on(batch, today)
    }

    /// Decide whether a batch would be persisted, without touching the library.
    pub fn admit(&self, batch: &[Article]) -> Option<Admission> {
        self.admit_on(batch, today())
    }

    /// Like [`Curator::admit`] with an explicit default date.
    ///
    /// The year comes from the first prepared article. Batches whose
    /// admitted articles span several years are still keyed by that one
    /// year.
    pub fn admit_on(&self, batch: &[Article], today: NaiveDate) -> Option<Admission> {
        let prepared = self.prepare_on(batch, today);
        let year = prepared.first()?.year()?;

        let years: BTreeSet<i32> = prepared.iter().filter_map(Article::year).collect();
        if years.len() > 1 {
            warn!(
                year,
                ?years,
                "batch spans several years; persisting under the first"
            );
        }

        Some(Admission { year, prepared })
    }

    /// Submit a batch to the library.
    ///
    /// If nothing in the batch is admissible, the library is not called. Otherwise
    /// the original batch is persisted under the admission year and the
    /// title index is refreshed once. Library errors are returned as-is and
    /// a failed persist skips the refresh.
    pub fn submit(&self, batch: &[Article]) -> Result<SubmitOutcome> {
        self.submit_on(batch, today())
    }

    /// Like [`Curator::submit`] with an explicit default date.
    pub fn submit_on(&self, batch: &[Article], today: NaiveDate) -> Result<SubmitOutcome> {
        let Some(admission) = self.admit_on(batch, today) else {
            debug!(submitted = batch.len(), "nothing admitted; skipping persist");
            return Ok(SubmitOutcome::Skipped);
        };

        self.library.persist(admission.year, batch)?;
        self.library.refresh_index()?;

        info!(
            library = self.library.name(),
            year = admission.year,
            admitted = admission.prepared.len(),
            submitted = batch.len(),
            "submitted article batch"
        );

        Ok(SubmitOutcome::Persisted {
            year: admission.year,
            admitted: admission.prepared.len(),
        })
    }

    /// Render the catalog of every title the library knows.
    pub fn render_catalog(&self) -> Result<String> {
        let titles = self.library.list_titles()?;
        debug!(titles = titles.len(), "rendering catalog");
        Ok(render_titles(titles, &self.config.header, self.config.indent))
    }
}
