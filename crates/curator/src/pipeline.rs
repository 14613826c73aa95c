//! Admission pipeline: filter, default, deduplicate.
//!
//! ```text
//! batch ──► admissible? ──► fill missing date ──► first occurrence wins ──► prepared
//! ```

use chrono::{Local, NaiveDate};
use indexmap::IndexSet;
use tracing::{debug, trace};

use crate::article::Article;

/// Current local calendar date, the default for undated articles.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Run the admission pipeline, dating undated articles with [`today`].
///
/// Needs no library; `Curator::prepare` delegates here.
pub fn prepare(batch: &[Article]) -> Vec<Article> {
    prepare_on(batch, today())
}

/// Run the admission pipeline with an explicit "today".
///
/// Articles missing a title, content, or author are dropped. Admitted
/// articles without a creation date receive `today`. Articles equal in all
/// four attributes after defaulting collapse to their first occurrence.
pub fn prepare_on(batch: &[Article], today: NaiveDate) -> Vec<Article> {
    let prepared: IndexSet<Article> = batch
        .iter()
        .filter(|article| {
            let admissible = article.is_admissible();
            if !admissible {
                trace!(title = ?article.title(), "excluding inadmissible article");
            }
            admissible
        })
        .map(|article| article.dated_or(today))
        .collect();

    debug!(
        submitted = batch.len(),
        prepared = prepared.len(),
        "prepared article batch"
    );

    prepared.into_iter().collect()
}
