//! The article model.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A candidate document submitted for curation.
///
/// Every attribute may be absent; the curation pipeline decides which
/// articles are admissible. Two articles are the same article when all four
/// attributes are equal.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use curator::Article;
///
/// let article = Article::new()
///     .with_title("Hello, Mockito!")
///     .with_content("Where is verify?")
///     .with_author("noBrain")
///     .with_creation_date(NaiveDate::from_ymd_opt(2023, 10, 16).unwrap());
///
/// assert!(article.is_admissible());
/// assert_eq!(article.year(), Some(2023));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Calendar date the article was written, serialized as `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<NaiveDate>,
}

impl Article {
    /// Create an article with every attribute absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the creation date.
    pub fn with_creation_date(mut self, date: NaiveDate) -> Self {
        self.creation_date = Some(date);
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn creation_date(&self) -> Option<NaiveDate> {
        self.creation_date
    }

    /// Calendar year of the creation date, if one is set.
    pub fn year(&self) -> Option<i32> {
        self.creation_date.map(|d| d.year())
    }

    /// Check whether the article passes admission.
    ///
    /// Title, content and author must be present and non-empty. The
    /// creation date is not checked here; a missing date is filled in later.
    pub fn is_admissible(&self) -> bool {
        [self.title(), self.content(), self.author()]
            .into_iter()
            .all(|field| field.is_some_and(|s| !s.is_empty()))
    }

    /// Check whether all four attributes are present.
    pub fn is_complete(&self) -> bool {
        self.is_admissible() && self.creation_date.is_some()
    }

    /// Return a copy with the creation date set to `date` when it is absent.
    ///
    /// The receiver is left untouched.
    pub fn dated_or(&self, date: NaiveDate) -> Self {
        Self {
            creation_date: Some(self.creation_date.unwrap_or(date)),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> Article {
        Article::new()
            .with_title("Hello, Java!")
            .with_content("Some code")
            .with_author("noBrain")
            .with_creation_date(NaiveDate::from_ymd_opt(2023, 10, 11).unwrap())
    }

    #[test]
    fn test_admissible_requires_title_content_author() {
        assert!(full().is_admissible());
        assert!(!Article { title: None, ..full() }.is_admissible());
        assert!(!Article { content: None, ..full() }.is_admissible());
        assert!(!Article { author: None, ..full() }.is_admissible());
        assert!(!Article::new().is_admissible());
    }

    #[test]
    fn test_empty_strings_are_not_admissible() {
        assert!(!full().with_title("").is_admissible());
        assert!(!full().with_content("").is_admissible());
        assert!(!full().with_author("").is_admissible());
    }

    #[test]
    fn test_date_is_exempt_from_admission() {
        let undated = Article { creation_date: None, ..full() };
        assert!(undated.is_admissible());
        assert!(!undated.is_complete());
    }

    #[test]
    fn test_dated_or_keeps_existing_date() {
        let fallback = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        assert_eq!(full().dated_or(fallback).year(), Some(2023));

        let undated = Article { creation_date: None, ..full() };
        let dated = undated.dated_or(fallback);
        assert_eq!(dated.creation_date(), Some(fallback));
        assert_eq!(undated.creation_date(), None);
    }

    #[test]
    fn test_json_uses_camel_case_and_iso_dates() {
        let json = serde_json::to_value(full()).unwrap();
        assert_eq!(json["creationDate"], "2023-10-11");

        let parsed: Article = serde_json::from_str(r#"{"title": "A", "author": "B"}"#).unwrap();
        assert_eq!(parsed.title(), Some("A"));
        assert_eq!(parsed.content(), None);
        assert_eq!(parsed.creation_date(), None);
    }
}
