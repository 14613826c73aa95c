//! Catalog rendering.
//!
//! The catalog is a plain-text listing of every known title:
//!
//! ```text
//! Список доступных статей:
//!     Абрикос
//!     Яблоко
//! ```
//!
//! Each line, the header included, ends with a single `\n`.

use std::cmp::Ordering;

/// Header line of the rendered catalog.
pub const CATALOG_HEADER: &str = "Список доступных статей:";

/// Default indentation of each title line, in spaces.
pub const DEFAULT_INDENT: usize = 4;

/// Render an unordered collection of titles into catalog text.
///
/// Titles are sorted with [`compare_titles`] before rendering.
///
/// # Example
///
/// ```
/// use curator::catalog::{render_titles, CATALOG_HEADER, DEFAULT_INDENT};
///
/// let text = render_titles(vec!["Яблоко".into(), "Абрикос".into()], CATALOG_HEADER, DEFAULT_INDENT);
/// assert_eq!(text, "Список доступных статей:\n    Абрикос\n    Яблоко\n");
/// ```
pub fn render_titles(mut titles: Vec<String>, header: &str, indent: usize) -> String {
    titles.sort_by(|a, b| compare_titles(a, b));

    let pad = " ".repeat(indent);
    let mut out = String::with_capacity(
        header.len() + 1 + titles.iter().map(|t| t.len() + indent + 1).sum::<usize>(),
    );
    out.push_str(header);
    out.push('\n');
    for title in &titles {
        out.push_str(&pad);
        out.push_str(title);
        out.push('\n');
    }
    out
}

/// Alphabetical comparison of two titles.
///
/// Case-insensitive first, with `ё` placed right after `е` as in the Russian
/// alphabet (plain code-point order would put it after `я`). Titles that
/// compare equal under folding fall back to code-point order, so the result
/// is a total order.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(s: &str) -> impl Iterator<Item = (char, u8)> + '_ {
    s.chars().flat_map(char::to_lowercase).map(|c| match c {
        'ё' => ('е', 1),
        other => (other, 0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(titles: &[&str]) -> String {
        render_titles(
            titles.iter().map(|s| s.to_string()).collect(),
            CATALOG_HEADER,
            DEFAULT_INDENT,
        )
    }

    #[test]
    fn test_empty_catalog_is_header_only() {
        assert_eq!(render(&[]), "Список доступных статей:\n");
    }

    #[test]
    fn test_titles_are_sorted_and_indented() {
        assert_eq!(
            render(&["Яблоко", "Абрикос"]),
            "Список доступных статей:\n    Абрикос\n    Яблоко\n"
        );
    }

    #[test]
    fn test_line_feed_and_space_counts() {
        let text = render(&["Яблоко", "Абрикос"]);
        assert_eq!(text.chars().filter(|&c| c == '\n').count(), 3);
        // Two spaces in the header, four per title line.
        assert_eq!(text.chars().filter(|&c| c == ' ').count(), 10);
        assert_eq!(text.lines().skip(1).count(), 2);
    }

    #[test]
    fn test_yo_sorts_after_ye() {
        assert_eq!(
            render(&["Жук", "Ёж", "Ель"]),
            "Список доступных статей:\n    Ель\n    Ёж\n    Жук\n"
        );
    }

    #[test]
    fn test_case_insensitive_order() {
        assert_eq!(compare_titles("банан", "Вишня"), Ordering::Less);
        assert_eq!(compare_titles("apple", "Banana"), Ordering::Less);
    }

    #[test]
    fn test_case_variants_are_totally_ordered() {
        assert_eq!(compare_titles("Абв", "абв"), "Абв".cmp("абв"));
        assert_eq!(compare_titles("абв", "абв"), Ordering::Equal);
    }

    #[test]
    fn test_custom_indent() {
        let text = render_titles(vec!["A".into()], "Articles:", 2);
        assert_eq!(text, "Articles:\n  A\n");
    }
}
