//! ATX heading extraction for table-of-contents rendering.
//!
//! Scans a markdown/MDX body line by line for `#` through `######` headings
//! and derives a URL-safe anchor id for each one. Headings are returned in
//! document order; two headings with identical text produce identical ids
//! (collisions are not resolved).

use serde::Serialize;

/// A heading found in a document body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Nesting level, 1 through 6 (count of leading `#`)
    pub level: usize,
    /// Display text with `#` markers and padding stripped
    pub text: String,
    /// URL-safe anchor id derived from the text via [`slugify`]
    pub id: String,
}

/// Extract all ATX headings from a document body, in document order.
///
/// A heading line is 1-6 `#` characters followed by whitespace and text,
/// after trimming the line. Trailing `#` padding (`## Closed ##`) is
/// stripped from the text. Lines of `#` with no text are ignored.
///
/// # Examples
///
/// ```
/// use folio_core::headings::extract_headings;
///
/// let headings = extract_headings("# Title\n## Sub\ntext\n### Deep");
/// let levels: Vec<_> = headings.iter().map(|h| h.level).collect();
/// assert_eq!(levels, vec![1, 2, 3]);
/// assert_eq!(headings[1].id, "sub");
/// ```
pub fn extract_headings(source: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    for raw in source.lines() {
        let line = raw.trim();
        let level = line.chars().take_while(|&c| c == '#').count();
        if level == 0 || level > 6 {
            continue;
        }
        let rest = &line[level..];
        if !rest.starts_with([' ', '\t']) {
            continue;
        }
        // Strip optional closing "## " padding
        let text = rest.trim().trim_end_matches('#').trim_end();
        if text.is_empty() {
            continue;
        }
        headings.push(Heading {
            level,
            text: text.to_string(),
            id: slugify(text),
        });
    }
    headings
}

/// Extract headings no deeper than `max_depth`.
///
/// Mirrors the depth cap of the table-of-contents view, which by default
/// shows `#` through `###`.
pub fn extract_headings_to_depth(source: &str, max_depth: usize) -> Vec<Heading> {
    let mut headings = extract_headings(source);
    headings.retain(|h| h.level <= max_depth);
    headings
}

/// Slugify a string for use as a URL anchor.
///
/// Converts to lowercase, replaces non-alphanumeric runs with single dashes,
/// and trims dashes from the ends.
///
/// # Examples
///
/// ```
/// use folio_core::headings::slugify;
///
/// assert_eq!(slugify("My Cool Heading!"), "my-cool-heading");
/// assert_eq!(slugify("Déjà vu"), "déjà-vu");
/// ```
pub fn slugify(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_levels_in_document_order() {
        let headings = extract_headings("# Title\n## Sub\ntext\n### Deep");
        assert_eq!(headings.len(), 3);
        assert_eq!(
            headings.iter().map(|h| h.level).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(headings[0].text, "Title");
        assert_eq!(headings[0].id, "title");
        assert_eq!(headings[2].id, "deep");
    }

    #[test]
    fn test_non_heading_lines_are_skipped() {
        let source = "plain text\n#no-space\n####### seven\n> # quoted\n";
        assert!(extract_headings(source).is_empty());
    }

    #[test]
    fn test_trailing_hash_padding_is_stripped() {
        let headings = extract_headings("## Closed Heading ##\n### Padded ###  ");
        assert_eq!(headings[0].text, "Closed Heading");
        assert_eq!(headings[0].id, "closed-heading");
        assert_eq!(headings[1].text, "Padded");
    }

    #[test]
    fn test_leading_whitespace_is_tolerated() {
        let headings = extract_headings("   ## Indented");
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].level, 2);
        assert_eq!(headings[0].text, "Indented");
    }

    #[test]
    fn test_hash_only_lines_are_ignored() {
        assert!(extract_headings("#\n## \n### ###").is_empty());
    }

    #[test]
    fn test_duplicate_headings_keep_colliding_ids() {
        let headings = extract_headings("# Setup\n## Setup");
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].id, headings[1].id);
    }

    #[test]
    fn test_depth_cap() {
        let source = "# One\n## Two\n### Three\n#### Four";
        let headings = extract_headings_to_depth(source, 3);
        assert_eq!(
            headings.iter().map(|h| h.level).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("My Cool Heading"), "my-cool-heading");
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  spaces   everywhere  "), "spaces-everywhere");
        assert_eq!(slugify("Already-Kebab"), "already-kebab");
        assert_eq!(slugify("100% Coverage"), "100-coverage");
    }
}
