//! Front matter extraction for blog posts.
//!
//! Posts begin with a fenced metadata block:
//!
//! ```text
//! ---
//! title: My Post
//! publishedAt: 2025-08-22
//! summary: "A post about: things"
//! ---
//!
//! Body content...
//! ```
//!
//! The block is a flat list of `key: value` lines (not full YAML). Values may
//! be wrapped in a single pair of matching straight quotes, which are
//! stripped. A document without a fenced block is malformed and fails with
//! [`FolioError::MissingFrontmatter`] rather than returning empty metadata.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Metadata parsed from a post's front matter block.
///
/// The five known fields are lifted into named members; any other keys are
/// kept, in document order, in [`extra`](Self::extra). All values are plain
/// strings exactly as written (quotes stripped, whitespace trimmed).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Display title
    pub title: Option<String>,
    /// Publication date (`publishedAt` in the front matter), kept as the
    /// raw string; see [`crate::date`] for parsing and formatting.
    pub published_at: Option<String>,
    /// Short summary shown in post listings
    pub summary: Option<String>,
    /// Optional cover image reference
    pub image: Option<String>,
    /// Optional author name
    pub author: Option<String>,
    /// Any front matter keys beyond the known set, in document order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub extra: IndexMap<String, String>,
}

impl Metadata {
    /// Build a `Metadata` from raw `key -> value` fields.
    ///
    /// Known keys (`title`, `publishedAt`, `summary`, `image`, `author`) are
    /// moved into named members; everything else lands in `extra`.
    pub fn from_fields(fields: IndexMap<String, String>) -> Self {
        let mut metadata = Metadata::default();
        for (key, value) in fields {
            match key.as_str() {
                "title" => metadata.title = Some(value),
                "publishedAt" => metadata.published_at = Some(value),
                "summary" => metadata.summary = Some(value),
                "image" => metadata.image = Some(value),
                "author" => metadata.author = Some(value),
                _ => {
                    metadata.extra.insert(key, value);
                }
            }
        }
        metadata
    }
}

/// A post split into parsed metadata and body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDocument {
    /// Parsed front matter fields
    pub metadata: Metadata,
    /// Body content with the fenced block removed and whitespace trimmed
    pub body: String,
}

/// Parse a document into front matter and body.
///
/// The fenced region is located by the first `---` in the document and the
/// nearest `---` that follows it; the text between the fences is the header
/// block and the body is everything outside the matched region, trimmed.
///
/// Header lines are split on the first `": "` occurrence, so values may
/// themselves contain `": "` untouched. Duplicate keys keep the last value.
///
/// # Errors
///
/// Returns [`FolioError::MissingFrontmatter`] when no fence pair exists.
///
/// # Examples
///
/// ```
/// use folio_core::frontmatter;
///
/// let doc = "---\ntitle: Hello\npublishedAt: 2025-08-22\nsummary: \"Hi: there\"\n---\n\nBody.";
/// let parsed = frontmatter::parse(doc).unwrap();
/// assert_eq!(parsed.metadata.title.as_deref(), Some("Hello"));
/// assert_eq!(parsed.metadata.summary.as_deref(), Some("Hi: there"));
/// assert_eq!(parsed.body, "Body.");
/// ```
pub fn parse(content: &str) -> Result<ParsedDocument> {
    let (block, body) = split_fenced_block(content)?;

    let mut fields: IndexMap<String, String> = IndexMap::new();
    for line in block.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        // Only the first ": " separates key from value; later occurrences
        // belong to the value. A line without a separator has an empty value.
        let (key, value) = match line.split_once(": ") {
            Some((key, value)) => (key, value),
            None => (line, ""),
        };
        let value = strip_outer_quotes(value.trim());
        fields.insert(key.trim().to_string(), value.to_string());
    }

    Ok(ParsedDocument {
        metadata: Metadata::from_fields(fields),
        body,
    })
}

/// Locate the fenced front matter region.
///
/// Returns the trimmed header block and the trimmed remainder of the
/// document with the whole fenced region removed.
fn split_fenced_block(content: &str) -> Result<(&str, String)> {
    let open = content.find("---").ok_or(FolioError::MissingFrontmatter)?;
    let block_start = open + 3;
    let close = content[block_start..]
        .find("---")
        .ok_or(FolioError::MissingFrontmatter)?
        + block_start;

    let block = content[block_start..close].trim();

    let mut body = String::with_capacity(content.len());
    body.push_str(&content[..open]);
    body.push_str(&content[close + 3..]);

    Ok((block, body.trim().to_string()))
}

/// Strip exactly one outer pair of matching straight quotes, if present.
fn strip_outer_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
