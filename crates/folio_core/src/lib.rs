//! # `folio_core`
//!
//! Content utilities for a markdown/MDX blog: front matter parsing,
//! locale-aware date formatting, and heading extraction for tables of
//! contents.
//!
//! All parsing and formatting routines are pure functions over in-memory
//! text and date values. The only module that touches the filesystem is
//! [`posts`], which enumerates and loads `.mdx` files from a directory.

#![warn(missing_docs)]

pub mod date;
pub mod error;
pub mod frontmatter;
pub mod headings;
pub mod posts;

pub use date::{FormatOptions, format_date, parse_instant};
pub use error::{FolioError, Result};
pub use frontmatter::{Metadata, ParsedDocument};
pub use headings::{Heading, extract_headings, slugify};
pub use posts::{Post, load_posts};
