//! Loading blog posts from a directory of `.mdx` files.
//!
//! The slug of a post is its file stem: `posts/hello-world.mdx` becomes
//! `hello-world`. Enumeration is non-recursive and only `.mdx` files are
//! considered; anything else in the directory is ignored.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;

use crate::date;
use crate::error::{FolioError, Result};
use crate::frontmatter::{self, Metadata};

/// A loaded blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    /// URL slug, taken from the file stem
    pub slug: String,
    /// Parsed front matter
    pub metadata: Metadata,
    /// Body content with the front matter block removed
    pub body: String,
}

impl Post {
    /// The post's publication instant, if `publishedAt` is present and parses.
    pub fn published_instant(&self) -> Option<DateTime<Utc>> {
        self.metadata
            .published_at
            .as_deref()
            .and_then(|raw| date::parse_instant(raw).ok())
    }
}

/// Load all posts from a directory.
///
/// Posts are returned sorted by slug so the result is deterministic across
/// filesystems; use [`sort_newest_first`] for a publication-date listing.
///
/// # Errors
///
/// Fails if the directory cannot be listed, a post file cannot be read, or
/// a post has no front matter block. A malformed post aborts the whole load
/// rather than being silently skipped.
pub fn load_posts(dir: &Path) -> Result<Vec<Post>> {
    let mut posts = Vec::new();
    for path in mdx_files(dir)? {
        posts.push(read_post(&path)?);
    }
    posts.sort_by(|a, b| a.slug.cmp(&b.slug));
    debug!("loaded {} posts from {}", posts.len(), dir.display());
    Ok(posts)
}

/// Read and parse a single post file.
pub fn read_post(path: &Path) -> Result<Post> {
    let content = fs::read_to_string(path).map_err(|source| FolioError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = frontmatter::parse(&content)?;
    let slug = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default()
        .to_string();
    Ok(Post {
        slug,
        metadata: parsed.metadata,
        body: parsed.body,
    })
}

/// Sort posts by publication date, newest first.
///
/// Posts whose `publishedAt` is missing or unparsable sort last, by slug.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        let a_date = a.published_instant();
        let b_date = b.published_instant();
        b_date.cmp(&a_date).then_with(|| a.slug.cmp(&b.slug))
    });
}

/// Enumerate `.mdx` files in a directory (non-recursive).
fn mdx_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| FolioError::DirRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| FolioError::DirRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("mdx") {
            files.push(path);
        }
    }
    Ok(files)
}
