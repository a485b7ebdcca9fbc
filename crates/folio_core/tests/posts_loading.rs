//! Integration tests for loading posts from a directory.

use std::fs;
use std::path::Path;

use folio_core::error::FolioError;
use folio_core::posts::{load_posts, read_post, sort_newest_first};

fn write_post(dir: &Path, name: &str, title: &str, published_at: &str) {
    let content = format!(
        "---\ntitle: {title}\npublishedAt: {published_at}\nsummary: a summary\n---\n\nBody of {title}.\n"
    );
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_load_posts_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_post(dir.path(), "hello-world.mdx", "Hello World", "2025-01-05");
    write_post(dir.path(), "second.mdx", "Second", "2025-03-01");
    // Non-mdx files are ignored
    fs::write(dir.path().join("notes.txt"), "not a post").unwrap();
    fs::write(dir.path().join("README.md"), "# readme").unwrap();

    let posts = load_posts(dir.path()).unwrap();
    assert_eq!(posts.len(), 2);
    // Deterministic slug order regardless of directory iteration order
    assert_eq!(posts[0].slug, "hello-world");
    assert_eq!(posts[1].slug, "second");
    assert_eq!(posts[0].metadata.title.as_deref(), Some("Hello World"));
    assert_eq!(posts[0].body, "Body of Hello World.");
}

#[test]
fn test_sort_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    write_post(dir.path(), "old.mdx", "Old", "2023-06-01");
    write_post(dir.path(), "new.mdx", "New", "2025-08-22");
    write_post(dir.path(), "mid.mdx", "Mid", "2024-12-31");
    // Unparsable date sorts last
    write_post(dir.path(), "broken-date.mdx", "Broken", "someday");

    let mut posts = load_posts(dir.path()).unwrap();
    sort_newest_first(&mut posts);
    let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["new", "mid", "old", "broken-date"]);
}

#[test]
fn test_missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    assert!(matches!(
        load_posts(&missing),
        Err(FolioError::DirRead { .. })
    ));
}

#[test]
fn test_post_without_frontmatter_aborts_load() {
    let dir = tempfile::tempdir().unwrap();
    write_post(dir.path(), "good.mdx", "Good", "2025-01-01");
    fs::write(dir.path().join("bad.mdx"), "no front matter here\n").unwrap();

    assert!(matches!(
        load_posts(dir.path()),
        Err(FolioError::MissingFrontmatter)
    ));
}

#[test]
fn test_read_single_post() {
    let dir = tempfile::tempdir().unwrap();
    write_post(dir.path(), "a-post.mdx", "A Post", "2025-02-02");

    let post = read_post(&dir.path().join("a-post.mdx")).unwrap();
    assert_eq!(post.slug, "a-post");
    assert_eq!(post.metadata.published_at.as_deref(), Some("2025-02-02"));
    assert!(post.published_instant().is_some());
}
