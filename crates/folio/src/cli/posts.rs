//! Post listing and display commands.

use std::path::Path;

use folio_core::date::{FormatOptions, format_date};
use folio_core::posts::{self, read_post};

/// Handle the list command: every post in the directory, newest first.
pub fn handle_list(dir: &Path, json: bool) -> Result<(), String> {
    let mut posts = posts::load_posts(dir).map_err(|e| e.to_string())?;
    posts::sort_newest_first(&mut posts);

    if json {
        let out = serde_json::to_string_pretty(&posts).map_err(|e| e.to_string())?;
        println!("{}", out);
        return Ok(());
    }

    for post in &posts {
        let date = match post.metadata.published_at.as_deref() {
            Some(raw) => {
                format_date(raw, false, &FormatOptions::default()).unwrap_or_else(|_| raw.to_string())
            }
            None => "undated".to_string(),
        };
        let title = post.metadata.title.as_deref().unwrap_or(&post.slug);
        println!("{} | {}", date, title);
        if let Some(summary) = &post.metadata.summary {
            println!("    {}", summary);
        }
    }
    Ok(())
}

/// Handle the show command: one post's metadata followed by its body.
pub fn handle_show(file: &Path, json: bool) -> Result<(), String> {
    let post = read_post(file).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&post).map_err(|e| e.to_string())?;
        println!("{}", out);
        return Ok(());
    }

    println!("slug: {}", post.slug);
    if let Some(title) = &post.metadata.title {
        println!("title: {}", title);
    }
    if let Some(raw) = post.metadata.published_at.as_deref() {
        let date =
            format_date(raw, true, &FormatOptions::default()).unwrap_or_else(|_| raw.to_string());
        println!("published: {}", date);
    }
    if let Some(author) = &post.metadata.author {
        println!("author: {}", author);
    }
    if let Some(summary) = &post.metadata.summary {
        println!("summary: {}", summary);
    }
    println!();
    println!("{}", post.body);
    Ok(())
}
