//! Table-of-contents command.

use std::path::Path;

use folio_core::headings::extract_headings_to_depth;
use folio_core::posts::read_post;

/// Handle the toc command: print the post's headings as an indented outline.
pub fn handle_toc(file: &Path, max_depth: usize, json: bool) -> Result<(), String> {
    let post = read_post(file).map_err(|e| e.to_string())?;
    let headings = extract_headings_to_depth(&post.body, max_depth);

    if json {
        let out = serde_json::to_string_pretty(&headings).map_err(|e| e.to_string())?;
        println!("{}", out);
        return Ok(());
    }

    for heading in &headings {
        println!(
            "{}{} (#{})",
            "  ".repeat(heading.level - 1),
            heading.text,
            heading.id
        );
    }
    Ok(())
}
