//! Command-line interface for folio blog content utilities.

mod date;
mod posts;
mod toc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Blog content utilities: front matter, dates, and headings"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List posts in a directory, newest first
    List {
        /// Directory containing .mdx posts
        dir: PathBuf,
        /// Emit JSON instead of a text listing
        #[arg(long)]
        json: bool,
    },
    /// Show a single post's metadata and body
    Show {
        /// Path to a .mdx post file
        file: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the table of contents of a post
    Toc {
        /// Path to a .mdx post file
        file: PathBuf,
        /// Deepest heading level to include
        #[arg(long, default_value_t = 3)]
        max_depth: usize,
        /// Emit JSON instead of an indented outline
        #[arg(long)]
        json: bool,
    },
    /// Format a date for display
    Date {
        /// A YYYY-MM-DD date or ISO-8601 timestamp
        input: String,
        /// Append a relative label such as "(3d ago)"
        #[arg(long)]
        relative: bool,
        /// IANA timezone to project into, e.g. Europe/Paris
        #[arg(long)]
        time_zone: Option<String>,
        /// Locale code: en, fr, or nl
        #[arg(long)]
        locale: Option<String>,
        /// Reference instant for relative labels (defaults to the current time)
        #[arg(long)]
        now: Option<String>,
    },
}

/// Parse arguments and dispatch to the command handlers.
pub fn run_cli() {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::List { dir, json } => posts::handle_list(&dir, json),
        Command::Show { file, json } => posts::handle_show(&file, json),
        Command::Toc {
            file,
            max_depth,
            json,
        } => toc::handle_toc(&file, max_depth, json),
        Command::Date {
            input,
            relative,
            time_zone,
            locale,
            now,
        } => date::handle_date(
            &input,
            relative,
            time_zone.as_deref(),
            locale.as_deref(),
            now.as_deref(),
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
