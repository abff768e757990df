// src/cli/args.rs
use crate::domain::NoteId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the notes store, overrides the config file
    #[arg(short = 'u', long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List notes, optionally only those whose title contains SEARCH
    List {
        #[arg(value_name = "SEARCH")]
        search: Option<String>,
    },

    /// Create a note
    Add {
        #[arg(long, value_parser = non_empty)]
        title: String,

        #[arg(long, value_parser = non_empty)]
        content: String,

        #[arg(long, value_parser = non_empty)]
        tags: String,
    },

    /// Change a note; fields not given keep their value, the date never changes
    Edit {
        #[arg(value_name = "NOTE_ID")]
        note_id: NoteId,

        #[arg(long, value_parser = non_empty)]
        title: Option<String>,

        #[arg(long, value_parser = non_empty)]
        content: Option<String>,

        #[arg(long, value_parser = non_empty)]
        tags: Option<String>,
    },

    /// Delete a note after confirmation
    Delete {
        #[arg(value_name = "NOTE_ID")]
        note_id: NoteId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Open the notes as an HTML board in the browser
    Board {
        #[arg(value_name = "SEARCH")]
        search: Option<String>,
    },

    /// Interactive session with search, editing and pinning
    Shell,
}

fn non_empty(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err("must not be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}
