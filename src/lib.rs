// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::Result;
use application::NoteListController;
use cli::args::{Args, Command};
use cli::commands::{self, NotePatch};
use cli::shell::Shell;
use domain::NoteDraft;
use infrastructure::renderer::BoardRenderer;
use infrastructure::{Config, RestNoteStore, TerminalConfirmation, TerminalForm, TerminalNotifier};
use tracing::{debug, info};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notepin with arguments");

    let mut config = Config::resolve(args.config.as_deref())?;
    if let Some(base_url) = args.base_url {
        debug!(%base_url, "Store URL overridden on the command line");
        config.store.base_url = base_url;
    }

    // Initialize infrastructure
    let store = RestNoteStore::new(&config.store.base_url, config.store.timeout())?;
    let assume_yes = matches!(args.command, Command::Delete { yes: true, .. });

    // Initialize application
    let mut controller = NoteListController::new(
        store,
        TerminalConfirmation::new(assume_yes),
        TerminalNotifier,
    )
    .with_date_format(config.display.date_format.clone())?;

    match args.command {
        Command::List { search } => {
            print!("{}", commands::list(&mut controller, search.as_deref().unwrap_or(""))?);
        }
        Command::Add {
            title,
            content,
            tags,
        } => {
            let note = commands::add(&mut controller, NoteDraft::new(title, content, tags))?;
            info!(id = %note.id, "Added note");
        }
        Command::Edit {
            note_id,
            title,
            content,
            tags,
        } => {
            let patch = NotePatch {
                title,
                content,
                tags,
            };
            let note = commands::edit(&mut controller, &note_id, patch)?;
            info!(id = %note.id, "Edited note");
        }
        Command::Delete { note_id, .. } => {
            if !commands::delete(&mut controller, &note_id)? {
                println!("Nothing deleted");
            }
        }
        Command::Board { search } => {
            let html = commands::board(&mut controller, search.as_deref().unwrap_or(""))?;
            let mut renderer = BoardRenderer::new();
            let path = renderer.create_temp_file(&html)?;
            renderer.open_in_browser(&path)?;
        }
        Command::Shell => {
            Shell::new(controller, TerminalForm).run()?;
        }
    }

    Ok(())
}
