// src/cli/shell.rs
//! Interactive session: the note list, a search box, the form and the pin
//! control, driven one command at a time.

use crate::application::{
    Confirmation, NoteForm, NoteListController, NoteStore, Notifier, PinBoard,
};
use crate::domain::{DomainError, NoteId};
use crate::ports::TextPresenter;
use anyhow::Result;
use inquire::{InquireError, Text};
use tracing::{debug, instrument};

pub const HELP: &str = "\
Commands:
  list              show the notes
  search [TERM]     filter by title, no term clears the filter
  add               create a note
  edit ID           edit a note
  cancel            leave edit mode
  delete ID         delete a note
  pin ID            move a note to the front and toggle its marker
  reload            fetch the notes from the store again
  help              show this help
  quit              leave the shell
";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    List,
    Search(String),
    Add,
    Edit(NoteId),
    Cancel,
    Delete(NoteId),
    Pin(NoteId),
    Reload,
    Help,
    Quit,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let id = |name: &str| -> Result<NoteId, String> {
            if rest.is_empty() {
                return Err(format!("usage: {name} ID"));
            }
            rest.parse().map_err(|e| format!("{e}"))
        };

        match word {
            "" | "list" | "ls" => Ok(Self::List),
            "search" | "find" => Ok(Self::Search(rest.to_string())),
            "add" | "new" => Ok(Self::Add),
            "edit" => id("edit").map(Self::Edit),
            "cancel" => Ok(Self::Cancel),
            "delete" | "rm" => id("delete").map(Self::Delete),
            "pin" => id("pin").map(Self::Pin),
            "reload" => Ok(Self::Reload),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(format!("unknown command '{other}', try 'help'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellFlow {
    Continue,
    Quit,
}

pub struct Shell<S: NoteStore, C: Confirmation, N: Notifier, F: NoteForm> {
    controller: NoteListController<S, C, N>,
    form: F,
    board: PinBoard,
    search: String,
    presenter: TextPresenter,
}

impl<S: NoteStore, C: Confirmation, N: Notifier, F: NoteForm> Shell<S, C, N, F> {
    pub fn new(controller: NoteListController<S, C, N>, form: F) -> Self {
        Self {
            controller,
            form,
            board: PinBoard::new(),
            search: String::new(),
            presenter: TextPresenter::new(),
        }
    }

    pub fn controller(&self) -> &NoteListController<S, C, N> {
        &self.controller
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// The visible notes in board order
    pub fn render(&mut self) -> String {
        let visible = self.controller.visible(&self.search);
        let entries = self.board.layout(&visible);
        let mut out = String::new();
        if !self.search.is_empty() {
            out.push_str(&format!(
                "Search \"{}\": {} of {} notes\n",
                self.search,
                entries.len(),
                self.controller.notes().len()
            ));
        }
        if let Some(session) = self.controller.edit_session() {
            out.push_str(&format!("Editing note {}\n", session.id()));
        }
        out.push_str(&self.presenter.render(&entries));
        out
    }

    #[instrument(level = "debug", skip(self))]
    pub fn execute(&mut self, command: ShellCommand) -> Result<ShellFlow> {
        match command {
            ShellCommand::List | ShellCommand::Help => {}
            ShellCommand::Search(term) => self.search = term,
            ShellCommand::Add => {
                self.controller.cancel_edit();
                if let Some(draft) = self.form.fill(None)? {
                    self.controller.submit(draft)?;
                }
            }
            ShellCommand::Edit(id) => {
                let current = self.controller.begin_edit(&id)?.to_draft();
                match self.form.fill(Some(&current))? {
                    Some(draft) => {
                        self.controller.submit(draft)?;
                    }
                    None => self.controller.cancel_edit(),
                }
            }
            ShellCommand::Cancel => self.controller.cancel_edit(),
            ShellCommand::Delete(id) => {
                self.controller.delete(&id)?;
            }
            ShellCommand::Pin(id) => {
                let visible = self.controller.visible(&self.search);
                self.board.layout(&visible);
                self.board.pin(&id)?;
            }
            ShellCommand::Reload => {
                self.controller.load()?;
                // Reloaded notes come back in store order
                self.board = PinBoard::new();
            }
            ShellCommand::Quit => return Ok(ShellFlow::Quit),
        }
        Ok(ShellFlow::Continue)
    }

    pub fn run(&mut self) -> Result<()> {
        // A failed load has been reported already; start with an empty list
        if let Err(e) = self.controller.load() {
            debug!(%e, "Starting with an empty list");
        }
        println!("{}", self.render());

        loop {
            let line = match Text::new("notepin>")
                .with_help_message("type 'help' for commands")
                .prompt()
            {
                Ok(line) => line,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
                Err(e) => return Err(e.into()),
            };
            let command = match ShellCommand::parse(&line) {
                Ok(command) => command,
                Err(message) => {
                    eprintln!("{message}");
                    continue;
                }
            };
            let show_help = command == ShellCommand::Help;
            match self.execute(command) {
                Ok(ShellFlow::Quit) => break,
                Ok(ShellFlow::Continue) if show_help => print!("{HELP}"),
                Ok(ShellFlow::Continue) => println!("{}", self.render()),
                // Store failures were already shown by the notifier
                Err(e) => match e.downcast_ref::<DomainError>() {
                    Some(DomainError::Store(_)) => debug!(%e, "Command failed"),
                    _ => eprintln!("{e}"),
                },
            }
        }
        Ok(())
    }
}
