// src/infrastructure/mod.rs
pub mod config;
pub mod prompt;
pub mod renderer;
pub mod rest_store;

pub use config::Config;
pub use prompt::{TerminalConfirmation, TerminalForm, TerminalNotifier};
pub use rest_store::RestNoteStore;
