// src/application/mod.rs
pub mod collaborators;
pub mod edit_session;
pub mod in_flight;
pub mod note_list;
pub mod note_store;
pub mod pin_board;
pub mod search;

pub use collaborators::{Confirmation, NoteForm, Notifier};
pub use edit_session::EditSession;
pub use in_flight::{InFlight, OperationKey, Ticket};
pub use note_list::{check_date_format, NoteListController};
pub use note_store::NoteStore;
pub use pin_board::{BoardEntry, PinBoard};
pub use search::filter_notes;
