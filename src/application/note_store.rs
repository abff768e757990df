// src/application/note_store.rs
use crate::domain::{DomainError, NewNote, Note, NoteId};

/// Durable home of the notes; owns id assignment.
pub trait NoteStore {
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError>;

    /// Returns the stored record carrying its assigned id
    fn create_note(&mut self, note: &NewNote) -> Result<Note, DomainError>;

    fn update_note(&mut self, note: &Note) -> Result<Note, DomainError>;

    fn delete_note(&mut self, id: &NoteId) -> Result<(), DomainError>;
}
