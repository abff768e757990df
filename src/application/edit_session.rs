// src/application/edit_session.rs
use crate::domain::{Note, NoteId};

/// The note the form is currently editing. Holds a snapshot taken when
/// editing began; its `date` is what an update carries forward.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    note: Note,
}

impl EditSession {
    pub fn new(note: Note) -> Self {
        Self { note }
    }

    pub fn id(&self) -> &NoteId {
        &self.note.id
    }

    pub fn note(&self) -> &Note {
        &self.note
    }
}
