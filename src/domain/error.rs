// src/domain/error.rs
use crate::domain::NoteId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),
    #[error("Store error: {0}")]
    Store(String),
    #[error("No note is being edited")]
    NoEditSession,
    #[error("Edit session is for note {expected}, not {actual}")]
    EditSessionMismatch { expected: NoteId, actual: NoteId },
    #[error("Operation already in flight: {0}")]
    OperationInFlight(String),
    #[error("Invalid note: {0}")]
    InvalidNote(String),
    #[error("Not a valid strftime pattern: {0}")]
    InvalidDateFormat(String),
}
