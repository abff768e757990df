// src/application/collaborators.rs
use crate::domain::NoteDraft;

/// Yes/no question put to the user before a destructive action.
pub trait Confirmation {
    fn confirm(&self, message: &str) -> bool;
}

/// Sink for user-facing outcome messages.
pub trait Notifier {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}

/// Collects title, content and tags, refusing empty fields. `initial`
/// pre-populates the fields in edit mode. `Ok(None)` means the user
/// closed the form.
pub trait NoteForm {
    fn fill(&mut self, initial: Option<&NoteDraft>) -> anyhow::Result<Option<NoteDraft>>;
}
