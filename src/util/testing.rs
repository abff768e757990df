// src/util/testing.rs

use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{Confirmation, NoteForm, NoteStore, Notifier};
use crate::domain::{DomainError, NewNote, Note, NoteDraft, NoteId};
use std::collections::VecDeque;

/// In-memory stand-in for the REST store.
///
/// Keeps notes in insertion order, hands out numeric ids above the highest
/// one seen, and can be told to fail any single kind of request.
///
/// # Examples
///
/// ```
/// use notepin::util::testing::MockNoteStore;
/// use notepin::domain::Note;
///
/// let store = MockNoteStore::builder()
///     .with_note(Note {
///         id: 1.into(),
///         title: "Shopping".to_string(),
///         content: "milk".to_string(),
///         tags: "home".to_string(),
///         date: "1/1/2024, 9:00:00 AM".to_string(),
///     })
///     .failing_delete()
///     .build();
/// assert_eq!(store.notes().len(), 1);
/// ```
#[derive(Debug)]
pub struct MockNoteStore {
    notes: Vec<Note>,
    next_id: i64,
    fail_list: bool,
    fail_create: bool,
    fail_update: bool,
    fail_delete: bool,
    create_calls: usize,
    update_calls: usize,
    delete_calls: usize,
}

impl MockNoteStore {
    pub fn builder() -> MockNoteStoreBuilder {
        MockNoteStoreBuilder::new()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls
    }
}

impl NoteStore for MockNoteStore {
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        if self.fail_list {
            return Err(DomainError::Store("connection refused".to_string()));
        }
        Ok(self.notes.clone())
    }

    fn create_note(&mut self, note: &NewNote) -> Result<Note, DomainError> {
        self.create_calls += 1;
        if self.fail_create {
            return Err(DomainError::Store("500 Internal Server Error".to_string()));
        }
        let created = Note {
            id: NoteId::Number(self.next_id),
            title: note.title.clone(),
            content: note.content.clone(),
            tags: note.tags.clone(),
            date: note.date.clone(),
        };
        self.next_id += 1;
        self.notes.push(created.clone());
        Ok(created)
    }

    fn update_note(&mut self, note: &Note) -> Result<Note, DomainError> {
        self.update_calls += 1;
        if self.fail_update {
            return Err(DomainError::Store("500 Internal Server Error".to_string()));
        }
        let slot = self
            .notes
            .iter_mut()
            .find(|n| n.id == note.id)
            .ok_or_else(|| DomainError::NoteNotFound(note.id.clone()))?;
        *slot = note.clone();
        Ok(note.clone())
    }

    fn delete_note(&mut self, id: &NoteId) -> Result<(), DomainError> {
        self.delete_calls += 1;
        if self.fail_delete {
            return Err(DomainError::Store("500 Internal Server Error".to_string()));
        }
        let before = self.notes.len();
        self.notes.retain(|n| &n.id != id);
        if self.notes.len() == before {
            return Err(DomainError::NoteNotFound(id.clone()));
        }
        Ok(())
    }
}

/// Builder for MockNoteStore
pub struct MockNoteStoreBuilder {
    notes: Vec<Note>,
    fail_list: bool,
    fail_create: bool,
    fail_update: bool,
    fail_delete: bool,
}

impl MockNoteStoreBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            fail_list: false,
            fail_create: false,
            fail_update: false,
            fail_delete: false,
        }
    }

    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn failing_update(mut self) -> Self {
        self.fail_update = true;
        self
    }

    pub fn failing_delete(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    pub fn build(self) -> MockNoteStore {
        let highest = self
            .notes
            .iter()
            .filter_map(|n| match n.id {
                NoteId::Number(id) => Some(id),
                NoteId::Text(_) => None,
            })
            .max()
            .unwrap_or(0);
        MockNoteStore {
            notes: self.notes,
            next_id: highest + 1,
            fail_list: self.fail_list,
            fail_create: self.fail_create,
            fail_update: self.fail_update,
            fail_delete: self.fail_delete,
            create_calls: 0,
            update_calls: 0,
            delete_calls: 0,
        }
    }
}

impl Default for MockNoteStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Answers every prompt the same way and remembers what was asked.
#[derive(Debug, Clone)]
pub struct ScriptedConfirmation {
    answer: bool,
    prompts: Rc<RefCell<Vec<String>>>,
}

impl ScriptedConfirmation {
    pub fn yes() -> Self {
        Self {
            answer: true,
            prompts: Rc::default(),
        }
    }

    pub fn no() -> Self {
        Self {
            answer: false,
            prompts: Rc::default(),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl Confirmation for ScriptedConfirmation {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.answer
    }
}

/// Clones share one log, so a test can keep a handle after moving the
/// notifier into a controller.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    successes: Rc<RefCell<Vec<String>>>,
    failures: Rc<RefCell<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn successes(&self) -> Vec<String> {
        self.successes.borrow().clone()
    }

    pub fn failures(&self) -> Vec<String> {
        self.failures.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_string());
    }

    fn failure(&self, message: &str) {
        self.failures.borrow_mut().push(message.to_string());
    }
}

/// Hands out queued drafts; an empty queue behaves like a closed form.
#[derive(Debug, Default)]
pub struct ScriptedForm {
    drafts: VecDeque<NoteDraft>,
    seen: Vec<Option<NoteDraft>>,
}

impl ScriptedForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draft(mut self, draft: NoteDraft) -> Self {
        self.drafts.push_back(draft);
        self
    }

    /// The pre-populated values of every fill request, in order
    pub fn seen(&self) -> &[Option<NoteDraft>] {
        &self.seen
    }
}

impl NoteForm for ScriptedForm {
    fn fill(&mut self, initial: Option<&NoteDraft>) -> Result<Option<NoteDraft>> {
        self.seen.push(initial.cloned());
        Ok(self.drafts.pop_front())
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "rustls", "mio", "wiremock"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: i64) -> Note {
        Note {
            id: id.into(),
            title: format!("Note {id}"),
            content: "content".to_string(),
            tags: "tag".to_string(),
            date: "1/1/2024, 9:00:00 AM".to_string(),
        }
    }

    fn new_note() -> NewNote {
        NewNote {
            title: "fresh".to_string(),
            content: "content".to_string(),
            tags: "tag".to_string(),
            date: "today".to_string(),
        }
    }

    #[test]
    fn given_seeded_notes_when_creating_then_assigns_next_numeric_id() {
        let mut store = MockNoteStore::builder().with_note(note(4)).with_note(note(7)).build();

        let created = store.create_note(&new_note()).expect("Create should succeed");

        assert_eq!(created.id, NoteId::Number(8));
        assert_eq!(store.notes().len(), 3);
        assert_eq!(store.create_calls(), 1);
    }

    #[test]
    fn given_failing_create_when_creating_then_store_unchanged() {
        let mut store = MockNoteStore::builder().failing_create().build();

        let result = store.create_note(&new_note());

        assert!(matches!(result, Err(DomainError::Store(_))));
        assert!(store.notes().is_empty());
    }

    #[test]
    fn given_missing_note_when_deleting_then_not_found() {
        let mut store = MockNoteStore::builder().with_note(note(1)).build();

        let result = store.delete_note(&NoteId::from(2));

        assert!(matches!(result, Err(DomainError::NoteNotFound(id)) if id == NoteId::from(2)));
        assert_eq!(store.delete_calls(), 1);
    }

    #[test]
    fn given_cloned_notifier_when_notifying_then_both_handles_see_messages() {
        let notifier = RecordingNotifier::new();
        let handle = notifier.clone();

        notifier.success("saved");
        notifier.failure("boom");

        assert_eq!(handle.successes(), vec!["saved".to_string()]);
        assert_eq!(handle.failures(), vec!["boom".to_string()]);
    }
}
