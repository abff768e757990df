// src/application/note_list.rs
use crate::application::{
    filter_notes, Confirmation, EditSession, InFlight, NoteStore, Notifier, OperationKey,
};
use crate::constants::DEFAULT_DATE_FORMAT;
use crate::domain::{DomainError, Note, NoteDraft, NoteId};
use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use tracing::{debug, info, instrument, warn};

type Clock = Box<dyn Fn() -> String>;

/// Owns the session's note list and keeps it in step with the store.
///
/// Every mutation of the list happens only after the store confirmed the
/// request. A failed request leaves the list exactly as it was.
pub struct NoteListController<S: NoteStore, C: Confirmation, N: Notifier> {
    store: S,
    confirmation: C,
    notifier: N,
    notes: Vec<Note>,
    session: Option<EditSession>,
    in_flight: InFlight,
    clock: Clock,
}

impl<S: NoteStore, C: Confirmation, N: Notifier> NoteListController<S, C, N> {
    pub fn new(store: S, confirmation: C, notifier: N) -> Self {
        Self {
            store,
            confirmation,
            notifier,
            notes: Vec::new(),
            session: None,
            in_flight: InFlight::new(),
            clock: local_clock(DEFAULT_DATE_FORMAT.to_string()),
        }
    }

    /// Stamp new notes using a chrono strftime pattern
    pub fn with_date_format(mut self, format: impl Into<String>) -> Result<Self, DomainError> {
        let format = format.into();
        check_date_format(&format)?;
        self.clock = local_clock(format);
        Ok(self)
    }

    pub fn with_clock(mut self, clock: impl Fn() -> String + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn visible(&self, search: &str) -> Vec<&Note> {
        filter_notes(&self.notes, search)
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn in_flight(&self) -> &InFlight {
        &self.in_flight
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the local list with everything the store holds.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&mut self) -> Result<(), DomainError> {
        match self.store.list_notes() {
            Ok(notes) => {
                info!(count = notes.len(), "Loaded notes");
                self.notes = notes;
                Ok(())
            }
            Err(e) => {
                self.report_failure("Loading notes failed", &e);
                Err(e)
            }
        }
    }

    /// Open the form on `id`; returns the note for pre-population.
    pub fn begin_edit(&mut self, id: &NoteId) -> Result<&Note, DomainError> {
        let note = self
            .notes
            .iter()
            .find(|n| &n.id == id)
            .ok_or_else(|| DomainError::NoteNotFound(id.clone()))?;
        debug!(%id, "Editing note");
        self.session = Some(EditSession::new(note.clone()));
        Ok(note)
    }

    pub fn cancel_edit(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(id = %session.id(), "Edit cancelled");
        }
    }

    /// The form's submit action: update when editing, create otherwise.
    pub fn submit(&mut self, draft: NoteDraft) -> Result<Note, DomainError> {
        match self.session.as_ref().map(|s| s.id().clone()) {
            Some(id) => self.update(&id, draft),
            None => self.create(draft),
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn create(&mut self, draft: NoteDraft) -> Result<Note, DomainError> {
        let _ticket = self.in_flight.acquire(OperationKey::Create)?;

        let request = draft.stamped((self.clock)());
        match self.store.create_note(&request) {
            Ok(created) => {
                info!(id = %created.id, "Note created");
                self.notes.push(created.clone());
                self.session = None;
                self.notifier.success("Note created");
                Ok(created)
            }
            Err(e) => {
                self.report_failure("Creating note failed", &e);
                Err(e)
            }
        }
    }

    /// Requires an edit session on `id`. The note keeps its original date
    /// and its place in the list.
    #[instrument(level = "debug", skip(self))]
    pub fn update(&mut self, id: &NoteId, draft: NoteDraft) -> Result<Note, DomainError> {
        let session = self.session.as_ref().ok_or(DomainError::NoEditSession)?;
        if session.id() != id {
            return Err(DomainError::EditSessionMismatch {
                expected: session.id().clone(),
                actual: id.clone(),
            });
        }
        let revised = session.note().revised(&draft);

        let _ticket = self.in_flight.acquire(OperationKey::Note(id.clone()))?;

        match self.store.update_note(&revised) {
            Ok(updated) => {
                match self.notes.iter_mut().find(|n| &n.id == id) {
                    Some(slot) => *slot = updated.clone(),
                    None => warn!(%id, "Updated note is no longer in the list"),
                }
                info!(%id, "Note updated");
                self.session = None;
                self.notifier.success("Note updated");
                Ok(updated)
            }
            Err(e) => {
                self.report_failure("Updating note failed", &e);
                Err(e)
            }
        }
    }

    /// Returns `Ok(false)` when the user declines; nothing changes then.
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, id: &NoteId) -> Result<bool, DomainError> {
        let title = self
            .notes
            .iter()
            .find(|n| &n.id == id)
            .map(|n| n.title.clone())
            .ok_or_else(|| DomainError::NoteNotFound(id.clone()))?;

        let _ticket = self.in_flight.acquire(OperationKey::Note(id.clone()))?;

        if !self
            .confirmation
            .confirm(&format!("Delete note \"{title}\"?"))
        {
            debug!(%id, "Delete declined");
            return Ok(false);
        }

        match self.store.delete_note(id) {
            Ok(()) => {
                self.notes.retain(|n| &n.id != id);
                if self.session.as_ref().is_some_and(|s| s.id() == id) {
                    debug!(%id, "Deleted note was open in the form");
                    self.session = None;
                }
                info!(%id, "Note deleted");
                self.notifier.success("Note deleted");
                Ok(true)
            }
            Err(e) => {
                self.report_failure("Deleting note failed", &e);
                Err(e)
            }
        }
    }

    fn report_failure(&self, action: &str, error: &DomainError) {
        warn!(%error, "{action}");
        self.notifier.failure(&format!("{action}: {error}"));
    }
}

/// Rejects patterns chrono cannot render; formatting one would panic.
pub fn check_date_format(format: &str) -> Result<(), DomainError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(DomainError::InvalidDateFormat(format.to_string()));
    }
    Ok(())
}

fn local_clock(format: String) -> Clock {
    Box::new(move || Local::now().format(&format).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::{MockNoteStore, RecordingNotifier, ScriptedConfirmation};

    fn note(id: i64, title: &str) -> Note {
        Note {
            id: id.into(),
            title: title.to_string(),
            content: format!("{title} content"),
            tags: "tag".to_string(),
            date: "1/1/2024, 9:00:00 AM".to_string(),
        }
    }

    fn controller(
        store: MockNoteStore,
    ) -> NoteListController<MockNoteStore, ScriptedConfirmation, RecordingNotifier> {
        NoteListController::new(store, ScriptedConfirmation::yes(), RecordingNotifier::new())
            .with_clock(|| "10/16/2026, 9:22:00 AM".to_string())
    }

    #[test]
    fn given_broken_date_format_when_building_then_rejected_before_any_create() {
        let result = NoteListController::new(
            MockNoteStore::builder().build(),
            ScriptedConfirmation::yes(),
            RecordingNotifier::new(),
        )
        .with_date_format("%Y-%Q");

        assert!(matches!(result, Err(DomainError::InvalidDateFormat(f)) if f == "%Y-%Q"));
    }

    #[test]
    fn given_valid_date_format_when_creating_then_stamps_with_it() {
        let mut ctl = NoteListController::new(
            MockNoteStore::builder().build(),
            ScriptedConfirmation::yes(),
            RecordingNotifier::new(),
        )
        .with_date_format("%Y")
        .unwrap();

        let created = ctl.create(NoteDraft::new("a", "b", "c")).unwrap();

        assert_eq!(created.date.len(), 4);
        assert!(created.date.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn given_store_notes_when_loading_then_replaces_list_in_store_order() {
        // Arrange
        let store = MockNoteStore::builder()
            .with_note(note(2, "b"))
            .with_note(note(1, "a"))
            .build();
        let mut ctl = controller(store);

        // Act
        ctl.load().unwrap();

        // Assert
        let titles: Vec<_> = ctl.notes().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["b", "a"]);
    }

    #[test]
    fn given_failing_store_when_loading_then_list_stays_empty_and_failure_reported() {
        let store = MockNoteStore::builder().failing_list().build();
        let notifier = RecordingNotifier::new();
        let mut ctl = NoteListController::new(store, ScriptedConfirmation::yes(), notifier.clone());

        let result = ctl.load();

        assert!(matches!(result, Err(DomainError::Store(_))));
        assert!(ctl.notes().is_empty());
        assert_eq!(notifier.failures().len(), 1);
    }

    #[test]
    fn given_draft_when_creating_then_stamps_date_and_appends() {
        let store = MockNoteStore::builder().with_note(note(1, "a")).build();
        let mut ctl = controller(store);
        ctl.load().unwrap();

        let created = ctl.create(NoteDraft::new("new", "body", "t")).unwrap();

        assert_eq!(created.date, "10/16/2026, 9:22:00 AM");
        assert_eq!(ctl.notes().len(), 2);
        assert_eq!(ctl.notes()[1], created);
        assert_ne!(created.id, NoteId::from(1));
    }

    #[test]
    fn given_edit_session_when_submitting_then_updates_in_place_keeping_date() {
        // Arrange
        let store = MockNoteStore::builder()
            .with_note(note(1, "a"))
            .with_note(note(2, "b"))
            .with_note(note(3, "c"))
            .build();
        let mut ctl = controller(store);
        ctl.load().unwrap();
        ctl.begin_edit(&NoteId::from(2)).unwrap();

        // Act
        let updated = ctl.submit(NoteDraft::new("b2", "new body", "u")).unwrap();

        // Assert
        assert_eq!(updated.date, "1/1/2024, 9:00:00 AM");
        assert_eq!(ctl.notes()[1].title, "b2");
        assert_eq!(ctl.notes()[1].id, NoteId::from(2));
        assert_eq!(ctl.notes().len(), 3);
        assert!(ctl.edit_session().is_none());
    }

    #[test]
    fn given_no_session_when_updating_then_rejected_without_store_call() {
        let store = MockNoteStore::builder().with_note(note(1, "a")).build();
        let mut ctl = controller(store);
        ctl.load().unwrap();

        let result = ctl.update(&NoteId::from(1), NoteDraft::new("x", "y", "z"));

        assert!(matches!(result, Err(DomainError::NoEditSession)));
        assert_eq!(ctl.store().update_calls(), 0);
    }

    #[test]
    fn given_session_on_other_note_when_updating_then_mismatch() {
        let store = MockNoteStore::builder()
            .with_note(note(1, "a"))
            .with_note(note(2, "b"))
            .build();
        let mut ctl = controller(store);
        ctl.load().unwrap();
        ctl.begin_edit(&NoteId::from(1)).unwrap();

        let result = ctl.update(&NoteId::from(2), NoteDraft::new("x", "y", "z"));

        assert!(matches!(
            result,
            Err(DomainError::EditSessionMismatch { expected, actual })
                if expected == NoteId::from(1) && actual == NoteId::from(2)
        ));
    }

    #[test]
    fn given_declined_confirmation_when_deleting_then_nothing_changes() {
        let store = MockNoteStore::builder().with_note(note(1, "a")).build();
        let mut ctl =
            NoteListController::new(store, ScriptedConfirmation::no(), RecordingNotifier::new());
        ctl.load().unwrap();

        let deleted = ctl.delete(&NoteId::from(1)).unwrap();

        assert!(!deleted);
        assert_eq!(ctl.notes().len(), 1);
        assert_eq!(ctl.store().delete_calls(), 0);
    }

    #[test]
    fn given_ticket_held_when_deleting_then_rejected_without_prompt() {
        let store = MockNoteStore::builder().with_note(note(1, "a")).build();
        let confirmation = ScriptedConfirmation::yes();
        let mut ctl =
            NoteListController::new(store, confirmation.clone(), RecordingNotifier::new());
        ctl.load().unwrap();
        let _ticket = ctl
            .in_flight()
            .acquire(OperationKey::Note(NoteId::from(1)))
            .unwrap();

        let result = ctl.delete(&NoteId::from(1));

        assert!(matches!(result, Err(DomainError::OperationInFlight(_))));
        assert_eq!(confirmation.prompts().len(), 0);
        assert_eq!(ctl.notes().len(), 1);
    }

    #[test]
    fn given_finished_create_when_creating_again_then_ticket_was_released() {
        let mut ctl = controller(MockNoteStore::builder().build());

        ctl.create(NoteDraft::new("a", "b", "c")).unwrap();

        assert!(!ctl.in_flight().is_busy(&OperationKey::Create));
        assert!(ctl.create(NoteDraft::new("d", "e", "f")).is_ok());
    }
}
