use notepin::application::NoteListController;
use notepin::domain::{Note, NoteId};
use notepin::util::testing::{MockNoteStore, RecordingNotifier, ScriptedConfirmation};

#[allow(dead_code)]
pub type TestController =
    NoteListController<MockNoteStore, ScriptedConfirmation, RecordingNotifier>;

#[allow(dead_code)]
pub const FIXED_DATE: &str = "10/16/2026, 9:22:00 AM";

#[allow(dead_code)]
/// A note as the store would return it
pub fn note(id: i64, title: &str) -> Note {
    Note {
        id: NoteId::Number(id),
        title: title.to_string(),
        content: format!("{title} content"),
        tags: "misc".to_string(),
        date: format!("1/{id}/2024, 9:00:00 AM"),
    }
}

#[allow(dead_code)]
/// Store holding Shopping, diary and Work, ids 1..=3
pub fn seeded_store() -> MockNoteStore {
    MockNoteStore::builder()
        .with_note(note(1, "Shopping"))
        .with_note(note(2, "diary"))
        .with_note(note(3, "Work"))
        .build()
}

/// Loaded controller with a fixed clock, confirming every delete
#[allow(dead_code)]
pub fn loaded_controller(store: MockNoteStore) -> (TestController, RecordingNotifier) {
    let notifier = RecordingNotifier::new();
    let mut ctl = NoteListController::new(store, ScriptedConfirmation::yes(), notifier.clone())
        .with_clock(|| FIXED_DATE.to_string());
    ctl.load().expect("Load should succeed");
    (ctl, notifier)
}
