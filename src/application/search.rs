// src/application/search.rs
use crate::domain::Note;

/// Notes whose title contains `term`, ignoring case, in list order.
///
/// An empty term selects everything. The input slice is never touched;
/// callers recompute this on every render.
pub fn filter_notes<'a>(notes: &'a [Note], term: &str) -> Vec<&'a Note> {
    if term.is_empty() {
        return notes.iter().collect();
    }
    let needle = term.to_lowercase();
    notes
        .iter()
        .filter(|note| note.title.to_lowercase().contains(&needle))
        .collect()
}
