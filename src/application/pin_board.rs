// src/application/pin_board.rs
//! View-level ordering for the rendered note cards.
//!
//! Pinning moves a card to the front of whatever is currently shown and
//! flips its pinned marker. The board never writes back into the note list
//! and nothing here reaches the store, so a reload restores store order.
//!
//! Interaction with search: the board remembers the set of ids it last laid
//! out. When the next render shows a different set (search narrowed or
//! widened, a note created or deleted) the board starts over from the
//! projection order with every marker cleared. Re-rendering the same set,
//! e.g. after an in-place update, keeps the pinned arrangement.

use crate::domain::{DomainError, Note, NoteId};
use std::collections::{HashMap, HashSet};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardEntry<'a> {
    pub note: &'a Note,
    pub pinned: bool,
}

#[derive(Debug, Default)]
pub struct PinBoard {
    order: Vec<NoteId>,
    pinned: HashSet<NoteId>,
}

impl PinBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Align the board with the notes about to be shown and return them in
    /// board order.
    pub fn layout<'a>(&mut self, visible: &[&'a Note]) -> Vec<BoardEntry<'a>> {
        self.sync(visible);

        let by_id: HashMap<&NoteId, &'a Note> = visible.iter().map(|n| (&n.id, *n)).collect();
        self.order
            .iter()
            .filter_map(|id| {
                by_id.get(id).map(|&note| BoardEntry {
                    note,
                    pinned: self.pinned.contains(id),
                })
            })
            .collect()
    }

    /// Move `id` to the front of the board and toggle its marker.
    /// Returns whether the note is now marked pinned.
    pub fn pin(&mut self, id: &NoteId) -> Result<bool, DomainError> {
        let position = self
            .order
            .iter()
            .position(|candidate| candidate == id)
            .ok_or_else(|| DomainError::NoteNotFound(id.clone()))?;

        let moved = self.order.remove(position);
        self.order.insert(0, moved);

        let pinned = if self.pinned.remove(id) {
            false
        } else {
            self.pinned.insert(id.clone());
            true
        };
        debug!(%id, pinned, "Pinned note to front");
        Ok(pinned)
    }

    pub fn is_pinned(&self, id: &NoteId) -> bool {
        self.pinned.contains(id)
    }

    fn sync(&mut self, visible: &[&Note]) {
        let same_set = self.order.len() == visible.len() && {
            let shown: HashSet<&NoteId> = self.order.iter().collect();
            visible.iter().all(|n| shown.contains(&n.id))
        };
        if same_set {
            return;
        }
        debug!(
            previous = self.order.len(),
            visible = visible.len(),
            "Visible notes changed, resetting board"
        );
        self.order = visible.iter().map(|n| n.id.clone()).collect();
        self.pinned.clear();
    }
}
