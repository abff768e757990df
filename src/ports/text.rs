// src/ports/text.rs
use crate::application::BoardEntry;
use std::fmt::Write;

/// Terminal rendering of the note board, one card per note.
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, entries: &[BoardEntry<'_>]) -> String {
        if entries.is_empty() {
            return "No notes\n".to_string();
        }

        let mut out = String::new();
        for entry in entries {
            let note = entry.note;
            let marker = if entry.pinned { "  [pinned]" } else { "" };
            // Writing into a String cannot fail
            let _ = writeln!(out, "[{}] {}{}", note.id, note.title, marker);
            let _ = writeln!(out, "    {}", note.date);
            for line in note.content.lines() {
                let _ = writeln!(out, "    {line}");
            }
            let _ = writeln!(out, "    #{}", note.tags);
            out.push('\n');
        }
        out
    }
}
