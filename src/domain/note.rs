// src/domain/note.rs
use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Store-assigned note identifier.
///
/// Stores hand out either numeric or string ids; the original JSON
/// representation is kept so that `PUT` bodies echo it back unchanged.
/// Ids compare and hash by their display form, so a typed `1234` finds
/// a note stored with `"id": "1234"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoteId {
    Number(i64),
    Text(String),
}

impl PartialEq for NoteId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (NoteId::Number(a), NoteId::Number(b)) => a == b,
            (NoteId::Text(a), NoteId::Text(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl Eq for NoteId {}

impl Hash for NoteId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            NoteId::Number(n) => n.to_string().hash(state),
            NoteId::Text(s) => s.hash(state),
        }
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteId::Number(n) => write!(f, "{n}"),
            NoteId::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for NoteId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<i64>() {
            Ok(n) => NoteId::Number(n),
            Err(_) => NoteId::Text(s.to_string()),
        })
    }
}

impl From<i64> for NoteId {
    fn from(n: i64) -> Self {
        NoteId::Number(n)
    }
}

impl From<&str> for NoteId {
    fn from(s: &str) -> Self {
        NoteId::Text(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub tags: String,
    pub date: String,
}

impl Note {
    /// Replacement record for an update: draft fields over this note,
    /// with `id` and `date` carried forward.
    pub fn revised(&self, draft: &NoteDraft) -> Note {
        Note {
            id: self.id.clone(),
            title: draft.title.clone(),
            content: draft.content.clone(),
            tags: draft.tags.clone(),
            date: self.date.clone(),
        }
    }

    pub fn to_draft(&self) -> NoteDraft {
        NoteDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// What the form collects: no id, no date.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tags: String,
}

impl NoteDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tags: tags.into(),
        }
    }

    /// Every field is required; whitespace-only counts as empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (name, value) in [
            ("title", &self.title),
            ("content", &self.content),
            ("tags", &self.tags),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::InvalidNote(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }

    pub fn stamped(&self, date: impl Into<String>) -> NewNote {
        NewNote {
            title: self.title.clone(),
            content: self.content.clone(),
            tags: self.tags.clone(),
            date: date.into(),
        }
    }
}

/// Create request body; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub tags: String,
    pub date: String,
}
