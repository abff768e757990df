// src/cli/commands.rs
//! One-shot subcommands. Each starts from a fresh load of the store, the
//! same way the interactive shell starts.

use crate::application::{Confirmation, NoteListController, NoteStore, Notifier, PinBoard};
use crate::domain::{Note, NoteDraft, NoteId};
use crate::ports::{HtmlPresenter, TextPresenter};
use anyhow::{Context, Result};
use tracing::debug;

/// Field overrides for `edit`; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<String>,
}

impl NotePatch {
    pub fn apply(self, draft: NoteDraft) -> NoteDraft {
        NoteDraft {
            title: self.title.unwrap_or(draft.title),
            content: self.content.unwrap_or(draft.content),
            tags: self.tags.unwrap_or(draft.tags),
        }
    }
}

pub fn list<S, C, N>(ctl: &mut NoteListController<S, C, N>, search: &str) -> Result<String>
where
    S: NoteStore,
    C: Confirmation,
    N: Notifier,
{
    ctl.load().context("Failed to load notes")?;
    let visible = ctl.visible(search);
    debug!(search, shown = visible.len(), total = ctl.notes().len(), "Listing notes");
    let entries = PinBoard::new().layout(&visible);
    Ok(TextPresenter::new().render(&entries))
}

pub fn add<S, C, N>(ctl: &mut NoteListController<S, C, N>, draft: NoteDraft) -> Result<Note>
where
    S: NoteStore,
    C: Confirmation,
    N: Notifier,
{
    draft.validate()?;
    Ok(ctl.create(draft)?)
}

pub fn edit<S, C, N>(
    ctl: &mut NoteListController<S, C, N>,
    id: &NoteId,
    patch: NotePatch,
) -> Result<Note>
where
    S: NoteStore,
    C: Confirmation,
    N: Notifier,
{
    ctl.load().context("Failed to load notes")?;
    let current = ctl.begin_edit(id)?.to_draft();
    let draft = patch.apply(current);
    draft.validate()?;
    Ok(ctl.submit(draft)?)
}

/// Returns whether the note was deleted
pub fn delete<S, C, N>(ctl: &mut NoteListController<S, C, N>, id: &NoteId) -> Result<bool>
where
    S: NoteStore,
    C: Confirmation,
    N: Notifier,
{
    ctl.load().context("Failed to load notes")?;
    Ok(ctl.delete(id)?)
}

pub fn board<S, C, N>(ctl: &mut NoteListController<S, C, N>, search: &str) -> Result<String>
where
    S: NoteStore,
    C: Confirmation,
    N: Notifier,
{
    ctl.load().context("Failed to load notes")?;
    let visible = ctl.visible(search);
    let entries = PinBoard::new().layout(&visible);
    Ok(HtmlPresenter::new().render(&entries, search))
}
