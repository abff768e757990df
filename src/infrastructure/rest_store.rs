// src/infrastructure/rest_store.rs
use crate::application::NoteStore;
use crate::domain::{DomainError, NewNote, Note, NoteId};
use anyhow::{anyhow, Context, Result};
use reqwest::blocking::{Client, Response};
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// `NoteStore` over a json-server style `/notes` resource.
#[derive(Debug)]
pub struct RestNoteStore {
    client: Client,
    base_url: Url,
}

impl RestNoteStore {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("Invalid store URL: {base_url}"))?;
        if base_url.cannot_be_a_base() {
            return Err(anyhow!("Store URL cannot be used as a base: {base_url}"));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        info!(%base_url, "Using notes store");
        Ok(Self { client, base_url })
    }

    fn notes_url(&self, id: Option<&NoteId>) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new()
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("notes");
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }
        url
    }
}

impl NoteStore for RestNoteStore {
    #[instrument(level = "debug", skip(self))]
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        let response = self
            .client
            .get(self.notes_url(None))
            .send()
            .map_err(transport_error)?;
        let notes: Vec<Note> = ensure_success(response, None)?
            .json()
            .map_err(decode_error)?;
        debug!(count = notes.len(), "Fetched notes");
        Ok(notes)
    }

    #[instrument(level = "debug", skip(self))]
    fn create_note(&mut self, note: &NewNote) -> Result<Note, DomainError> {
        let response = self
            .client
            .post(self.notes_url(None))
            .json(note)
            .send()
            .map_err(transport_error)?;
        ensure_success(response, None)?.json().map_err(decode_error)
    }

    #[instrument(level = "debug", skip(self))]
    fn update_note(&mut self, note: &Note) -> Result<Note, DomainError> {
        let response = self
            .client
            .put(self.notes_url(Some(&note.id)))
            .json(note)
            .send()
            .map_err(transport_error)?;
        ensure_success(response, Some(&note.id))?
            .json()
            .map_err(decode_error)
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_note(&mut self, id: &NoteId) -> Result<(), DomainError> {
        let response = self
            .client
            .delete(self.notes_url(Some(id)))
            .send()
            .map_err(transport_error)?;
        ensure_success(response, Some(id))?;
        Ok(())
    }
}

fn ensure_success(response: Response, id: Option<&NoteId>) -> Result<Response, DomainError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    debug!(%status, url = %response.url(), "Store rejected request");
    match (status, id) {
        (StatusCode::NOT_FOUND, Some(id)) => Err(DomainError::NoteNotFound(id.clone())),
        _ => Err(DomainError::Store(format!("store responded with {status}"))),
    }
}

fn transport_error(e: reqwest::Error) -> DomainError {
    DomainError::Store(format!("request failed: {e}"))
}

fn decode_error(e: reqwest::Error) -> DomainError {
    DomainError::Store(format!("unexpected response body: {e}"))
}
