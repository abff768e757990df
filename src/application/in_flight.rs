// src/application/in_flight.rs
use crate::domain::{DomainError, NoteId};
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// What a mutating request is about. Creates share one key since the
/// note has no id yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OperationKey {
    Create,
    Note(NoteId),
}

impl fmt::Display for OperationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKey::Create => f.write_str("create"),
            OperationKey::Note(id) => write!(f, "note {id}"),
        }
    }
}

/// Registry of requests still waiting on the store.
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    keys: Arc<Mutex<HashSet<OperationKey>>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `key` until the returned ticket is dropped.
    pub fn acquire(&self, key: OperationKey) -> Result<Ticket, DomainError> {
        let mut keys = self.lock();
        if !keys.insert(key.clone()) {
            debug!(%key, "Rejecting re-entrant operation");
            return Err(DomainError::OperationInFlight(key.to_string()));
        }
        Ok(Ticket {
            keys: Arc::clone(&self.keys),
            key,
        })
    }

    pub fn is_busy(&self, key: &OperationKey) -> bool {
        self.lock().contains(key)
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<OperationKey>> {
        self.keys.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Releases its key on drop.
#[derive(Debug)]
pub struct Ticket {
    keys: Arc<Mutex<HashSet<OperationKey>>>,
    key: OperationKey,
}

impl Drop for Ticket {
    fn drop(&mut self) {
        self.keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_held_ticket_when_acquiring_same_key_then_rejected() {
        let in_flight = InFlight::new();
        let _ticket = in_flight.acquire(OperationKey::Note(1.into())).unwrap();

        let result = in_flight.acquire(OperationKey::Note(1.into()));

        assert!(matches!(result, Err(DomainError::OperationInFlight(k)) if k == "note 1"));
    }

    #[test]
    fn given_held_ticket_when_acquiring_other_key_then_succeeds() {
        let in_flight = InFlight::new();
        let _ticket = in_flight.acquire(OperationKey::Note(1.into())).unwrap();

        assert!(in_flight.acquire(OperationKey::Note(2.into())).is_ok());
        assert!(in_flight.acquire(OperationKey::Create).is_ok());
    }

    #[test]
    fn given_dropped_ticket_when_acquiring_again_then_succeeds() {
        let in_flight = InFlight::new();
        let ticket = in_flight.acquire(OperationKey::Create).unwrap();
        assert!(in_flight.is_busy(&OperationKey::Create));

        drop(ticket);

        assert!(!in_flight.is_busy(&OperationKey::Create));
        assert!(in_flight.acquire(OperationKey::Create).is_ok());
    }
}
