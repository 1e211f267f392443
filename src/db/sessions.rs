use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use uuid::Uuid;

use crate::models::booking::{BookingSession, BookingStatus};

/// Outcome of attempting to enter the submission workflow. The transition
/// happens under the write lock, so at most one caller ever sees `Started`
/// for a given editing session.
#[derive(Debug)]
pub enum SubmissionGate {
    Started(BookingSession),
    AlreadyPending,
    AlreadyConfirmed,
    NotFound,
}

/// Process-local store of active booking sessions. Exactly one logical
/// session owns each entry; there is no cross-session state.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, BookingSession>>,
}

impl SessionStore {
    pub fn insert(&self, session: BookingSession) {
        let mut sessions = self.sessions.write().expect("session store lock poisoned");
        sessions.insert(session.id, session);
    }

    pub fn get(&self, id: &Uuid) -> Option<BookingSession> {
        let sessions = self.sessions.read().expect("session store lock poisoned");
        sessions.get(id).cloned()
    }

    pub fn remove(&self, id: &Uuid) -> Option<BookingSession> {
        let mut sessions = self.sessions.write().expect("session store lock poisoned");
        sessions.remove(id)
    }

    /// Apply a mutation to an editing session. Returns the updated session,
    /// or `None` if the session is missing or no longer editable.
    pub fn update_editing<F>(&self, id: &Uuid, mutate: F) -> Option<BookingSession>
    where
        F: FnOnce(&mut BookingSession),
    {
        let mut sessions = self.sessions.write().expect("session store lock poisoned");
        let session = sessions.get_mut(id)?;
        if session.status != BookingStatus::Editing {
            return None;
        }
        mutate(session);
        session.updated_at = Utc::now();
        Some(session.clone())
    }

    /// `Editing -> Submitting`, atomically. Duplicate submissions are
    /// rejected here rather than at the handler.
    pub fn begin_submission(&self, id: &Uuid) -> SubmissionGate {
        let mut sessions = self.sessions.write().expect("session store lock poisoned");
        let Some(session) = sessions.get_mut(id) else {
            return SubmissionGate::NotFound;
        };
        match session.status {
            BookingStatus::Editing => {
                session.status = BookingStatus::Submitting;
                session.updated_at = Utc::now();
                SubmissionGate::Started(session.clone())
            }
            BookingStatus::Submitting => SubmissionGate::AlreadyPending,
            BookingStatus::Success => SubmissionGate::AlreadyConfirmed,
        }
    }

    /// `Submitting -> Success`. Terminal; only an explicit remove exits it.
    pub fn complete_submission(&self, id: &Uuid, reference: String) -> Option<BookingSession> {
        let mut sessions = self.sessions.write().expect("session store lock poisoned");
        let session = sessions.get_mut(id)?;
        if session.status != BookingStatus::Submitting {
            return None;
        }
        session.status = BookingStatus::Success;
        session.reference = Some(reference);
        session.updated_at = Utc::now();
        Some(session.clone())
    }

    pub fn len(&self) -> usize {
        let sessions = self.sessions.read().expect("session store lock poisoned");
        sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn create_session_store() -> Arc<SessionStore> {
    Arc::new(SessionStore {
        sessions: RwLock::new(HashMap::new()),
    })
}
