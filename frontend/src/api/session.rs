//! Admin session state, persisted in local storage and shared through
//! the data context. Interested views subscribe to the store, so a
//! sign-out or an expired token is noticed by whatever admin screen is
//! mounted, not only on the next navigation.

use super::config::SESSION_STORAGE_KEY;
use gloo_console::warn;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use yew::Callback;

/// A signed-in admin session as returned by the auth endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    /// Unix timestamp (seconds) after which the token is no longer valid.
    pub expires_at: f64,
    pub email: String,
}

impl Session {
    pub fn is_expired(&self, now_secs: f64) -> bool {
        self.expires_at <= now_secs
    }
}

/// Holder of the current session with change notification.
///
/// The stored session is read from local storage once at construction;
/// every change is written back. `current()` re-validates expiry on each
/// call, clearing and broadcasting when the token has lapsed.
pub struct SessionStore {
    session: RefCell<Option<Session>>,
    listeners: RefCell<Vec<(usize, Callback<()>)>>,
    next_id: Cell<usize>,
}

impl SessionStore {
    pub fn load() -> Self {
        let session = read_persisted();
        SessionStore {
            session: RefCell::new(session),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// The live session, if any. An expired session is treated as
    /// absent: it is cleared from storage and subscribers are told.
    pub fn current(&self) -> Option<Session> {
        let expired = {
            let session = self.session.borrow();
            match session.as_ref() {
                Some(s) => s.is_expired(js_sys::Date::now() / 1000.0),
                None => return None,
            }
        };
        if expired {
            warn!("admin session expired");
            self.replace(None);
            return None;
        }
        self.session.borrow().clone()
    }

    /// The bearer token for authenticated requests, when signed in.
    pub fn token(&self) -> Option<String> {
        self.current().map(|s| s.access_token)
    }

    pub fn replace(&self, session: Option<Session>) {
        write_persisted(session.as_ref());
        *self.session.borrow_mut() = session;
        let listeners = self.listeners.borrow().clone();
        for (_, cb) in listeners {
            cb.emit(());
        }
    }

    /// Registers a change listener; returns an id for `unsubscribe`.
    pub fn subscribe(&self, cb: Callback<()>) -> usize {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, cb));
        id
    }

    pub fn unsubscribe(&self, id: usize) {
        self.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
    }
}

fn read_persisted() -> Option<Session> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(SESSION_STORAGE_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            warn!(format!("discarding unreadable stored session: {err}"));
            let _ = storage.remove_item(SESSION_STORAGE_KEY);
            None
        }
    }
}

fn write_persisted(session: Option<&Session>) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    else {
        return;
    };
    match session {
        Some(s) => {
            if let Ok(raw) = serde_json::to_string(s) {
                let _ = storage.set_item(SESSION_STORAGE_KEY, &raw);
            }
        }
        None => {
            let _ = storage.remove_item(SESSION_STORAGE_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(expires_at: f64) -> Session {
        Session {
            access_token: "tok".into(),
            expires_at,
            email: "admin@example.com".into(),
        }
    }

    #[test]
    fn expiry_is_a_strict_cutoff() {
        let s = session(1_000.0);
        assert!(!s.is_expired(999.0));
        assert!(s.is_expired(1_000.0));
        assert!(s.is_expired(1_001.0));
    }

    #[test]
    fn session_round_trips_through_json() {
        let s = session(2_000.5);
        let raw = serde_json::to_string(&s).unwrap();
        let back: Session = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, s);
    }
}
