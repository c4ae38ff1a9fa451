// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context providers for the application
//!
//! This module centralises shared state that needs to be accessed across
//! the component tree through Yew's `ContextProvider`. The matcher never
//! reads any of this implicitly; components snapshot it with
//! [`session_context`] and pass it in by reference.

use atlas_routing::{ActiveEntity, SessionContext};
use yew::prelude::*;

/// Current session state: whether the visitor is signed in, and as whom.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub authenticated: bool,
    pub username: Option<String>,
}

impl Session {
    pub fn signed_in(username: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            username: Some(username.into()),
        }
    }
}

/// Type alias used throughout the app when accessing the session context.
///
/// `UseStateHandle<Session>` allows both read-only access (via deref) and
/// mutation by calling `.set(..)` on login/logout.
pub type SessionCtx = UseStateHandle<Session>;

/// The currently selected project, shared across the tree. `None` until
/// the visitor opens a project page.
pub type ActiveEntityCtx = UseStateHandle<Option<ActiveEntity>>;

/// Snapshot the two contexts into the explicit value the matcher takes.
pub fn session_context(session: &Session, active_entity: &Option<ActiveEntity>) -> SessionContext {
    SessionContext {
        authenticated: session.authenticated,
        active_entity: active_entity.clone(),
    }
}

// -----------------------------------------------------------------------------
// Local-storage helpers
// -----------------------------------------------------------------------------

const STORAGE_KEY: &str = "atlas_username";

/// Read the username from `window.localStorage` (if present).
pub fn load_username_from_storage() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
}

/// Persist the username to `localStorage` so that it survives page reloads.
pub fn save_username_to_storage(username: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, username);
    }
}

/// Drop the persisted username on logout.
pub fn clear_username_from_storage() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}

// -----------------------------------------------------------------------------
// Validation helpers
// -----------------------------------------------------------------------------

use once_cell::sync::Lazy;

static USERNAME_RE: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"^[A-Za-z0-9_]+$").unwrap());

/// Returns `true` iff the supplied username is non-empty and matches the
/// allowed pattern.
pub fn is_valid_username(name: &str) -> bool {
    !name.is_empty() && USERNAME_RE.is_match(name)
}
