//! Client-side session state.
//!
//! ARCHITECTURE
//! ============
//! The store holds a single flag answering "does the server consider this
//! client logged in?". The flag is only ever written by `refresh_user`, which
//! asks the backend and records the outcome; it is never set optimistically.
//!
//! TRADE-OFFS
//! ==========
//! Concurrent refreshes are not serialized: each call stores its own outcome
//! when its request completes, so the last completion wins. This favors
//! simplicity over in-flight de-duplication, which the consumers (refresh on
//! start and on navigation) do not need.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::api::ApiClient;

/// Session state derived from the server's login check.
pub struct SessionStore {
    api: ApiClient,
    logged_in: AtomicBool,
}

impl SessionStore {
    /// Create a store for the given client. Starts logged out; call
    /// [`SessionStore::refresh_user`] to sync with the server.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            logged_in: AtomicBool::new(false),
        }
    }

    /// Whether the most recently completed refresh found a valid session.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.logged_in.load(Ordering::SeqCst)
    }

    /// Re-derive the session flag from the server.
    ///
    /// Issues one `POST /api/login/check`. A success response sets the flag;
    /// every other outcome (non-success status, network error, timeout)
    /// clears it. Failures are absorbed into the flag rather than surfaced,
    /// so this never returns an error.
    pub async fn refresh_user(&self) {
        let logged_in = match self.api.check_login().await {
            Ok(()) => true,
            Err(error) => {
                tracing::debug!(%error, "login check failed, treating session as logged out");
                false
            }
        };
        self.logged_in.store(logged_in, Ordering::SeqCst);
    }
}
