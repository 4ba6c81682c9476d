//! Client-side session lifecycle.
//!
//! [`AuthState`] is the single writer of the stored token: it adopts a token
//! left in the session store on startup, persists new tokens on login, and
//! clears both storage and memory on logout. The login flag is always derived
//! from the token and never stored on its own.

use crate::session::{SessionStore, TOKEN_KEY, is_usable_token};

/// Current authentication state of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    token: Option<String>,
    initialized: bool,
}

impl AuthState {
    /// State holding `token` and already initialized. Unusable tokens yield a
    /// logged-out state.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: is_usable_token(token).then(|| token.to_string()),
            initialized: true,
        }
    }

    /// The current bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether a usable token is held.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.token.as_deref().is_some_and(is_usable_token)
    }

    /// Whether [`AuthState::initialize`] has completed.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Adopt the token found in `store`, once per page load.
    ///
    /// Empty values and the `"undefined"` sentinel are treated as no token.
    pub fn initialize(&mut self, store: &impl SessionStore) {
        if self.initialized {
            return;
        }
        match store.read(TOKEN_KEY) {
            Some(saved) if is_usable_token(&saved) => {
                tracing::info!("restored session token from storage");
                self.token = Some(saved);
            }
            Some(_) => tracing::debug!("ignoring unusable stored session token"),
            None => {}
        }
        self.initialized = true;
    }

    /// Persist `new_token` and make it current.
    ///
    /// Returns `false` without touching any state when the token is empty or
    /// the `"undefined"` sentinel. A failed storage write is logged; the
    /// in-memory state is updated regardless.
    pub fn login(&mut self, store: &impl SessionStore, new_token: &str) -> bool {
        if !is_usable_token(new_token) {
            tracing::debug!("rejected unusable login token");
            return false;
        }
        if let Err(err) = store.write(TOKEN_KEY, new_token) {
            tracing::warn!("failed to persist session token: {err}");
        }
        self.token = Some(new_token.to_string());
        tracing::info!("session token updated");
        true
    }

    /// Forget the current token in storage and in memory.
    pub fn logout(&mut self, store: &impl SessionStore) {
        store.remove(TOKEN_KEY);
        self.token = None;
        tracing::info!("session cleared");
    }
}
