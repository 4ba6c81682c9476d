//! Access to the session for every component below the yewdux root.

use crate::models::app_state::AppState;
use crate::session_store::BrowserSessionStore;
use yew::{Callback, hook};
use yewdux::prelude::use_store;

/// Snapshot of the session plus its two mutators.
#[derive(Clone, PartialEq)]
pub struct AuthHandle {
    /// Bearer token of the current session.
    pub token: Option<String>,
    /// Derived from `token`; never stored separately.
    pub is_logged_in: bool,
    /// Persist a token and log in. Empty and `"undefined"` tokens are ignored.
    pub login: Callback<String>,
    /// Drop the stored token and log out.
    pub logout: Callback<()>,
}

/// Current session from the [`AppState`] store, plus login and logout
/// callbacks that persist through the browser session store.
#[hook]
pub fn use_auth() -> AuthHandle {
    let (state, dispatch) = use_store::<AppState>();

    let login = dispatch.reduce_mut_callback_with(|state: &mut AppState, token: String| {
        if !state.auth.login(&BrowserSessionStore, &token) {
            log::warn!("login ignored: server returned an unusable token");
        }
    });
    let logout = dispatch.reduce_mut_callback(|state: &mut AppState| {
        state.auth.logout(&BrowserSessionStore);
    });

    AuthHandle {
        token: state.auth.token().map(str::to_string),
        is_logged_in: state.auth.is_logged_in(),
        login,
        logout,
    }
}
