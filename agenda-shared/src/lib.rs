#![cfg_attr(not(test), forbid(unsafe_code))]
//! Shared building blocks for the Agenda Admin dashboard.
//!
//! Everything here is free of browser bindings so it can be exercised by
//! plain `cargo test`: the wire models, the session-store abstraction and the
//! auth state that sits on top of it, and the view logic behind the
//! appointments table and the slot search widget.

pub mod auth;
pub mod models;
pub mod search;
pub mod session;
pub mod table;

pub use auth::AuthState;
pub use session::{MemorySessionStore, SessionStore, StoreError};
