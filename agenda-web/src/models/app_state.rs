use shared::AuthState;
use yewdux::Store;

/// Page-lifetime state shared through the yewdux root.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub auth: AuthState,
}
