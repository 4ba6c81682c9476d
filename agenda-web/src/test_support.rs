//! Render helpers shared by component tests.

use crate::models::app_state::AppState;
use shared::AuthState;
use yew::{Children, Html, Properties, function_component, html};
use yewdux::{Dispatch, YewduxRoot};

#[derive(Properties, PartialEq)]
pub struct WithAuthProps {
    /// Token to seed the store with; `None` renders logged out.
    #[prop_or_default]
    pub token: Option<String>,
    pub children: Children,
}

#[function_component(Seed)]
fn seed(props: &WithAuthProps) -> Html {
    if let Some(cx) = yew::use_context::<yewdux::Context>() {
        let auth = props
            .token
            .as_deref()
            .map_or_else(AuthState::default, AuthState::with_token);
        Dispatch::<AppState>::new(&cx).set(AppState { auth });
    }
    html! { <>{ props.children.clone() }</> }
}

/// Wraps `children` in a yewdux root whose auth state is pre-seeded.
#[function_component(WithAuth)]
pub fn with_auth(props: &WithAuthProps) -> Html {
    html! {
        <YewduxRoot>
            <Seed token={props.token.clone()}>
                { props.children.clone() }
            </Seed>
        </YewduxRoot>
    }
}
