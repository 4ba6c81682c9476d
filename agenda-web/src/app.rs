use crate::models::app_state::AppState;
use crate::routes::{MainRoute, switch};
use crate::session_store::BrowserSessionStore;
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[function_component(App)]
pub fn app() -> Html {
    let (state, dispatch) = use_store::<AppState>();

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |()| {
            dispatch.reduce_mut(|state| state.auth.initialize(&BrowserSessionStore));
            || ()
        });
    }

    // Render nothing until the stored token has been checked.
    if !state.auth.is_initialized() {
        return html! {};
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
        </BrowserRouter>
    }
}
