use crate::components::login_modal::LoginModal;
use crate::hooks::use_auth;
use web_sys::window;
use yew::{Callback, Html, MouseEvent, classes, function_component, html, use_state};
use yew_icons::{Icon, IconId};

const LOGGED_OUT_NOTICE: &str = "Logged out successfully!";

#[function_component(LoginButton)]
pub fn login_button() -> Html {
    let auth = use_auth();
    let is_open = use_state(|| false);

    let onclick = {
        let is_open = is_open.clone();
        let logout = auth.logout.clone();
        let is_logged_in = auth.is_logged_in;
        Callback::from(move |_: MouseEvent| {
            if is_logged_in {
                logout.emit(());
                if let Some(window) = window() {
                    let _ = window.alert_with_message(LOGGED_OUT_NOTICE);
                }
            } else {
                is_open.set(!*is_open);
            }
        })
    };

    let on_close = {
        let is_open = is_open.clone();
        Callback::from(move |()| is_open.set(false))
    };

    let on_login_success = {
        let is_open = is_open.clone();
        let login = auth.login.clone();
        Callback::from(move |token: String| {
            login.emit(token);
            is_open.set(false);
        })
    };

    let (label, tone) = if auth.is_logged_in {
        ("LOG OUT", "btn-success")
    } else {
        ("LOG IN", "btn-primary")
    };

    html! {
        <>
            <button class={classes!("btn", "btn-sm", "rounded-full", "shadow-md", tone)} {onclick}>
                <Icon icon_id={IconId::HeroiconsSolidUser} class="w-4 h-4 mr-2" />
                {label}
            </button>
            <LoginModal is_open={*is_open} {on_close} {on_login_success} />
        </>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::test_support::WithAuth;
    use wasm_bindgen_test::*;
    use yew::LocalServerRenderer;

    wasm_bindgen_test_configure!(run_in_browser);

    #[function_component(LoggedOut)]
    fn logged_out() -> Html {
        html! { <WithAuth><LoginButton /></WithAuth> }
    }

    #[function_component(LoggedIn)]
    fn logged_in() -> Html {
        html! { <WithAuth token={Some("abc".to_string())}><LoginButton /></WithAuth> }
    }

    #[wasm_bindgen_test]
    async fn test_logged_out_label() {
        let rendered = LocalServerRenderer::<LoggedOut>::new().render().await;
        assert!(rendered.contains("LOG IN"));
        assert!(!rendered.contains("Enter your username"));
    }

    #[wasm_bindgen_test]
    async fn test_logged_in_label() {
        let rendered = LocalServerRenderer::<LoggedIn>::new().render().await;
        assert!(rendered.contains("LOG OUT"));
    }
}
