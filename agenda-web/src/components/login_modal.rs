use crate::api::{AgendaClient, ApiError};
use shared::models::LoginRequest;
use shared::session::is_usable_token;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const LOGIN_FAILED: &str = "Login failed";
const LOGIN_UNREACHABLE: &str = "Something went wrong, please try again.";

#[derive(yew::Properties, PartialEq)]
pub struct LoginModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    /// Receives the token of a successful login. The modal never stores it.
    pub on_login_success: Callback<String>,
}

/// Inline message shown for a failed login attempt.
pub(crate) fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Status { .. } => error.server_message().unwrap_or(LOGIN_FAILED).to_string(),
        ApiError::Network(_) | ApiError::Decode(_) => LOGIN_UNREACHABLE.to_string(),
    }
}

#[function_component(LoginModal)]
pub fn login_modal(props: &LoginModalProps) -> Html {
    let user = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let onsubmit = {
        let user_handle = user.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let on_success = props.on_login_success.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *loading_handle {
                return;
            }
            loading_handle.set(true);
            error_handle.set(None);

            let request = LoginRequest {
                user: (*user_handle).clone(),
                password: (*password_handle).clone(),
            };
            let user_ref = user_handle.clone();
            let password_ref = password_handle.clone();
            let error_ref = error_handle.clone();
            let loading_ref = loading_handle.clone();
            let on_success = on_success.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                let client = AgendaClient::shared();
                match client.login(&request).await {
                    Ok(response) => match response.token {
                        Some(token) if is_usable_token(&token) => {
                            user_ref.set(String::new());
                            password_ref.set(String::new());
                            on_success.emit(token);
                            on_close.emit(());
                        }
                        _ => {
                            log::warn!("login succeeded without a usable token");
                            error_ref.set(Some(LOGIN_FAILED.to_string()));
                        }
                    },
                    Err(err) => {
                        log::error!("login failed: {err}");
                        error_ref.set(Some(login_error_message(&err)));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let on_user_change = {
        let user = user.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                user.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let on_close_click = {
        let error = error.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            error.set(None);
            on_close.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    let is_busy = *loading;

    html! {
        <div class="modal modal-open z-[100]">
            <div class="modal-box w-80">
                <form onsubmit={onsubmit}>
                    <h2 class="text-lg font-semibold text-center">{"Login"}</h2>
                    if let Some(message) = &*error {
                        <p class="text-error text-center mt-2 text-sm font-bold">{message.clone()}</p>
                    }
                    <div class="form-control mt-4">
                        <label class="label" for="login-user">
                            <span class="label-text">{"Username"}</span>
                        </label>
                        <input
                            id="login-user"
                            class="input input-bordered w-full"
                            type="text"
                            placeholder="Enter your username"
                            value={(*user).clone()}
                            oninput={on_user_change}
                        />
                    </div>
                    <div class="form-control mt-4">
                        <label class="label" for="login-password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="login-password"
                            class="input input-bordered w-full"
                            type="password"
                            placeholder="Enter your password"
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <button class="btn btn-primary w-full mt-4" type="submit" disabled={is_busy}>
                        {if is_busy { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <button class="btn btn-error w-full mt-4" type="button" onclick={on_close_click}>
                    {"Close"}
                </button>
            </div>
        </div>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod render_tests {
    use super::*;
    use wasm_bindgen_test::*;
    use yew::LocalServerRenderer;

    wasm_bindgen_test_configure!(run_in_browser);

    #[function_component(OpenModal)]
    fn open_modal() -> Html {
        html! { <LoginModal is_open={true} on_close={Callback::noop()} on_login_success={Callback::noop()} /> }
    }

    #[function_component(ClosedModal)]
    fn closed_modal() -> Html {
        html! { <LoginModal is_open={false} on_close={Callback::noop()} on_login_success={Callback::noop()} /> }
    }

    #[wasm_bindgen_test]
    async fn test_open_modal_renders_form() {
        let rendered = LocalServerRenderer::<OpenModal>::new().render().await;
        assert!(rendered.contains("Enter your username"));
        assert!(rendered.contains("Enter your password"));
        assert!(rendered.contains("Close"));
    }

    #[wasm_bindgen_test]
    async fn test_closed_modal_renders_nothing() {
        let rendered = LocalServerRenderer::<ClosedModal>::new().render().await;
        assert!(!rendered.contains("Enter your username"));
    }
}
