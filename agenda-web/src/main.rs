mod api;
#[cfg(test)]
mod api_test;
mod app;
mod components;
mod config;
mod containers;
mod hooks;
mod models;
mod pages;
mod routes;
mod session_store;
#[cfg(all(test, target_arch = "wasm32"))]
mod test_support;

use app::App;
use config::FrontendConfig;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(Root)]
fn root() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::error_1(&format!("Panic: {s}").into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::error_1(&format!("Panic: {s}").into());
        } else {
            web_sys::console::error_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::error_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    let config = FrontendConfig::new();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::info!(
        "starting {} against {}",
        config.app_title(),
        config.api_base_url()
    );

    // Mounts onto <body>
    Renderer::<Root>::new().render();
}
