use crate::api::AgendaClient;
use crate::hooks::use_auth;
use shared::models::Appointment;
use shared::table::{Page, filter_by_date, sort_newest_first};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub(crate) const TABLE_GATED_MESSAGE: &str = "Please log in to view the appointments dashboard.";

/// Token to fetch with, or `None` when no request may be issued.
pub(crate) fn fetch_token(is_logged_in: bool, token: Option<&str>) -> Option<String> {
    token.filter(|_| is_logged_in).map(str::to_string)
}

/// Rows of a completed fetch in display order.
pub(crate) fn fetched_rows(mut fetched: Vec<Appointment>) -> Vec<Appointment> {
    sort_newest_first(&mut fetched);
    fetched
}

#[function_component(AppointmentsTable)]
pub fn appointments_table() -> Html {
    let auth = use_auth();
    let appointments = use_state(Vec::<Appointment>::new);
    let loading = use_state(|| true);
    let page_index = use_state(|| 0_usize);
    let query = use_state(String::new);

    {
        let appointments = appointments.clone();
        let loading = loading.clone();
        use_effect_with(
            (auth.is_logged_in, auth.token.clone()),
            move |(is_logged_in, token)| {
                match fetch_token(*is_logged_in, token.as_deref()) {
                    None => loading.set(false),
                    Some(token) => {
                        loading.set(true);
                        spawn_local(async move {
                            match AgendaClient::shared().list_appointments(&token).await {
                                Ok(fetched) => {
                                    log::debug!("fetched {} appointments", fetched.len());
                                    appointments.set(fetched_rows(fetched));
                                }
                                Err(err) => log::error!("error fetching appointments: {err}"),
                            }
                            loading.set(false);
                        });
                    }
                }
                || ()
            },
        );
    }

    let on_query_change = {
        let query = query.clone();
        let page_index = page_index.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                query.set(input.value());
                page_index.set(0);
            }
        })
    };

    if !auth.is_logged_in {
        return html! {
            <div class="p-10 text-center">
                <p class="alert alert-error inline-flex font-semibold">
                    { TABLE_GATED_MESSAGE }
                </p>
            </div>
        };
    }

    let filtered = filter_by_date(&appointments, &query);
    let page = Page::new(*page_index, filtered.len());
    let rows = page.slice(&filtered);

    let on_previous = {
        let page_index = page_index.clone();
        Callback::from(move |_: MouseEvent| page_index.set(page_index.saturating_sub(1)))
    };
    let on_next = {
        let page_index = page_index.clone();
        Callback::from(move |_: MouseEvent| page_index.set(*page_index + 1))
    };

    let body = if *loading {
        html! {
            <div class="flex justify-center items-center h-32">
                <p class="text-base-content/60 animate-pulse">{"Loading secure data..."}</p>
            </div>
        }
    } else if filtered.is_empty() {
        html! {
            <p class="text-center text-base-content/60 py-10 rounded-lg border border-dashed border-base-300">
                {"No appointments found for this criteria."}
            </p>
        }
    } else {
        html! {
            <div class="overflow-x-auto border border-base-300 rounded-xl shadow-sm">
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>{"ID"}</th>
                            <th>{"Customer"}</th>
                            <th>{"Email"}</th>
                            <th>{"Service"}</th>
                            <th>{"Notes"}</th>
                            <th>{"Date"}</th>
                            <th>{"Time"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for rows.iter().map(|appointment| render_row(appointment)) }
                    </tbody>
                </table>
                <div class="flex justify-between items-center p-4 border-t border-base-300">
                    <button class="btn btn-outline btn-sm" onclick={on_previous} disabled={!page.has_previous()}>
                        {"Previous"}
                    </button>
                    <span class="text-sm font-medium">{ format!("Page {}", page.number()) }</span>
                    <button class="btn btn-primary btn-sm" onclick={on_next} disabled={!page.has_next()}>
                        {"Next"}
                    </button>
                </div>
            </div>
        }
    };

    html! {
        <div class="p-6">
            <h2 class="text-2xl font-bold mb-6 text-center">{"Appointments Management"}</h2>
            <div class="form-control mb-6 max-w-md mx-auto">
                <label class="label justify-center" for="appointment-date-filter">
                    <span class="label-text">{"Filter by Date"}</span>
                </label>
                <input
                    id="appointment-date-filter"
                    class="input input-bordered w-full"
                    type="text"
                    placeholder="YYYY-MM-DD"
                    value={(*query).clone()}
                    oninput={on_query_change}
                />
            </div>
            { body }
        </div>
    }
}

fn render_row(appointment: &Appointment) -> Html {
    let notes = appointment
        .notes
        .as_deref()
        .filter(|notes| !notes.is_empty())
        .unwrap_or("—")
        .to_string();
    html! {
        <tr key={appointment.id}>
            <td>{ appointment.id.to_string() }</td>
            <td class="font-medium">{ appointment.customer_name.clone() }</td>
            <td>{ appointment.customer_email.clone() }</td>
            <td>{ appointment.service.clone() }</td>
            <td class="italic">{ notes }</td>
            <td class="font-mono">{ appointment.date.clone() }</td>
            <td class="font-semibold">{ appointment.time_slot.clone() }</td>
        </tr>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod render_tests {
    use super::*;
    use crate::test_support::WithAuth;
    use wasm_bindgen_test::*;
    use yew::LocalServerRenderer;

    wasm_bindgen_test_configure!(run_in_browser);

    #[function_component(LoggedOut)]
    fn logged_out() -> Html {
        html! { <WithAuth><AppointmentsTable /></WithAuth> }
    }

    #[function_component(LoggedIn)]
    fn logged_in() -> Html {
        html! { <WithAuth token={Some("abc".to_string())}><AppointmentsTable /></WithAuth> }
    }

    #[wasm_bindgen_test]
    async fn test_logged_out_shows_gate() {
        let rendered = LocalServerRenderer::<LoggedOut>::new().render().await;
        assert!(rendered.contains(TABLE_GATED_MESSAGE));
        assert!(!rendered.contains("Filter by Date"));
    }

    #[wasm_bindgen_test]
    async fn test_logged_in_starts_loading() {
        let rendered = LocalServerRenderer::<LoggedIn>::new().render().await;
        assert!(rendered.contains("Appointments Management"));
        assert!(rendered.contains("Loading secure data..."));
        assert!(!rendered.contains(TABLE_GATED_MESSAGE));
    }
}
