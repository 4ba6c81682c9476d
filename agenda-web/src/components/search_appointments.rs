use crate::api::{AgendaClient, ApiError};
use crate::hooks::use_auth;
use shared::models::AppointmentSchedule;
use shared::search::{remove_slot, validate_search_date};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, window};
use yew::prelude::*;

pub(crate) const SEARCH_GATED_MESSAGE: &str =
    "Please log in to search and manage appointment slots.";
const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this slot?";

/// Slots currently listed by the widget.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct SlotList {
    pub slots: Vec<AppointmentSchedule>,
    /// Whether a search finished for the date currently entered.
    pub searched: bool,
}

impl SlotList {
    /// Whether to show the "no slots" notice for the entered `date`.
    pub fn shows_empty_notice(&self, is_busy: bool, date: &str) -> bool {
        self.slots.is_empty() && self.searched && !is_busy && !date.is_empty()
    }
}

pub(crate) enum SlotAction {
    /// A search completed; show its results.
    Replace(Vec<AppointmentSchedule>),
    /// A search failed; keep the current list.
    SearchFailed,
    /// A different date was entered.
    DateChanged,
    /// A delete was confirmed by the server.
    Remove(i64),
}

impl Reducible for SlotList {
    type Action = SlotAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SlotAction::Replace(slots) => Rc::new(Self {
                slots,
                searched: true,
            }),
            SlotAction::SearchFailed => Rc::new(Self {
                slots: self.slots.clone(),
                searched: true,
            }),
            SlotAction::DateChanged if self.searched => Rc::new(Self {
                slots: self.slots.clone(),
                searched: false,
            }),
            SlotAction::DateChanged => self,
            SlotAction::Remove(id) => {
                let mut slots = self.slots.clone();
                if remove_slot(&mut slots, id) {
                    Rc::new(Self {
                        slots,
                        searched: self.searched,
                    })
                } else {
                    self
                }
            }
        }
    }
}

pub(crate) fn search_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Status { .. } => error
            .server_message()
            .unwrap_or("Error fetching data")
            .to_string(),
        ApiError::Network(_) | ApiError::Decode(_) => {
            "Something went wrong. Try again later.".to_string()
        }
    }
}

pub(crate) fn delete_error_message(error: &ApiError) -> &'static str {
    match error {
        ApiError::Status { .. } => "Error deleting slot.",
        ApiError::Network(_) | ApiError::Decode(_) => "Failed to delete slot.",
    }
}

fn confirm_delete() -> bool {
    window()
        .and_then(|window| window.confirm_with_message(DELETE_CONFIRMATION).ok())
        .unwrap_or(false)
}

#[function_component(SearchAppointments)]
pub fn search_appointments() -> Html {
    let auth = use_auth();
    let date = use_state(String::new);
    let list = use_reducer(SlotList::default);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_date_change = {
        let date = date.clone();
        let list = list.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                date.set(input.value());
                list.dispatch(SlotAction::DateChanged);
            }
        })
    };

    let on_search = {
        let date = date.clone();
        let list = list.clone();
        let loading = loading.clone();
        let error = error.clone();
        let token = auth.token.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(token) = token.clone() else {
                return;
            };
            let query = match validate_search_date(&date) {
                Ok(query) => query,
                Err(validation) => {
                    error.set(Some(validation.to_string()));
                    return;
                }
            };
            loading.set(true);
            error.set(None);
            let list = list.clone();
            let loading = loading.clone();
            let error = error.clone();
            spawn_local(async move {
                match AgendaClient::shared().search_slots(&token, &query).await {
                    Ok(slots) => {
                        log::debug!("found {} slots for {query}", slots.len());
                        list.dispatch(SlotAction::Replace(slots));
                    }
                    Err(err) => {
                        log::error!("slot search failed: {err}");
                        error.set(Some(search_error_message(&err)));
                        list.dispatch(SlotAction::SearchFailed);
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_delete = {
        let list = list.clone();
        let error = error.clone();
        let token = auth.token.clone();
        Callback::from(move |id: i64| {
            let Some(token) = token.clone() else {
                return;
            };
            if !confirm_delete() {
                return;
            }
            let list = list.clone();
            let error = error.clone();
            spawn_local(async move {
                match AgendaClient::shared().delete_slot(&token, id).await {
                    Ok(()) => {
                        log::info!("deleted slot {id}");
                        list.dispatch(SlotAction::Remove(id));
                    }
                    Err(err) => {
                        log::error!("deleting slot {id} failed: {err}");
                        error.set(Some(delete_error_message(&err).to_string()));
                    }
                }
            });
        })
    };

    if !auth.is_logged_in {
        return html! {
            <div class="p-10 text-center">
                <p class="alert alert-error inline-flex font-semibold">
                    { SEARCH_GATED_MESSAGE }
                </p>
            </div>
        };
    }

    let is_busy = *loading;

    let results = if list.slots.is_empty() {
        if list.shows_empty_notice(is_busy, &date) {
            html! { <p class="text-center text-base-content/50 mt-4">{"No slots found for this date."}</p> }
        } else {
            Html::default()
        }
    } else {
        html! {
            <div class="overflow-x-auto border border-base-300 rounded-lg shadow-sm max-w-2xl mx-auto">
                <table class="table w-full">
                    <thead>
                        <tr>
                            <th>{"Date"}</th>
                            <th>{"Time Slot"}</th>
                            <th class="text-center">{"Action"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for list.slots.iter().map(|slot| {
                            let id = slot.id;
                            let on_delete = on_delete.clone();
                            html! {
                                <tr key={id}>
                                    <td>{ slot.date.clone() }</td>
                                    <td class="font-semibold">{ slot.time_slot.clone() }</td>
                                    <td class="text-center">
                                        <button
                                            class="btn btn-error btn-xs"
                                            onclick={Callback::from(move |_: MouseEvent| on_delete.emit(id))}
                                        >
                                            {"Delete"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        }
    };

    html! {
        <div class="p-6">
            <h2 class="text-xl font-bold mb-4 text-center">{"Search Appointments"}</h2>
            <div class="flex justify-center gap-4 mb-4">
                <input
                    class="input input-bordered"
                    type="date"
                    value={(*date).clone()}
                    onchange={on_date_change}
                />
                <button class="btn btn-primary" onclick={on_search} disabled={is_busy}>
                    {if is_busy { "Searching..." } else { "Search" }}
                </button>
            </div>
            if let Some(message) = &*error {
                <p class="text-center text-error mb-4 font-medium">{ message.clone() }</p>
            }
            { results }
        </div>
    }
}
