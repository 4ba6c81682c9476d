use crate::components::{AppointmentsTable, SearchAppointments};
use yew::{Html, function_component, html};

/// Dashboard page component
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    html! {
        <div class="grid grid-cols-1 xl:grid-cols-3 gap-6">
            <div class="card bg-base-200 shadow-xl xl:col-span-2">
                <AppointmentsTable />
            </div>
            <div class="card bg-base-200 shadow-xl">
                <SearchAppointments />
            </div>
        </div>
    }
}
