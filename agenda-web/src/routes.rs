use crate::components::{AppointmentsTable, SearchAppointments};
use crate::containers::layout::Layout;
use crate::pages::{DashboardPage, ErrorPage};
use strum::{EnumIter, IntoEnumIterator};
use yew::{Html, html};
use yew_router::prelude::*;

/// The main routes
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/appointments")]
    Appointments,
    #[at("/slots")]
    Slots,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Label used in the navigation bar.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Dashboard",
            Self::Appointments => "Appointments",
            Self::Slots => "Slots",
            Self::NotFound => "Not Found",
        }
    }

    /// Routes linked from the header, in display order.
    pub fn nav_routes() -> Vec<Self> {
        Self::iter()
            .filter(|route| route != &Self::NotFound)
            .collect()
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log::debug!("switching to route {route:?}");
    let page = match route {
        MainRoute::Home => html! { <DashboardPage /> },
        MainRoute::Appointments => html! { <AppointmentsTable /> },
        MainRoute::Slots => html! { <SearchAppointments /> },
        MainRoute::NotFound => html! { <ErrorPage /> },
    };
    html! {
        <Layout current_route={route}>
            { page }
        </Layout>
    }
}
