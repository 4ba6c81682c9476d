use crate::{
    components::{LoginButton, header_nav_item::HeaderNavItem},
    config::FrontendConfig,
    routes::MainRoute,
};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let config = FrontendConfig::new();
    let nav_items = MainRoute::nav_routes().into_iter().map(|route| {
        html! {
            <HeaderNavItem {route} current_route={props.current_route.clone()} />
        }
    });

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg gap-2">
                <Icon icon_id={IconId::HeroiconsOutlineCalendar} class="w-6 h-6" />
                {config.app_title().to_string()}
            </Link<MainRoute>>
            <ul class="menu menu-horizontal gap-1">
                { for nav_items }
            </ul>
            <LoginButton />
        </nav>
    }
}
