use crate::routes::MainRoute;
use yew::{Html, Properties, classes, function_component, html};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq, Eq)]
pub struct HeaderNavItemProps {
    pub route: MainRoute,
    pub current_route: Option<MainRoute>,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let active_route_class = if props.current_route.as_ref() == Some(&props.route) {
        "btn-soft"
    } else {
        ""
    };

    html! {
      <li>
          <Link<MainRoute> to={props.route.clone()} classes={classes!("btn", "btn-ghost", "btn-sm", active_route_class)}>
              {props.route.title()}
          </Link<MainRoute>>
      </li>
    }
}
