use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

const NAV_LINKS: [(Route, &str); 4] = [
    (Route::Home, "Home"),
    (Route::About, "About"),
    (Route::Programs, "Programs"),
    (Route::News, "News"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let current = use_route::<Route>();

    html! {
        <header class="header">
            <div class="container">
                <Link<Route> to={Route::Home} classes="brand">{ "SproutSphere" }</Link<Route>>
                <nav>
                    { for NAV_LINKS.iter().map(|(route, label)| {
                        let class = classes!("nav-link", (current.as_ref() == Some(route)).then_some("active"));
                        html! {
                            <Link<Route> to={route.clone()} classes={class}>{ *label }</Link<Route>>
                        }
                    })}
                    <Link<Route> to={Route::Donate} classes="btn btn-primary">{ "Donate" }</Link<Route>>
                </nav>
            </div>
        </header>
    }
}
