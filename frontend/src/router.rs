use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    about::About, admin::Admin, donate::Donate, home::Home, news::News, not_found::NotFound,
    programs::Programs,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/programs")]
    Programs,
    #[at("/news")]
    News,
    #[at("/donate")]
    Donate,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::About => html! { <About /> },
        Route::Programs => html! { <Programs /> },
        Route::News => html! { <News /> },
        Route::Donate => html! { <Donate /> },
        Route::Admin => html! { <Admin /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
