use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="container footer-grid">
                <div>
                    <h3>{ "Quick Links" }</h3>
                    <ul>
                        <li><Link<Route> to={Route::Home}>{ "Home" }</Link<Route>></li>
                        <li><Link<Route> to={Route::Programs}>{ "Programs" }</Link<Route>></li>
                        <li><Link<Route> to={Route::About}>{ "About Us" }</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h3>{ "Get Involved" }</h3>
                    <ul>
                        <li><Link<Route> to={Route::Donate}>{ "Donate" }</Link<Route>></li>
                        <li><Link<Route> to={Route::Programs}>{ "Events" }</Link<Route>></li>
                        <li><Link<Route> to={Route::News}>{ "News" }</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h3>{ "Connect With Us" }</h3>
                    <p>{ "+27 (738) 527 567" }</p>
                    <p>{ "1206 Albert St, Germiston, Gauteng, 1412" }</p>
                </div>
            </div>
            <p class="copyright">
                { "© 2024 SproutSphere. Empowering high school students for a brighter future." }
            </p>
        </footer>
    }
}
