use chrono::Local;
use shared::programs::ProgramArea;
use shared::{normalize_events, CalendarView, DisplayEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::event_card::EventCard;
use crate::router::Route;
use crate::services::api::ApiService;

const FEATURED_EVENTS: usize = 3;

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    (
        "Aisha Khan",
        "Former Student",
        "The career guidance program helped me discover my passion for engineering and provided me \
         with mentors who changed my life.",
    ),
    (
        "David Lee",
        "Tutoring Program",
        "Thanks to the tutoring support, my grades improved dramatically. I felt so much more \
         confident and prepared for exams.",
    ),
    (
        "Sofia Ramirez",
        "Mental Health Support",
        "The mental health workshops provided a safe space to discuss challenges and have made a \
         real difference.",
    ),
];

#[function_component(Home)]
pub fn home() -> Html {
    let featured = use_state(Vec::<DisplayEvent>::new);

    {
        let featured = featured.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::list_events().await {
                    Ok(records) => {
                        let events = normalize_events(&records, &Local);
                        let view = CalendarView::new(&events, Local);
                        let upcoming = view
                            .future_events(view.today())
                            .into_iter()
                            .take(FEATURED_EVENTS)
                            .cloned()
                            .collect();
                        featured.set(upcoming);
                    }
                    Err(e) => tracing::error!("Failed to fetch events: {}", e),
                }
            });
            || ()
        });
    }

    html! {
        <div class="home-page">
            <section class="hero">
                <div class="container">
                    <h1>{ "Empowering high school students for a brighter future." }</h1>
                    <p>
                        { "SproutSphere provides comprehensive support programs to help students excel \
                           academically, develop essential life skills, and explore career paths. Join us \
                           in shaping tomorrow's leaders." }
                    </p>
                    <div class="hero-actions">
                        <Link<Route> to={Route::Programs} classes="btn btn-primary">
                            { "Learn More About Our Programs" }
                        </Link<Route>>
                        <Link<Route> to={Route::Donate} classes="btn btn-outline">
                            { "Contact Us / Donate" }
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section class="container">
                <h2>{ "Our Transformative Programs" }</h2>
                <div class="program-grid">
                    { for ProgramArea::ALL.iter().map(|area| html! {
                        <div class="card program-card">
                            <span class={classes!("icon", format!("icon-{}", area.icon().css_name()))}></span>
                            <h3>{ area.title() }</h3>
                        </div>
                    })}
                </div>
            </section>

            if !featured.is_empty() {
                <section class="container">
                    <h2>{ "Upcoming Events & Workshops" }</h2>
                    <div class="event-grid">
                        { for featured.iter().map(|event| html! { <EventCard event={event.clone()} /> }) }
                    </div>
                </section>
            }

            <section class="container">
                <h2>{ "Hear From Our Students" }</h2>
                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().map(|(name, role, quote)| html! {
                        <blockquote class="card testimonial">
                            <p>{ format!("\"{}\"", quote) }</p>
                            <footer>
                                <strong>{ *name }</strong>
                                <span>{ *role }</span>
                            </footer>
                        </blockquote>
                    })}
                </div>
            </section>

            <section class="cta">
                <div class="container">
                    <h2>{ "Empower a Student Today" }</h2>
                    <p>
                        { "Your donation provides essential resources, mentorships, and opportunities that \
                           change lives." }
                    </p>
                    <Link<Route> to={Route::Donate} classes="btn btn-primary">{ "Support a Student Now" }</Link<Route>>
                </div>
            </section>
        </div>
    }
}
