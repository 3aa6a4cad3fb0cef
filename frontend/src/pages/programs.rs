use std::collections::BTreeSet;
use std::rc::Rc;

use chrono::{Local, NaiveDate};
use gloo::timers::callback::Interval;
use shared::programs::ProgramArea;
use shared::{normalize_events, CalendarView, DisplayEvent, RawEventRecord, Selection, YearMonth};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::calendar::Calendar;
use crate::components::event_card::EventCard;
use crate::router::Route;
use crate::services::api::ApiService;

/// How often the page re-reads the clock so "today" rolls over at midnight.
const CLOCK_TICK_MS: u32 = 60_000;

fn current_day() -> NaiveDate {
    Local::now().date_naive()
}

/// Everything the calendar section renders, derived from the event list and
/// the current selection.
#[derive(PartialEq)]
struct Projections {
    highlights: Rc<BTreeSet<NaiveDate>>,
    selected: Vec<DisplayEvent>,
    upcoming: Vec<DisplayEvent>,
}

fn project(events: &[DisplayEvent], selection: &Selection, today: NaiveDate) -> Projections {
    let view = CalendarView::new(events, Local);
    Projections {
        highlights: Rc::new(view.highlight_dates()),
        selected: view.selected_events(selection).into_iter().cloned().collect(),
        upcoming: view.future_events(today).into_iter().cloned().collect(),
    }
}

#[function_component(ProgramCards)]
fn program_cards() -> Html {
    html! {
        <div class="program-grid">
            { for ProgramArea::ALL.iter().map(|area| html! {
                <div class="card program-card">
                    <span class={classes!("icon", format!("icon-{}", area.icon().css_name()))}></span>
                    <div>
                        <h3>{ area.title() }</h3>
                        <p>{ area.description() }</p>
                    </div>
                </div>
            })}
        </div>
    }
}

#[function_component(Programs)]
pub fn programs() -> Html {
    let records = use_state(|| Rc::new(Vec::<RawEventRecord>::new()));
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let today_handle = use_state_eq(current_day);
    let today = *today_handle;
    let selection = use_state(|| Selection::starting_at(today));

    use_effect_with((), move |_| {
        let tick = Interval::new(CLOCK_TICK_MS, move || today_handle.set(current_day()));
        move || drop(tick)
    });

    {
        let records = records.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::list_events().await {
                    Ok(fetched) => records.set(Rc::new(fetched)),
                    Err(e) => {
                        tracing::error!("Failed to fetch events: {}", e);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let events = use_memo((*records).clone(), |records| normalize_events(records.as_slice(), &Local));
    let projections = use_memo((events, *selection, today), |(events, selection, today)| {
        project(events.as_slice(), selection, *today)
    });

    let on_select = {
        let selection = selection.clone();
        Callback::from(move |day: Option<NaiveDate>| {
            let mut next = *selection;
            match day {
                Some(day) => next.select_day(day),
                None => next.clear_day(),
            }
            selection.set(next);
        })
    };

    let on_month_change = {
        let selection = selection.clone();
        Callback::from(move |month: YearMonth| {
            let mut next = *selection;
            next.select_month(month);
            selection.set(next);
        })
    };

    let clear_selection = {
        let selection = selection.clone();
        Callback::from(move |_| {
            let mut next = *selection;
            next.clear_day();
            selection.set(next);
        })
    };

    html! {
        <div class="programs-page">
            <section class="hero">
                <div class="container">
                    <h1>{ "Our Impactful Programs" }</h1>
                    <p>
                        { "SproutSphere is dedicated to empowering high school students through a diverse \
                           range of programs designed to foster academic success, personal growth, and \
                           future readiness." }
                    </p>
                    <Link<Route> to={Route::Donate} classes="btn btn-primary">{ "Get Involved" }</Link<Route>>
                </div>
            </section>

            <section class="container">
                <h2>{ "Explore Our Core Offerings" }</h2>
                <ProgramCards />
            </section>

            <section class="container calendar-section">
                <h2>{ "Program Calendar & Key Dates" }</h2>
                if let Some(message) = (*error).clone() {
                    <div class="alert alert-error">{ format!("Could not load events: {}", message) }</div>
                }
                <div class="calendar-layout">
                    <div>
                        <h3>{ "Interactive Calendar" }</h3>
                        <Calendar
                            month={selection.visible_month}
                            selected={selection.selected_date}
                            {today}
                            highlights={projections.highlights.clone()}
                            {on_select}
                            {on_month_change}
                        />
                    </div>
                    <div>
                        <div class="section-heading">
                            <h3>{ selection.heading() }</h3>
                            if selection.selected_date.is_some() {
                                <button class="btn btn-outline" onclick={clear_selection}>{ "Clear Selection" }</button>
                            }
                        </div>
                        if *loading {
                            <div class="loading"><div class="spinner"></div></div>
                        } else if projections.selected.is_empty() {
                            <p class="empty-state">{ "No events expected" }</p>
                        } else {
                            { for projections.selected.iter().map(|event| html! {
                                <EventCard event={event.clone()} compact={true} />
                            })}
                        }
                    </div>
                </div>
            </section>

            <section class="container">
                <h2>{ "Upcoming Events" }</h2>
                if !*loading && projections.upcoming.is_empty() {
                    <p class="empty-state">{ "No upcoming events" }</p>
                } else {
                    <div class="event-grid">
                        { for projections.upcoming.iter().map(|event| html! {
                            <EventCard event={event.clone()} />
                        })}
                    </div>
                }
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(title: &str, day: u32) -> DisplayEvent {
        DisplayEvent {
            title: title.to_string(),
            subtitle: String::new(),
            date: Local
                .with_ymd_and_hms(2025, 11, day, 12, 0, 0)
                .single()
                .map(|local| local.with_timezone(&Utc))
                .unwrap(),
            badge: "Event".to_string(),
        }
    }

    #[test]
    fn test_upcoming_follows_today() {
        let events = vec![event("Science Fair", 10), event("Sports Tournament", 15)];
        let selection = Selection::starting_at(NaiveDate::from_ymd_opt(2025, 11, 10).unwrap());

        let on_the_day = project(&events, &selection, NaiveDate::from_ymd_opt(2025, 11, 10).unwrap());
        assert_eq!(on_the_day.upcoming.len(), 2);

        let next_day = project(&events, &selection, NaiveDate::from_ymd_opt(2025, 11, 11).unwrap());
        let titles: Vec<_> = next_day.upcoming.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Sports Tournament"]);
        assert_eq!(next_day.selected.len(), 2);
    }
}
