//! Month grid with a dot under every day that has an event.

use std::collections::BTreeSet;
use std::rc::Rc;

use chrono::{Datelike, NaiveDate};
use shared::calendar::month_grid;
use shared::YearMonth;
use yew::prelude::*;

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub month: YearMonth,
    pub selected: Option<NaiveDate>,
    pub today: NaiveDate,
    pub highlights: Rc<BTreeSet<NaiveDate>>,
    /// Emits the clicked day, or `None` when the selected day is clicked again.
    pub on_select: Callback<Option<NaiveDate>>,
    pub on_month_change: Callback<YearMonth>,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let prev = {
        let on_month_change = props.on_month_change.clone();
        let target = props.month.prev();
        Callback::from(move |_| on_month_change.emit(target))
    };
    let next = {
        let on_month_change = props.on_month_change.clone();
        let target = props.month.next();
        Callback::from(move |_| on_month_change.emit(target))
    };

    let cells = month_grid(props.month);

    html! {
        <div class="calendar">
            <div class="calendar-nav">
                <button class="btn btn-icon" onclick={prev} aria-label="Previous month">{ "‹" }</button>
                <span class="calendar-month">{ props.month.label() }</span>
                <button class="btn btn-icon" onclick={next} aria-label="Next month">{ "›" }</button>
            </div>
            <div class="calendar-grid">
                { for WEEKDAYS.iter().map(|day| html! { <span class="calendar-weekday">{ *day }</span> }) }
                { for cells.into_iter().map(|cell| match cell {
                    None => html! { <span class="calendar-cell empty"></span> },
                    Some(day) => {
                        let is_selected = props.selected == Some(day);
                        let class = classes!(
                            "calendar-cell",
                            is_selected.then_some("selected"),
                            (day == props.today).then_some("today"),
                            props.highlights.contains(&day).then_some("has-event"),
                        );
                        let on_select = props.on_select.clone();
                        let onclick = Callback::from(move |_| {
                            on_select.emit(if is_selected { None } else { Some(day) })
                        });
                        html! {
                            <button {class} {onclick}>{ day.day() }</button>
                        }
                    }
                })}
            </div>
        </div>
    }
}
