use chrono::Local;
use shared::programs::ProgramArea;
use shared::DisplayEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EventCardProps {
    pub event: DisplayEvent,
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(EventCard)]
pub fn event_card(props: &EventCardProps) -> Html {
    let event = &props.event;
    let area = ProgramArea::from_category(&event.badge);

    html! {
        <div class={classes!("card", "event-card", props.compact.then_some("compact"))}>
            <span class="badge">
                if let Some(area) = area {
                    <span class={classes!("icon", format!("icon-{}", area.icon().css_name()))}></span>
                }
                { &event.badge }
            </span>
            <h4 class="event-title">{ &event.title }</h4>
            if !event.subtitle.is_empty() {
                <p class="event-subtitle">{ &event.subtitle }</p>
            }
            <p class="event-date">{ event.date_label(&Local) }</p>
        </div>
    }
}
