//! Password-gated admin panel: donations overview and event management.

use chrono::{Local, SecondsFormat, TimeZone};
use shared::api::{EventInput, ListDonationsResponse};
use shared::events::parse_start_date;
use shared::models::Event;
use shared::{EventStatus, InvalidDateError};
use uuid::Uuid;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::services::api::ApiService;
use crate::services::session;

/// Attach the browser's offset to the form's wall-clock times so the server
/// stores the instant the admin meant.
fn with_offsets<Tz: TimeZone>(input: &EventInput, tz: &Tz) -> Result<EventInput, InvalidDateError> {
    let start = parse_start_date(&input.start_date, tz)?;
    let end = parse_start_date(&input.end_date, tz)?;

    Ok(EventInput {
        start_date: start.to_rfc3339_opts(SecondsFormat::Secs, true),
        end_date: end.to_rfc3339_opts(SecondsFormat::Secs, true),
        ..input.clone()
    })
}

fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

#[derive(Properties, PartialEq)]
struct LoginProps {
    on_login: Callback<Uuid>,
}

#[function_component(LoginForm)]
fn login_form(props: &LoginProps) -> Html {
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);

    let oninput = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| password.set(input_value(&e)))
    };

    let onsubmit = {
        let password = password.clone();
        let error = error.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let candidate = (*password).clone();
            let error = error.clone();
            let on_login = on_login.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::admin_login(candidate).await {
                    Ok(token) => on_login.emit(token),
                    Err(e) => {
                        tracing::warn!("Admin login failed: {}", e);
                        error.set(Some("Invalid password".to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="container narrow">
            <div class="card">
                <h2>{ "Admin Login" }</h2>
                if let Some(message) = (*error).clone() {
                    <div class="alert alert-error">{ message }</div>
                }
                <form {onsubmit}>
                    <label for="password">{ "Password" }</label>
                    <input
                        id="password"
                        type="password"
                        placeholder="Enter admin password"
                        value={(*password).clone()}
                        {oninput}
                    />
                    <button type="submit" class="btn btn-primary">{ "Login" }</button>
                </form>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TabProps {
    token: Uuid,
}

#[function_component(DonationsTab)]
fn donations_tab(props: &TabProps) -> Html {
    let data = use_state(|| None::<ListDonationsResponse>);
    let error = use_state(|| None::<String>);

    {
        let data = data.clone();
        let error = error.clone();
        use_effect_with(props.token, move |token| {
            let token = *token;
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::list_donations(&token).await {
                    Ok(response) => data.set(Some(response)),
                    Err(e) => {
                        tracing::error!("Failed to fetch donations: {}", e);
                        error.set(Some(e));
                    }
                }
            });
            || ()
        });
    }

    let body = match (&*data, &*error) {
        (_, Some(message)) => html! { <div class="alert alert-error">{ message }</div> },
        (None, None) => html! { <p>{ "Loading donations..." }</p> },
        (Some(response), None) if response.donations.is_empty() => {
            html! { <p class="empty-state">{ "No donations found." }</p> }
        }
        (Some(response), None) => html! {
            <>
                <p class="summary">
                    { format!("{} donations totalling R{:.2}", response.total, response.total_amount) }
                </p>
                <table class="table">
                    <thead>
                        <tr>
                            <th>{ "Amount (R)" }</th>
                            <th>{ "Frequency" }</th>
                            <th>{ "Date" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for response.donations.iter().map(|donation| html! {
                            <tr key={donation.id.to_string()}>
                                <td>{ format!("{:.2}", donation.amount) }</td>
                                <td>{ donation.frequency.to_string() }</td>
                                <td>{ donation.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string() }</td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </>
        },
    };

    html! {
        <div class="card">
            <h3>{ "Donations Table" }</h3>
            { body }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct EventFormProps {
    form: EventInput,
    editing: bool,
    on_change: Callback<EventInput>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
}

#[function_component(EventForm)]
fn event_form(props: &EventFormProps) -> Html {
    let field = |apply: fn(&mut EventInput, String)| {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |value: String| {
            let mut next = form.clone();
            apply(&mut next, value);
            on_change.emit(next);
        })
    };

    let on_title = field(|f, v| f.title = v).reform(|e: InputEvent| input_value(&e));
    let on_description = field(|f, v| f.description = v).reform(|e: InputEvent| {
        e.target_unchecked_into::<HtmlTextAreaElement>().value()
    });
    let on_start = field(|f, v| f.start_date = v).reform(|e: InputEvent| input_value(&e));
    let on_end = field(|f, v| f.end_date = v).reform(|e: InputEvent| input_value(&e));
    let on_location = field(|f, v| f.location = v).reform(|e: InputEvent| input_value(&e));
    let on_category = field(|f, v| f.category = v).reform(|e: InputEvent| input_value(&e));
    let on_status = field(|f, v| f.status = v.parse().unwrap_or_default()).reform(|e: web_sys::Event| {
        e.target_unchecked_into::<HtmlSelectElement>().value()
    });

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };
    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

    let form = &props.form;
    html! {
        <form class="card event-form" {onsubmit}>
            <h3>{ if props.editing { "Edit Event" } else { "Add New Event" } }</h3>
            <label for="event-title">{ "Event Title" }</label>
            <input id="event-title" required={true} value={form.title.clone()} oninput={on_title} />

            <label for="event-description">{ "Description" }</label>
            <textarea id="event-description" value={form.description.clone()} oninput={on_description} />

            <label for="event-start">{ "Start Date & Time" }</label>
            <input id="event-start" type="datetime-local" required={true} value={form.start_date.clone()} oninput={on_start} />

            <label for="event-end">{ "End Date & Time" }</label>
            <input id="event-end" type="datetime-local" required={true} value={form.end_date.clone()} oninput={on_end} />

            <label for="event-location">{ "Location" }</label>
            <input id="event-location" value={form.location.clone()} oninput={on_location} />

            <label for="event-category">{ "Category" }</label>
            <input
                id="event-category"
                placeholder="e.g., Career, Academic, Wellness, Sports"
                value={form.category.clone()}
                oninput={on_category}
            />

            <label for="event-status">{ "Status" }</label>
            <select id="event-status" onchange={on_status}>
                <option value="draft" selected={form.status == EventStatus::Draft}>{ "Draft" }</option>
                <option value="published" selected={form.status == EventStatus::Published}>{ "Published" }</option>
            </select>

            <div class="form-actions">
                <button type="submit" class="btn btn-primary">
                    { if props.editing { "Update Event" } else { "Add Event" } }
                </button>
                if props.editing {
                    <button type="button" class="btn btn-outline" onclick={on_cancel}>{ "Cancel" }</button>
                }
            </div>
        </form>
    }
}

#[function_component(EventsTab)]
fn events_tab(props: &TabProps) -> Html {
    let token = props.token;
    let events = use_state(Vec::<Event>::new);
    let form = use_state(EventInput::default);
    let editing = use_state(|| None::<Uuid>);
    let message = use_state(|| None::<Result<String, String>>);
    // Bumped after every successful change to trigger a refetch.
    let revision = use_state(|| 0u32);

    {
        let events = events.clone();
        let message = message.clone();
        use_effect_with((token, *revision), move |(token, _)| {
            let token = *token;
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::list_admin_events(&token).await {
                    Ok(fetched) => events.set(fetched),
                    Err(e) => {
                        tracing::error!("Failed to fetch events: {}", e);
                        message.set(Some(Err(e)));
                    }
                }
            });
            || ()
        });
    }

    let reset = {
        let form = form.clone();
        let editing = editing.clone();
        Callback::from(move |_: ()| {
            form.set(EventInput::default());
            editing.set(None);
        })
    };

    let on_change = {
        let form = form.clone();
        Callback::from(move |next: EventInput| form.set(next))
    };

    let on_submit = {
        let form = form.clone();
        let editing = editing.clone();
        let message = message.clone();
        let revision = revision.clone();
        let reset = reset.clone();
        Callback::from(move |_: ()| {
            let input = match with_offsets(&form, &Local) {
                Ok(input) => input,
                Err(e) => {
                    message.set(Some(Err(e.to_string())));
                    return;
                }
            };
            let editing = *editing;
            let message = message.clone();
            let revision = revision.clone();
            let reset = reset.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match editing {
                    Some(id) => ApiService::update_event(&token, id, &input).await.map(|_| "Event updated successfully"),
                    None => ApiService::create_event(&token, &input).await.map(|_| "Event added successfully"),
                };
                match result {
                    Ok(text) => {
                        message.set(Some(Ok(text.to_string())));
                        reset.emit(());
                        revision.set(*revision + 1);
                    }
                    Err(e) => {
                        tracing::error!("Failed to save event: {}", e);
                        message.set(Some(Err(e)));
                    }
                }
            });
        })
    };

    let run_action = {
        let message = message.clone();
        let revision = revision.clone();
        move |id: Uuid, toggle: bool| {
            let message = message.clone();
            let revision = revision.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = if toggle {
                    ApiService::toggle_event(&token, id).await.map(|event| match event.status {
                        EventStatus::Published => "Event published successfully",
                        EventStatus::Draft => "Event unpublished successfully",
                    })
                } else {
                    ApiService::delete_event(&token, id).await.map(|_| "Event deleted successfully")
                };
                match result {
                    Ok(text) => {
                        message.set(Some(Ok(text.to_string())));
                        revision.set(*revision + 1);
                    }
                    Err(e) => {
                        tracing::error!("Event action failed: {}", e);
                        message.set(Some(Err(e)));
                    }
                }
            });
        }
    };

    let rows = events.iter().map(|event| {
        let id = event.id;
        let on_edit = {
            let form = form.clone();
            let editing = editing.clone();
            let event = event.clone();
            Callback::from(move |_: MouseEvent| {
                form.set(EventInput::from_event(&event, &Local));
                editing.set(Some(event.id));
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            })
        };
        let on_toggle = {
            let run_action = run_action.clone();
            Callback::from(move |_: MouseEvent| run_action(id, true))
        };
        let on_delete = {
            let run_action = run_action.clone();
            Callback::from(move |_: MouseEvent| run_action(id, false))
        };
        let toggle_label = match event.status {
            EventStatus::Published => "Unpublish",
            EventStatus::Draft => "Publish",
        };

        html! {
            <tr key={id.to_string()}>
                <td>{ &event.title }</td>
                <td>{ event.category.clone().unwrap_or_else(|| "-".to_string()) }</td>
                <td>{ event.start_date.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string() }</td>
                <td><span class={classes!("badge", event.status.as_str())}>{ event.status.as_str() }</span></td>
                <td class="actions">
                    <button class="btn btn-small" onclick={on_edit}>{ "Edit" }</button>
                    <button class="btn btn-small" onclick={on_toggle}>{ toggle_label }</button>
                    <button class="btn btn-small btn-danger" onclick={on_delete}>{ "Delete" }</button>
                </td>
            </tr>
        }
    });

    html! {
        <div class="events-tab">
            if let Some(result) = (*message).clone() {
                {
                    match result {
                        Ok(text) => html! { <div class="alert alert-success">{ text }</div> },
                        Err(text) => html! { <div class="alert alert-error">{ text }</div> },
                    }
                }
            }
            <EventForm
                form={(*form).clone()}
                editing={editing.is_some()}
                {on_change}
                {on_submit}
                on_cancel={reset}
            />
            <div class="card">
                <h3>{ "All Events" }</h3>
                if events.is_empty() {
                    <p class="empty-state">{ "No events found." }</p>
                } else {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{ "Title" }</th>
                                <th>{ "Category" }</th>
                                <th>{ "Start Date" }</th>
                                <th>{ "Status" }</th>
                                <th>{ "Actions" }</th>
                            </tr>
                        </thead>
                        <tbody>{ for rows }</tbody>
                    </table>
                }
            </div>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Donations,
    Events,
}

#[function_component(Admin)]
pub fn admin() -> Html {
    let token = use_state(session::admin_token);
    let tab = use_state(|| Tab::Donations);

    let on_login = {
        let token = token.clone();
        Callback::from(move |new_token: Uuid| {
            session::store_admin_token(&new_token);
            token.set(Some(new_token));
        })
    };

    let Some(current) = *token else {
        return html! { <LoginForm {on_login} /> };
    };

    let on_logout = {
        let token = token.clone();
        Callback::from(move |_: MouseEvent| {
            session::clear_admin_token();
            token.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = ApiService::admin_logout(&current).await {
                    tracing::warn!("Logout request failed: {}", e);
                }
            });
        })
    };

    let select_tab = |target: Tab| {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(target))
    };

    html! {
        <div class="container admin-page">
            <div class="section-heading">
                <h1>{ "Admin Dashboard" }</h1>
                <button class="btn btn-outline" onclick={on_logout}>{ "Logout" }</button>
            </div>
            <div class="tabs">
                <button
                    class={classes!("tab", (*tab == Tab::Donations).then_some("active"))}
                    onclick={select_tab(Tab::Donations)}
                >
                    { "Donations" }
                </button>
                <button
                    class={classes!("tab", (*tab == Tab::Events).then_some("active"))}
                    onclick={select_tab(Tab::Events)}
                >
                    { "Event Management" }
                </button>
            </div>
            {
                match *tab {
                    Tab::Donations => html! { <DonationsTab token={current} /> },
                    Tab::Events => html! { <EventsTab token={current} /> },
                }
            }
        </div>
    }
}
