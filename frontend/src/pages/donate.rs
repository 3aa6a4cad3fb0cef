use shared::api::{CreateContactRequest, CreateDonationRequest, DONATION_OPTIONS};
use shared::models::DonationFrequency;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::services::api::ApiService;

#[derive(Clone, PartialEq)]
enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    fn view(&self) -> Html {
        match self {
            Notice::Success(text) => html! { <div class="alert alert-success">{ text }</div> },
            Notice::Error(text) => html! { <div class="alert alert-error">{ text }</div> },
        }
    }
}

/// Read the amount field. Anything that is not a positive number is refused.
fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

/// Rand amount without a trailing ".00" for whole numbers.
fn format_rand(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("R{:.0}", amount)
    } else {
        format!("R{:.2}", amount)
    }
}

fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

#[function_component(ContactForm)]
fn contact_form() -> Html {
    let form = use_state(CreateContactRequest::default);
    let notice = use_state(|| None::<Notice>);

    let update = |apply: fn(&mut CreateContactRequest, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let set_name = update(|f, v| f.name = v);
    let set_email = update(|f, v| f.email = v);
    let set_message = update(|f, v| f.message = v);

    let onsubmit = {
        let form = form.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = (*form).clone();
            let form = form.clone();
            let notice = notice.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::submit_contact(&request).await {
                    Ok(_) => {
                        notice.set(Some(Notice::Success(
                            "Message sent! We'll get back to you soon.".to_string(),
                        )));
                        form.set(CreateContactRequest::default());
                    }
                    Err(e) => {
                        tracing::error!("Contact submission failed: {}", e);
                        notice.set(Some(Notice::Error(
                            "Failed to send message. Please try again.".to_string(),
                        )));
                    }
                }
            });
        })
    };

    html! {
        <div class="card">
            <h2>{ "Get in Touch" }</h2>
            <p>
                { "We'd love to hear from you! Whether you have questions, need support, or want to get \
                   involved, please reach out." }
            </p>
            <p class="contact-line">{ "+27 (738) 527 567" }</p>
            <p class="contact-line">{ "1206 Albert St, Germiston, Gauteng, 1412" }</p>
            if let Some(notice) = (*notice).clone() {
                { notice.view() }
            }
            <form {onsubmit}>
                <label for="name">{ "Full Name" }</label>
                <input
                    id="name"
                    placeholder="Your name"
                    required={true}
                    value={form.name.clone()}
                    oninput={set_name.reform(|e: InputEvent| input_value(&e))}
                />
                <label for="email">{ "Email Address" }</label>
                <input
                    id="email"
                    type="email"
                    placeholder="your.email@example.com"
                    required={true}
                    value={form.email.clone()}
                    oninput={set_email.reform(|e: InputEvent| input_value(&e))}
                />
                <label for="message">{ "Your Message" }</label>
                <textarea
                    id="message"
                    rows="4"
                    placeholder="Type your message here..."
                    required={true}
                    value={form.message.clone()}
                    oninput={set_message.reform(|e: InputEvent| {
                        e.target_unchecked_into::<HtmlTextAreaElement>().value()
                    })}
                />
                <button type="submit" class="btn btn-primary">{ "Send Message" }</button>
            </form>
        </div>
    }
}

#[function_component(DonationForm)]
fn donation_form() -> Html {
    let selected = use_state(|| None::<usize>);
    let amount = use_state(String::new);
    let frequency = use_state(DonationFrequency::default);
    let notice = use_state(|| None::<Notice>);

    let on_custom_amount = {
        let amount = amount.clone();
        let selected = selected.clone();
        Callback::from(move |e: InputEvent| {
            amount.set(input_value(&e));
            selected.set(None);
        })
    };

    let set_frequency = |value: DonationFrequency| {
        let frequency = frequency.clone();
        Callback::from(move |_: MouseEvent| frequency.set(value))
    };

    let onsubmit = {
        let selected = selected.clone();
        let amount = amount.clone();
        let frequency = frequency.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(value) = parse_amount(&amount) else {
                notice.set(Some(Notice::Error(
                    "Please select or enter a valid donation amount.".to_string(),
                )));
                return;
            };

            let request = CreateDonationRequest {
                amount: value,
                frequency: *frequency,
            };
            let selected = selected.clone();
            let amount = amount.clone();
            let frequency = frequency.clone();
            let notice = notice.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::create_donation(&request).await {
                    Ok(donation) => {
                        notice.set(Some(Notice::Success(format!(
                            "Thank you! Your {} donation of {} will make a difference.",
                            donation.frequency,
                            format_rand(donation.amount)
                        ))));
                        selected.set(None);
                        amount.set(String::new());
                        frequency.set(DonationFrequency::OneTime);
                    }
                    Err(e) => {
                        tracing::error!("Donation failed: {}", e);
                        notice.set(Some(Notice::Error(
                            "Failed to process donation. Please try again.".to_string(),
                        )));
                    }
                }
            });
        })
    };

    html! {
        <div class="card">
            <h2>{ "Support a Student Today" }</h2>
            <p>
                { "Your contributions empower high school students through education, mentorship, and \
                   wellness programs. Every donation makes a difference!" }
            </p>
            if let Some(notice) = (*notice).clone() {
                { notice.view() }
            }
            <form {onsubmit}>
                <div class="donation-options">
                    { for DONATION_OPTIONS.iter().enumerate().map(|(index, option)| {
                        let onclick = {
                            let selected = selected.clone();
                            let amount = amount.clone();
                            let value = option.amount;
                            Callback::from(move |_: MouseEvent| {
                                selected.set(Some(index));
                                amount.set(value.to_string());
                            })
                        };
                        html! {
                            <button
                                type="button"
                                class={classes!("donation-option", (*selected == Some(index)).then_some("selected"))}
                                {onclick}
                            >
                                <strong>{ format!("R{}", option.amount) }</strong>
                                <span>{ option.label }</span>
                            </button>
                        }
                    })}
                </div>

                <label for="custom-amount">{ "Custom Amount" }</label>
                <input
                    id="custom-amount"
                    type="number"
                    min="1"
                    placeholder="0"
                    value={(*amount).clone()}
                    oninput={on_custom_amount}
                />

                <label>{ "Donation Frequency" }</label>
                <div class="frequency-toggle">
                    <button
                        type="button"
                        class={classes!("btn", (*frequency == DonationFrequency::OneTime).then_some("active"))}
                        onclick={set_frequency(DonationFrequency::OneTime)}
                    >
                        { "One-time" }
                    </button>
                    <button
                        type="button"
                        class={classes!("btn", (*frequency == DonationFrequency::Monthly).then_some("active"))}
                        onclick={set_frequency(DonationFrequency::Monthly)}
                    >
                        { "Monthly" }
                    </button>
                </div>

                <button type="submit" class="btn btn-primary">{ "Support a Student Now" }</button>
            </form>
        </div>
    }
}

#[function_component(Donate)]
pub fn donate() -> Html {
    html! {
        <div class="donate-page">
            <section class="hero">
                <div class="container">
                    <h1>{ "Contact & Donate" }</h1>
                    <p>
                        { "Connect with SproutSphere to learn more or make a meaningful contribution to \
                           empower students." }
                    </p>
                </div>
            </section>
            <section class="container two-column">
                <ContactForm />
                <DonationForm />
            </section>
        </div>
    }
}
