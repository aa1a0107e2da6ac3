use gloo_console::{error, log};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub const LEAD_SOURCE: &str = "viora-website";

pub const INTEREST_OPTIONS: [&str; 3] = [
    "Business Voice Automation",
    "Voice Content Studio",
    "Voice Personality & Brand Design",
];

// Past this, the request is aborted and the visitor sees the failure banner.
const SUBMIT_TIMEOUT_MS: u32 = 10_000;

/// One lead, exactly as the webhook receives it.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LeadPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interest: String,
    pub message: String,
    pub timestamp: String,
    pub source: String,
}

impl LeadPayload {
    pub fn new(
        name: String,
        email: String,
        phone: String,
        interest: String,
        message: String,
        timestamp: String,
    ) -> Self {
        LeadPayload {
            name,
            email,
            phone,
            interest,
            message,
            timestamp,
            source: LEAD_SOURCE.to_string(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub webhook_url: String,
    pub on_book_demo: Callback<MouseEvent>,
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let interest_ref = use_node_ref();
    let message_ref = use_node_ref();

    let error_msg = use_state(|| None::<String>);
    let success_msg = use_state(|| None::<String>);
    let is_sending = use_state(|| false);

    let onsubmit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let phone_ref = phone_ref.clone();
        let interest_ref = interest_ref.clone();
        let message_ref = message_ref.clone();
        let error_setter = error_msg.clone();
        let success_setter = success_msg.clone();
        let sending_setter = is_sending.clone();
        let webhook_url = props.webhook_url.clone();

        Callback::from(move |e: SubmitEvent| {
            // Required/email constraints are checked by the browser before
            // this handler ever fires, so everything here is well-formed.
            e.prevent_default();
            if *sending_setter {
                return;
            }

            let name = name_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let email = email_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let phone = phone_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let interest = interest_ref
                .cast::<HtmlSelectElement>()
                .map(|s| s.value())
                .unwrap_or_else(|| INTEREST_OPTIONS[0].to_string());
            let message = message_ref
                .cast::<HtmlTextAreaElement>()
                .map(|t| t.value())
                .unwrap_or_default();

            let payload = LeadPayload::new(
                name,
                email,
                phone,
                interest,
                message,
                chrono::Utc::now().to_rfc3339(),
            );

            let error_setter = error_setter.clone();
            let success_setter = success_setter.clone();
            let sending_setter = sending_setter.clone();
            let webhook_url = webhook_url.clone();
            sending_setter.set(true);
            error_setter.set(None);
            success_setter.set(None);

            spawn_local(async move {
                let controller = AbortController::new().ok();
                let signal = controller.as_ref().map(|c| c.signal());
                // Dropped when the response lands, which cancels the abort.
                let _abort_timer = controller.map(|c| {
                    Timeout::new(SUBMIT_TIMEOUT_MS, move || {
                        log!("Lead submission timed out, aborting request");
                        c.abort();
                    })
                });

                let request = Request::post(&webhook_url)
                    .abort_signal(signal.as_ref())
                    .json(&payload);
                let request = match request {
                    Ok(req) => req,
                    Err(e) => {
                        error!("Failed to serialize lead payload:", e.to_string());
                        error_setter
                            .set(Some("There was an issue sending the form.".to_string()));
                        sending_setter.set(false);
                        return;
                    }
                };

                match request.send().await {
                    Ok(response) => {
                        if response.ok() {
                            log!("Lead delivered to webhook");
                            error_setter.set(None);
                            success_setter
                                .set(Some("Thanks — we received your request.".to_string()));
                        } else {
                            error!("Webhook rejected lead with status:", response.status());
                            error_setter
                                .set(Some("There was an issue sending the form.".to_string()));
                        }
                    }
                    Err(e) => {
                        error!("Network error sending lead:", e.to_string());
                        error_setter
                            .set(Some("Network error — could not send form.".to_string()));
                    }
                }
                sending_setter.set(false);
            });
        })
    };

    html! {
        <div class="lead-form-container">
            {
                if let Some(message) = (*error_msg).as_ref() {
                    html! { <div class="form-status form-error">{message}</div> }
                } else if let Some(message) = (*success_msg).as_ref() {
                    html! { <div class="form-status form-success">{message}</div> }
                } else {
                    html! {}
                }
            }
            <form onsubmit={onsubmit} class="lead-form">
                <input
                    ref={name_ref}
                    name="name"
                    placeholder="Your name"
                    required={true}
                />
                <input
                    ref={email_ref}
                    name="email"
                    type="email"
                    placeholder="Email"
                    required={true}
                />
                <input
                    ref={phone_ref}
                    name="phone"
                    placeholder="Phone"
                />
                <select ref={interest_ref} name="interest">
                    { for INTEREST_OPTIONS.iter().map(|option| html! {
                        <option value={*option}>{*option}</option>
                    }) }
                </select>
                <textarea
                    ref={message_ref}
                    name="message"
                    placeholder="Message"
                    rows="4"
                    class="lead-form-message"
                />
                <div class="lead-form-actions">
                    <button type="submit" class="cta-primary" disabled={*is_sending}>
                        { if *is_sending { "Sending..." } else { "Send & Request Call" } }
                    </button>
                    <button
                        type="button"
                        class="cta-secondary"
                        onclick={props.on_book_demo.clone()}
                    >
                        {"Book via Calendly"}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_every_field_plus_origin() {
        let payload = LeadPayload::new(
            "Meera".to_string(),
            "meera@example.com".to_string(),
            "+91 98765 43210".to_string(),
            INTEREST_OPTIONS[1].to_string(),
            "Interested in narration.".to_string(),
            "2026-08-24T12:00:00+00:00".to_string(),
        );

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["name"], "Meera");
        assert_eq!(json["email"], "meera@example.com");
        assert_eq!(json["phone"], "+91 98765 43210");
        assert_eq!(json["interest"], "Voice Content Studio");
        assert_eq!(json["message"], "Interested in narration.");
        assert_eq!(json["timestamp"], "2026-08-24T12:00:00+00:00");
        assert_eq!(json["source"], "viora-website");
        assert_eq!(json.as_object().unwrap().len(), 7);
    }

    #[test]
    fn optional_fields_are_sent_as_empty_strings() {
        let payload = LeadPayload::new(
            "Arjun".to_string(),
            "arjun@example.com".to_string(),
            String::new(),
            INTEREST_OPTIONS[0].to_string(),
            String::new(),
            "2026-08-24T12:00:00+00:00".to_string(),
        );

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["phone"], "");
        assert_eq!(json["message"], "");
        assert_eq!(json["source"], LEAD_SOURCE);
    }

    #[test]
    fn interest_options_are_a_closed_set() {
        assert_eq!(INTEREST_OPTIONS.len(), 3);
        assert!(INTEREST_OPTIONS.contains(&"Business Voice Automation"));
    }
}
