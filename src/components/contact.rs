use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icons::{CalendarIcon, LocationIcon, MailIcon, SendIcon, WhatsAppIcon};
use crate::config::SiteConfig;
use crate::reveal::Reveal;

/// How long the optimistic "message sent" acknowledgment stays on screen.
pub const ACK_DURATION_MS: u32 = 4_000;

/// The three visible form fields. Each keystroke overwrites the whole field
/// value, fields never interact with each other.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn set_field(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "email" => self.email = value,
            "message" => self.message = value,
            _ => {}
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Body posted to the form relay: the visible fields plus the relay's two
/// control fields (fixed subject line, captcha disabled).
#[derive(Serialize, Debug)]
struct RelayPayload {
    name: String,
    email: String,
    message: String,
    #[serde(rename = "_subject")]
    subject: &'static str,
    #[serde(rename = "_captcha")]
    captcha: &'static str,
}

impl RelayPayload {
    fn new(fields: ContactFields, config: &SiteConfig) -> Self {
        Self {
            name: fields.name,
            email: fields.email,
            message: fields.message,
            subject: config.form_subject,
            captcha: "false",
        }
    }
}

/// Fire-and-forget delivery. The UI has already acknowledged the message by
/// the time this runs; a failed post is only logged.
fn send_to_relay(endpoint: &'static str, payload: RelayPayload) {
    spawn_local(async move {
        let request = match Request::post(endpoint).json(&payload) {
            Ok(request) => request,
            Err(err) => {
                log::warn!("could not encode contact message: {}", err);
                return;
            }
        };
        match request.send().await {
            Ok(response) if !response.ok() => {
                log::warn!("contact relay answered {}", response.status());
            }
            Ok(_) => {}
            Err(err) => {
                log::warn!("contact relay post failed: {}", err);
            }
        }
    });
}

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub config: SiteConfig,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let config = props.config.clone();
    let fields = use_state(ContactFields::default);
    let submitted = use_state(|| false);

    let on_name = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.set_field("name", input.value());
            fields.set(next);
        })
    };
    let on_email = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.set_field("email", input.value());
            fields.set(next);
        })
    };
    let on_message = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.set_field("message", input.value());
            fields.set(next);
        })
    };

    let onsubmit = {
        let fields = fields.clone();
        let submitted = submitted.clone();
        let config = config.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let snapshot = (*fields).clone();
            send_to_relay(config.form_endpoint, RelayPayload::new(snapshot, &config));

            let mut cleared = (*fields).clone();
            cleared.clear();
            fields.set(cleared);
            submitted.set(true);

            let submitted = submitted.clone();
            Timeout::new(ACK_DURATION_MS, move || {
                submitted.set(false);
            })
            .forget();
        })
    };

    html! {
        <section id="contact" class="contact-section">
            <div class="contact-inner">
                <Reveal>
                    <div class="section-heading">
                        <span class="eyebrow">{"Get in Touch"}</span>
                        <h2>{"Ready to begin your "}<em class="grad-text">{"journey?"}</em></h2>
                    </div>
                </Reveal>
                <div class="contact-columns two-col">
                    <Reveal>
                        <div>
                            <div class="booking-card">
                                <div class="booking-card-icon"><CalendarIcon /></div>
                                <h3>{"Book a Session"}</h3>
                                <p>{"Click below to view available times and book directly. Sessions are typically 45–60 minutes."}</p>
                                <a href={config.booking_url} target="_blank" rel="noopener noreferrer" class="btn-primary btn-block">
                                    <CalendarIcon /> {"Open Booking Calendar"}
                                </a>
                            </div>
                            <div class="direct-contact-card">
                                <h3>{"Or reach out directly:"}</h3>
                                <div class="direct-contact-list">
                                    <a href={format!("mailto:{}", config.contact_email)} class="direct-contact-link mail">
                                        <div class="direct-contact-badge mail"><MailIcon /></div>
                                        {config.contact_email}
                                    </a>
                                    <a href={config.whatsapp_url} target="_blank" rel="noopener noreferrer" class="direct-contact-link whatsapp">
                                        <div class="direct-contact-badge whatsapp"><WhatsAppIcon /></div>
                                        {format!("{} (WhatsApp)", config.whatsapp_display)}
                                    </a>
                                    <div class="direct-contact-link">
                                        <div class="direct-contact-badge mail"><LocationIcon /></div>
                                        {"Melbourne & Worldwide (Zoom)"}
                                    </div>
                                </div>
                            </div>
                        </div>
                    </Reveal>
                    <Reveal delay_ms={200}>
                        <div class="contact-form-card">
                            <h3>{"Send a Message"}</h3>
                            <form {onsubmit}>
                                <input
                                    type="text"
                                    name="name"
                                    placeholder="Your name"
                                    required=true
                                    value={fields.name.clone()}
                                    oninput={on_name}
                                />
                                <input
                                    type="email"
                                    name="email"
                                    placeholder="Your email address"
                                    required=true
                                    value={fields.email.clone()}
                                    oninput={on_email}
                                />
                                <textarea
                                    name="message"
                                    placeholder="Tell me what brings you here..."
                                    rows="4"
                                    required=true
                                    value={fields.message.clone()}
                                    oninput={on_message}
                                />
                                <button type="submit" class="btn-primary btn-block">
                                    <SendIcon /> {"Send Message"}
                                </button>
                                if *submitted {
                                    <div class="form-ack">
                                        {"✓ Message sent! Miri will be in touch soon."}
                                    </div>
                                }
                            </form>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keystrokes_accumulate_literally_and_independently() {
        let mut fields = ContactFields::default();
        // oninput always hands over the element's full current value.
        for prefix in ["S", "Sa", "Sar", "Sara", "Sarah"] {
            fields.set_field("name", prefix.to_string());
        }
        fields.set_field("email", "sarah@example.com".to_string());
        fields.set_field("message", "Hello".to_string());

        assert_eq!(fields.name, "Sarah");
        assert_eq!(fields.email, "sarah@example.com");
        assert_eq!(fields.message, "Hello");
    }

    #[test]
    fn unknown_field_names_are_ignored() {
        let mut fields = ContactFields::default();
        fields.set_field("subject", "spam".to_string());
        assert_eq!(fields, ContactFields::default());
    }

    #[test]
    fn clear_resets_every_field() {
        let mut fields = ContactFields {
            name: "Sarah".into(),
            email: "sarah@example.com".into(),
            message: "Hello".into(),
        };
        fields.clear();
        assert_eq!(fields.name, "");
        assert_eq!(fields.email, "");
        assert_eq!(fields.message, "");
    }

    #[test]
    fn relay_payload_carries_fields_and_control_keys() {
        let config = SiteConfig::default();
        let fields = ContactFields {
            name: "Sarah".into(),
            email: "sarah@example.com".into(),
            message: "Hello".into(),
        };
        let value = serde_json::to_value(RelayPayload::new(fields, &config)).unwrap();

        assert_eq!(value["name"], "Sarah");
        assert_eq!(value["email"], "sarah@example.com");
        assert_eq!(value["message"], "Hello");
        assert_eq!(value["_subject"], config.form_subject);
        assert_eq!(value["_captcha"], "false");
    }

    #[test]
    fn acknowledgment_window_is_four_seconds() {
        assert_eq!(ACK_DURATION_MS, 4_000);
    }
}
