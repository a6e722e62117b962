use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::{self, FORM_NAME, TRIAL_INQUIRY_TYPE};
use crate::inquiry::{ContactDraft, FormField};
use crate::state::SubmissionStatus;

/// Text that changes once the visitor has asked for a free trial.
pub struct FormCopy {
    pub heading: &'static str,
    pub message_label: &'static str,
    pub message_placeholder: &'static str,
    pub submit_label: &'static str,
    pub success: &'static str,
}

pub const ERROR_TEXT: &str = "Sorry, there was an error sending your message. Please try again.";

pub fn form_copy(trial_booking: bool) -> FormCopy {
    if trial_booking {
        FormCopy {
            heading: "Book Your Free 60-Minute Trial",
            message_label: "Tell me about your goals and current level *",
            message_placeholder: "What specific areas would you like to work on? (pronunciation, presentations, calls, etc.)",
            submit_label: "Book My Free Trial",
            success: "Great! Your free trial request has been sent. I'll contact you within 24 hours to schedule your 60-minute session.",
        }
    } else {
        FormCopy {
            heading: "Get in Touch",
            message_label: "Message *",
            message_placeholder: "",
            submit_label: "Send Message",
            success: "Thank you! Your message has been sent successfully. I'll reply within 24 hours.",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub trial_booking: bool,
    pub status: SubmissionStatus,
    pub draft: ContactDraft,
    pub on_edit: Callback<(FormField, String)>,
    pub on_consent: Callback<bool>,
    pub on_submit: Callback<()>,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let copy = form_copy(props.trial_booking);

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let input_for = |field: FormField| {
        props.on_edit.reform(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            (field, input.value())
        })
    };

    let on_message = props.on_edit.reform(|e: InputEvent| {
        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
        (FormField::Message, textarea.value())
    });

    let on_consent = props.on_consent.reform(|e: Event| {
        let checkbox: HtmlInputElement = e.target_unchecked_into();
        checkbox.checked()
    });

    html! {
        <section id="contact" class="contact-section">
            <h2>{"Get in Touch and book your free trial"}</h2>
            <div class="contact-grid">
                <div class="contact-channels">
                    <p class="contact-intro">
                        {"Tell me about your team, goals, and timelines — I'll reply same day."}
                    </p>
                    <a class="contact-channel whatsapp" href={config::WHATSAPP_URL}>
                        <h4>{"WhatsApp me"}</h4>
                        <p>{"Quick chat or voice message"}</p>
                    </a>
                    <a class="contact-channel phone" href={config::PHONE_URL}>
                        <h4>{"Call me"}</h4>
                        <p>{config::PHONE_DISPLAY}</p>
                    </a>
                    <a class="contact-channel email" href={config::email_url()}>
                        <h4>{"Email me"}</h4>
                        <p>{config::EMAIL_ADDRESS}</p>
                    </a>
                </div>

                <div class="contact-card">
                    <h3>{copy.heading}</h3>
                    <form name={FORM_NAME} method="POST" data-netlify="true" {onsubmit}>
                        <input type="hidden" name="form-name" value={FORM_NAME} />
                        if props.trial_booking {
                            <input type="hidden" name="inquiry-type" value={TRIAL_INQUIRY_TYPE} />
                        }

                        <label for="name">{"Name *"}</label>
                        <input type="text" id="name" name="name" required={true}
                               value={props.draft.name.clone()}
                               oninput={input_for(FormField::Name)} />

                        <label for="email">{"Email *"}</label>
                        <input type="email" id="email" name="email" required={true}
                               value={props.draft.email.clone()}
                               oninput={input_for(FormField::Email)} />

                        <label for="company">{"Company"}</label>
                        <input type="text" id="company" name="company"
                               value={props.draft.company.clone()}
                               oninput={input_for(FormField::Company)} />

                        <label for="message">{copy.message_label}</label>
                        <textarea id="message" name="message" rows="4" required={true}
                                  placeholder={copy.message_placeholder}
                                  value={props.draft.message.clone()}
                                  oninput={on_message} />

                        <div class="consent">
                            <input type="checkbox" id="privacy" name="privacy" required={true}
                                   checked={props.draft.consent}
                                   onchange={on_consent} />
                            <label for="privacy">
                                {"I agree to the processing of my personal data for the purpose of handling this inquiry (RODO). *"}
                            </label>
                        </div>

                        <button type="submit" class="submit-button">{copy.submit_label}</button>
                    </form>

                    {
                        match props.status {
                            SubmissionStatus::Success => html! {
                                <div class="form-status success"><p>{copy.success}</p></div>
                            },
                            SubmissionStatus::Error => html! {
                                <div class="form-status error"><p>{ERROR_TEXT}</p></div>
                            },
                            SubmissionStatus::Idle => html! {},
                        }
                    }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trial_mode_relabels_the_form() {
        let copy = form_copy(true);
        assert_eq!(copy.heading, "Book Your Free 60-Minute Trial");
        assert_eq!(copy.submit_label, "Book My Free Trial");
        assert!(copy.success.contains("60-minute session"));
        assert!(!copy.message_placeholder.is_empty());
    }

    #[test]
    fn default_copy_is_a_plain_contact_form() {
        let copy = form_copy(false);
        assert_eq!(copy.heading, "Get in Touch");
        assert_eq!(copy.message_label, "Message *");
        assert_eq!(copy.submit_label, "Send Message");
        assert_eq!(
            copy.success,
            "Thank you! Your message has been sent successfully. I'll reply within 24 hours."
        );
    }
}
