use gloo_net::http::Request;
use thiserror::Error;

use crate::config::{FORM_NAME, TRIAL_INQUIRY_TYPE};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Text inputs of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Company,
    Message,
}

/// What the visitor has typed so far. Name, email, message and consent are
/// required; the browser enforces that before the submit event fires.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub consent: bool,
}

impl ContactDraft {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Company => self.company = value,
            FormField::Message => self.message = value,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not reach the form endpoint: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("form endpoint answered with status {status}")]
    Rejected { status: u16 },
}

/// Builds the url-encoded body in the same field order as the rendered form,
/// including the hidden fields the form capture keys on.
pub fn encode_inquiry(draft: &ContactDraft, trial_booking: bool) -> String {
    let mut pairs: Vec<(&str, &str)> = vec![("form-name", FORM_NAME)];
    if trial_booking {
        pairs.push(("inquiry-type", TRIAL_INQUIRY_TYPE));
    }
    pairs.extend([
        ("name", draft.name.as_str()),
        ("email", draft.email.as_str()),
        ("company", draft.company.as_str()),
        ("message", draft.message.as_str()),
    ]);
    // Unticked checkboxes are left out of form data entirely.
    if draft.consent {
        pairs.push(("privacy", "on"));
    }

    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn classify_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected { status })
    }
}

pub async fn submit_inquiry(endpoint: &str, body: String) -> Result<(), SubmitError> {
    let response = Request::post(endpoint)
        .header("Content-Type", FORM_CONTENT_TYPE)
        .body(body)
        .send()
        .await?;
    classify_status(response.status())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> ContactDraft {
        ContactDraft {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            company: String::new(),
            message: "Hi".to_string(),
            consent: true,
        }
    }

    #[test]
    fn plain_contact_payload() {
        assert_eq!(
            encode_inquiry(&ana(), false),
            "form-name=contact&name=Ana&email=ana%40x.com&company=&message=Hi&privacy=on"
        );
    }

    #[test]
    fn trial_booking_adds_inquiry_type_after_form_name() {
        let body = encode_inquiry(&ana(), true);
        assert!(body.starts_with("form-name=contact&inquiry-type=Free%20Trial%20Booking&name=Ana"));
        assert!(!encode_inquiry(&ana(), false).contains("inquiry-type"));
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let draft = ContactDraft {
            name: "Zofia Nowak".to_string(),
            company: "ATL Polska & Co".to_string(),
            message: "rate=180 zł?\nthanks".to_string(),
            ..ana()
        };
        let body = encode_inquiry(&draft, false);
        assert!(body.contains("name=Zofia%20Nowak"));
        assert!(body.contains("company=ATL%20Polska%20%26%20Co"));
        assert!(body.contains("message=rate%3D180%20z%C5%82%3F%0Athanks"));
        assert_eq!(body.matches('&').count(), 5);
    }

    #[test]
    fn missing_consent_is_omitted() {
        let draft = ContactDraft { consent: false, ..ana() };
        assert!(!encode_inquiry(&draft, false).contains("privacy"));
    }

    #[test]
    fn only_2xx_counts_as_delivered() {
        assert!(classify_status(200).is_ok());
        assert!(classify_status(204).is_ok());
        assert!(classify_status(299).is_ok());
        for status in [199, 301, 404, 422, 500, 503] {
            match classify_status(status) {
                Err(SubmitError::Rejected { status: s }) => assert_eq!(s, status),
                other => panic!("status {status} gave {other:?}"),
            }
        }
    }

    #[test]
    fn setters_touch_only_their_field() {
        let mut draft = ContactDraft::default();
        draft.set(FormField::Company, "BigTime".to_string());
        draft.set(FormField::Email, "kasia@bigtime.pl".to_string());
        assert_eq!(draft.company, "BigTime");
        assert_eq!(draft.email, "kasia@bigtime.pl");
        assert!(draft.name.is_empty());
        assert!(draft.message.is_empty());
    }
}
