use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

const LEGAL_STYLE: &str = r#"
.legal-content {
    min-height: 100vh;
    background: #f9fafb;
    padding: 4rem 1.5rem;
    color: #111;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}

.legal-content > div {
    background: #fff;
    border: 1px solid #e5e7eb;
    border-radius: 16px;
    padding: 3rem;
    max-width: 800px;
    margin: 0 auto;
}

.legal-content h1 {
    font-size: 2rem;
    margin-bottom: 2rem;
}

.legal-content h2 {
    color: #1d4ed8;
    font-size: 1.25rem;
    margin: 2rem 0 1rem;
}

.legal-content p, .legal-content li {
    color: #4b5563;
    line-height: 1.6;
}

.legal-links {
    margin-top: 2rem;
    text-align: center;
}

.legal-links a {
    color: #1d4ed8;
    text-decoration: none;
}
"#;

fn back_home() -> Html {
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Home}>{"← Back to the main page"}</Link<Route>>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content">
            <div>
                <h1>{"Privacy Policy"}</h1>

                <h2>{"Who handles your data"}</h2>
                <p>
                    {"Business English with David, Wrocław, is the controller of the personal data you send through the contact form. Questions about your data can be sent to "}
                    <a href={config::email_url()}>{config::EMAIL_ADDRESS}</a>
                    {"."}
                </p>

                <h2>{"What is collected"}</h2>
                <ul>
                    <li>{"Your name and email address"}</li>
                    <li>{"Your company name, if you give one"}</li>
                    <li>{"The message you write and whether you asked for a free trial"}</li>
                </ul>

                <h2>{"Why"}</h2>
                <p>{"Only to answer your inquiry and, if you asked for one, to schedule your free trial session. The legal basis is your consent (art. 6(1)(a) RODO/GDPR), which you can withdraw at any time by email."}</p>

                <h2>{"How long"}</h2>
                <p>{"Inquiries are kept while we are in contact and deleted when they are no longer needed to answer you. Form submissions are stored by the site's hosting provider on my behalf."}</p>

                <h2>{"Your rights"}</h2>
                <p>{"You can ask for access to, correction of, or deletion of your data, restrict or object to its processing, and lodge a complaint with the President of the Personal Data Protection Office (UODO)."}</p>

                { back_home() }
            </div>
            <style>{LEGAL_STYLE}</style>
        </div>
    }
}

/// Each line repeats something the main page already says.
const TERMS: [(&str, &str); 4] = [
    (
        "Lessons and workshops",
        "Lessons are held on-site in Wrocław or online. The first 60-minute trial session is free.",
    ),
    (
        "Cancellations",
        "Please cancel at least 24 hours before a session.",
    ),
    (
        "Prices",
        "Prices are listed on the main page. Workshops are quoted individually.",
    ),
    (
        "Confidentiality",
        "NDAs can be signed.",
    ),
];

#[function_component(Terms)]
pub fn terms() -> Html {
    html! {
        <div class="legal-content">
            <div>
                <h1>{"Terms"}</h1>

                { for TERMS.iter().map(|(heading, text)| html! {
                    <>
                        <h2>{*heading}</h2>
                        <p>{*text}</p>
                    </>
                }) }
                <p>
                    {"Questions about these terms: "}
                    <a href={config::email_url()}>{config::EMAIL_ADDRESS}</a>
                </p>

                { back_home() }
            </div>
            <style>{LEGAL_STYLE}</style>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="legal-content">
            <div>
                <h1>{"Page not found"}</h1>
                <p>{"This page does not exist."}</p>
                { back_home() }
            </div>
            <style>{LEGAL_STYLE}</style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FAQ;

    fn terms_text(heading: &str) -> &'static str {
        TERMS
            .iter()
            .find(|(h, _)| *h == heading)
            .map(|(_, text)| *text)
            .unwrap_or_default()
    }

    #[test]
    fn cancellation_terms_match_the_faq() {
        let faq = FAQ.iter().find(|e| e.question == "Cancellation policy?").unwrap();
        assert_eq!(faq.answer, "24 hours.");
        assert!(terms_text("Cancellations").contains("24 hours"));
        assert!(!terms_text("Cancellations").contains("charged"));
    }

    #[test]
    fn trial_terms_offer_a_free_hour() {
        assert!(terms_text("Lessons and workshops").contains("60-minute trial session is free"));
    }
}
