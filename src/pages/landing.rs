use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::AddEventListenerOptions;
use yew::prelude::*;

use crate::components::contact_form::ContactSection;
use crate::components::faq::FaqSection;
use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::config;
use crate::content::{
    CASE_NOTES, CLIENTS, HERO_BULLETS, PRICING, RESULTS, REVIEW_SOURCE, SERVICES, TESTIMONIALS,
};
use crate::inquiry::{encode_inquiry, submit_inquiry, FormField};
use crate::navigator;
use crate::state::{Section, ViewAction, ViewState};
use crate::status_timer::StatusTimer;

#[derive(Properties, PartialEq)]
struct NavigateProps {
    on_navigate: Callback<Section>,
}

#[function_component(Hero)]
fn hero(props: &NavigateProps) -> Html {
    html! {
        <section class="hero">
            <div class="hero-grid">
                <div class="hero-copy">
                    <h1>{"Business English that actually moves deals forward."}</h1>
                    <p class="hero-subtitle">
                        {"Native speaker from Chicago, many years in Poland. I train teams at engineering firms and tech startups to speak with confidence, present with impact, and communicate effectively in meetings and calls."}
                    </p>
                    <ul class="check-list">
                        { for HERO_BULLETS.iter().map(|bullet| html! { <li>{*bullet}</li> }) }
                    </ul>
                    <div class="hero-actions">
                        <button class="primary-button" onclick={props.on_navigate.reform(|_: MouseEvent| Section::Contact)}>
                            {"Book a free trial"}
                        </button>
                        <button class="outline-button" onclick={props.on_navigate.reform(|_: MouseEvent| Section::Pricing)}>
                            {"See pricing"}
                        </button>
                    </div>
                    <div class="trust-badge">{"Trusted by Polish tech & engineering teams"}</div>
                </div>
                <img class="hero-photo" src="/headshot.jpg" alt="David - Business English Tutor" width="320" height="320" />
            </div>
        </section>
    }
}

#[function_component(Clients)]
fn clients(props: &NavigateProps) -> Html {
    html! {
        <section id="clients" class="clients-strip">
            <div class="clients-card">
                <p class="clients-title">{"Companies I work with"}</p>
                <p class="clients-subtitle">{"Trusted by teams at:"}</p>
                <div class="clients-grid">
                    { for CLIENTS.iter().map(|name| html! {
                        <div class="client-tile" key={*name}>{*name}</div>
                    }) }
                </div>
                <button class="primary-button" onclick={props.on_navigate.reform(|_: MouseEvent| Section::Contact)}>
                    {"Work with me too"}
                </button>
            </div>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <section id="services" class="services-section">
            <h2>{"How I Help"}</h2>
            <div class="card-grid">
                { for SERVICES.iter().map(|service| html! {
                    <div class="service-card" key={service.title}>
                        <div class="service-header">
                            <h3>{service.title}</h3>
                            <div class="tags">
                                <span class="tag online">{"Online"}</span>
                                <span class="tag onsite">{"On-site (Wrocław)"}</span>
                            </div>
                        </div>
                        <p>{service.summary}</p>
                        <ul class="dot-list">
                            { for service.topics.iter().map(|topic| html! { <li>{*topic}</li> }) }
                        </ul>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Results)]
fn results() -> Html {
    html! {
        <section id="results" class="results-section">
            <h2>{"What changes after 4–8 weeks"}</h2>
            <ul class="check-list results-list">
                { for RESULTS.iter().map(|result| html! { <li>{*result}</li> }) }
            </ul>
            <div class="case-notes">
                { for CASE_NOTES.iter().map(|note| html! {
                    <div class="case-note" key={note.client}>
                        <h4>{note.client}</h4>
                        <p>{note.outcome}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section class="testimonials-section">
            <h2>{"What clients say"}</h2>
            <p class="section-subtitle">{format!("Reviews from {}", REVIEW_SOURCE)}</p>
            <div class="card-grid two">
                { for TESTIMONIALS.iter().map(|review| {
                    let stars = review.star_line();
                    html! {
                        <div class="testimonial" key={review.author}>
                            <div class="testimonial-header">
                                <h4>{review.author}</h4>
                                <p class="testimonial-date">{review.date}</p>
                            </div>
                            <div class="stars">{stars}</div>
                            <p class="quote">{format!("\"{}\"", review.quote)}</p>
                            <p class="review-source">{REVIEW_SOURCE}</p>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

#[function_component(Pricing)]
fn pricing(props: &NavigateProps) -> Html {
    html! {
        <section id="pricing" class="pricing-section">
            <h2>{"Simple & Transparent Pricing"}</h2>
            <div class="card-grid">
                { for PRICING.iter().map(|tier| html! {
                    <div class="price-card" key={tier.title}>
                        <h3>{tier.title}</h3>
                        <div class="price">{tier.price}</div>
                        <p>{tier.duration}</p>
                        <button class="primary-button" onclick={props.on_navigate.reform(|_: MouseEvent| Section::Contact)}>
                            {tier.cta_label()}
                        </button>
                    </div>
                }) }
            </div>
            <p class="pricing-note">{"Invoice / faktura available. Company packages on request."}</p>
        </section>
    }
}

#[function_component(CtaBanner)]
fn cta_banner(props: &NavigateProps) -> Html {
    html! {
        <section class="cta-banner">
            <h2>{"Try a 60-minute free session"}</h2>
            <p>{"We'll diagnose your use-cases and pick the fastest wins."}</p>
            <button class="light-button" onclick={props.on_navigate.reform(|_: MouseEvent| Section::Contact)}>
                {"Book free trial"}
            </button>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let state = use_reducer(ViewState::default);
    let attempts = use_mut_ref(|| 0u32);
    let reset_timer = use_mut_ref(StatusTimer::default);

    // Navbar style follows the scroll position
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    if let Ok(offset) = window.scroll_y() {
                        dispatcher.dispatch(ViewAction::Scrolled(offset));
                    }

                    let scroll_window = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        if let Ok(offset) = scroll_window.scroll_y() {
                            dispatcher.dispatch(ViewAction::Scrolled(offset));
                        }
                    }) as Box<dyn FnMut()>);

                    let options = AddEventListenerOptions::new();
                    options.set_passive(true);
                    if window
                        .add_event_listener_with_callback_and_add_event_listener_options(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                            &options,
                        )
                        .is_err()
                    {
                        warn!("Could not register scroll listener");
                    }
                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let on_navigate = {
        let dispatcher = state.dispatcher();
        Callback::from(move |section: Section| {
            if navigator::scroll_to_section(section.id()) {
                dispatcher.dispatch(ViewAction::Navigated(section));
            }
        })
    };

    let on_toggle_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(ViewAction::ToggleMenu))
    };

    let on_toggle_faq = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: &'static str| dispatcher.dispatch(ViewAction::ToggleFaq(id)))
    };

    let on_edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(field, value): (FormField, String)| {
            dispatcher.dispatch(ViewAction::EditField(field, value))
        })
    };

    let on_consent = {
        let dispatcher = state.dispatcher();
        Callback::from(move |consent: bool| dispatcher.dispatch(ViewAction::SetConsent(consent)))
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let attempt = {
                let mut counter = attempts.borrow_mut();
                *counter += 1;
                *counter
            };
            // A new attempt owns the banner; the old reset must not fire.
            reset_timer.borrow_mut().cancel();
            state.dispatch(ViewAction::SubmissionStarted { attempt });

            let body = encode_inquiry(&state.form, state.trial_booking);
            let dispatcher = state.dispatcher();
            let attempts = attempts.clone();
            let reset_timer = reset_timer.clone();
            spawn_local(async move {
                let delivered = match submit_inquiry(config::get_form_endpoint(), body).await {
                    Ok(()) => {
                        info!("Inquiry {} delivered", attempt);
                        true
                    }
                    Err(e) => {
                        warn!("Inquiry {} failed: {}", attempt, e);
                        false
                    }
                };
                dispatcher.dispatch(ViewAction::SubmissionFinished { attempt, delivered });

                if *attempts.borrow() == attempt {
                    let reset = dispatcher.clone();
                    reset_timer.borrow_mut().schedule(move || {
                        reset.dispatch(ViewAction::ResetStatus { attempt });
                    });
                }
            });
        })
    };

    html! {
        <div class="landing-page">
            <Nav
                scrolled={state.scrolled}
                menu_open={state.menu_open}
                {on_toggle_menu}
                on_navigate={on_navigate.clone()}
            />
            <Hero on_navigate={on_navigate.clone()} />
            <Clients on_navigate={on_navigate.clone()} />
            <Services />
            <Results />
            <Testimonials />
            <Pricing on_navigate={on_navigate.clone()} />
            <CtaBanner on_navigate={on_navigate.clone()} />
            <FaqSection open={state.faq_open.clone()} on_toggle={on_toggle_faq} />
            <ContactSection
                trial_booking={state.trial_booking}
                status={state.submission}
                draft={state.form.clone()}
                {on_edit}
                {on_consent}
                {on_submit}
            />
            <Footer {on_navigate} />
            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #fff;
                    color: #111;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .landing-page section {
                    padding: 5rem 1.5rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .landing-page h2 {
                    font-size: 2.25rem;
                    text-align: center;
                    margin-bottom: 2.5rem;
                }

                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: all 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
                }

                .nav-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                }

                .nav-logo {
                    font-size: 1.25rem;
                    font-weight: 700;
                }

                .nav-right {
                    display: flex;
                    gap: 2rem;
                    align-items: center;
                }

                .nav-link, .footer-link {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 1rem;
                }

                .nav-link:hover {
                    color: #1d4ed8;
                }

                .nav-cta, .primary-button, .submit-button {
                    background: #1d4ed8;
                    color: #fff;
                    border: none;
                    border-radius: 12px;
                    padding: 0.6rem 1.5rem;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                .nav-cta:hover, .primary-button:hover, .submit-button:hover {
                    background: #000;
                }

                .outline-button {
                    border: 2px solid #000;
                    background: transparent;
                    border-radius: 12px;
                    padding: 0.6rem 1.5rem;
                    cursor: pointer;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #111;
                }

                .mobile-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1rem 1.5rem;
                    border-top: 1px solid #e5e7eb;
                    background: #fff;
                }

                .hero {
                    padding-top: 7rem !important;
                }

                .hero-grid {
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    gap: 3rem;
                    align-items: center;
                }

                .hero h1 {
                    font-size: 3rem;
                    line-height: 1.15;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #6b7280;
                }

                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    margin: 2rem 0;
                }

                .hero-photo {
                    border-radius: 50%;
                    object-fit: cover;
                    justify-self: end;
                }

                .trust-badge {
                    display: inline-block;
                    background: #facc15;
                    border-radius: 999px;
                    padding: 0.4rem 1rem;
                    font-size: 0.875rem;
                }

                .check-list {
                    list-style: none;
                    padding: 0;
                }

                .check-list li::before {
                    content: '✓';
                    color: #1d4ed8;
                    margin-right: 0.75rem;
                }

                .clients-card, .service-card, .price-card, .case-note, .testimonial, .contact-card {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 16px;
                    padding: 2rem;
                }

                .clients-card {
                    text-align: center;
                    border-left: 4px solid #1d4ed8;
                }

                .clients-grid {
                    display: grid;
                    grid-template-columns: repeat(6, 1fr);
                    gap: 1.5rem;
                    margin: 2rem 0;
                }

                .client-tile {
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    padding: 1rem;
                    font-weight: 600;
                }

                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .card-grid.two, .case-notes {
                    grid-template-columns: repeat(2, 1fr);
                }

                .case-notes {
                    display: grid;
                    gap: 2rem;
                }

                .tag {
                    border-radius: 999px;
                    padding: 0.2rem 0.75rem;
                    font-size: 0.8rem;
                    margin-left: 0.5rem;
                }

                .tag.online {
                    background: #1d4ed8;
                    color: #fff;
                }

                .tag.onsite {
                    background: #facc15;
                }

                .stars {
                    color: #facc15;
                    letter-spacing: 2px;
                }

                .price-card {
                    text-align: center;
                }

                .price {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #1d4ed8;
                }

                .pricing-note, .section-subtitle {
                    text-align: center;
                    color: #6b7280;
                }

                .cta-banner {
                    max-width: none !important;
                    background: #1d4ed8;
                    color: #fff;
                    text-align: center;
                }

                .light-button {
                    background: #fff;
                    color: #1d4ed8;
                    border: none;
                    border-radius: 12px;
                    padding: 1rem 2rem;
                    font-size: 1.1rem;
                    cursor: pointer;
                }

                .faq-section {
                    max-width: 800px !important;
                }

                .faq-item {
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    margin-bottom: 1rem;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    padding: 1rem 1.5rem;
                    background: none;
                    border: none;
                    font-weight: 600;
                    cursor: pointer;
                }

                .toggle-icon {
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    padding: 0 1.5rem 1rem;
                    color: #6b7280;
                }

                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }

                .contact-channel {
                    display: block;
                    padding: 1rem;
                    margin-bottom: 1rem;
                    border-radius: 12px;
                    background: #f9fafb;
                    color: inherit;
                    text-decoration: none;
                }

                .contact-card form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .contact-card input[type="text"],
                .contact-card input[type="email"],
                .contact-card textarea {
                    padding: 0.75rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 12px;
                }

                .consent {
                    display: flex;
                    gap: 0.75rem;
                    font-size: 0.875rem;
                    color: #6b7280;
                }

                .form-status {
                    margin-top: 1rem;
                    padding: 1rem;
                    border-radius: 12px;
                }

                .form-status.success {
                    background: #f0fdf4;
                    border: 1px solid #bbf7d0;
                    color: #166534;
                }

                .form-status.error {
                    background: #fef2f2;
                    border: 1px solid #fecaca;
                    color: #991b1b;
                }

                .site-footer {
                    background: #000;
                    color: #fff;
                    padding: 3rem 1.5rem;
                }

                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .site-footer .footer-link {
                    display: block;
                    color: #9ca3af;
                    margin-bottom: 0.5rem;
                    padding: 0;
                    text-decoration: none;
                }

                .footer-bottom {
                    border-top: 1px solid #1f2937;
                    margin-top: 2rem;
                    padding-top: 2rem;
                    text-align: center;
                    color: #9ca3af;
                }

                @media (max-width: 768px) {
                    .nav-right {
                        display: none;
                    }

                    .burger-menu {
                        display: flex;
                    }

                    .hero-grid, .card-grid, .card-grid.two, .case-notes, .contact-grid, .footer-grid {
                        grid-template-columns: 1fr;
                    }

                    .clients-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .hero h1 {
                        font-size: 2.25rem;
                    }

                    .hero-photo {
                        justify-self: center;
                    }
                }
                "#}
            </style>
        </div>
    }
}
