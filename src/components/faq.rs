use std::collections::BTreeSet;

use yew::prelude::*;

use crate::content::{FaqEntry, FAQ};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: &'static FaqEntry,
    is_open: bool,
    on_toggle: Callback<&'static str>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let id = props.entry.id;
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(id);
        })
    };

    html! {
        <div id={props.entry.id} class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" aria-expanded={props.is_open.to_string()} onclick={toggle}>
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">{"⌄"}</span>
            </button>
            if props.is_open {
                <div class="faq-answer">
                    <p>{props.entry.answer}</p>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqSectionProps {
    pub open: BTreeSet<&'static str>,
    pub on_toggle: Callback<&'static str>,
}

#[function_component(FaqSection)]
pub fn faq_section(props: &FaqSectionProps) -> Html {
    html! {
        <section id="faq" class="faq-section">
            <h2>{"Frequently Asked Questions"}</h2>
            <div class="faq-list">
                { for FAQ.iter().map(|entry| html! {
                    <FaqItem
                        key={entry.id}
                        {entry}
                        is_open={props.open.contains(entry.id)}
                        on_toggle={props.on_toggle.clone()}
                    />
                }) }
            </div>
        </section>
    }
}
