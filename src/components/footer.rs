use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::state::Section;
use crate::Route;

const QUICK_LINKS: [Section; 4] = [
    Section::Services,
    Section::Pricing,
    Section::Faq,
    Section::Contact,
];

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3>{"Business English with David"}</h3>
                    <p>{"Native speaker from Chicago • Many years in Poland"}</p>
                </div>
                <div>
                    <h4>{"Quick Links"}</h4>
                    { for QUICK_LINKS.iter().map(|section| {
                        let section = *section;
                        html! {
                            <button class="footer-link" onclick={props.on_navigate.reform(move |_: MouseEvent| section)}>
                                {section.label()}
                            </button>
                        }
                    }) }
                </div>
                <div>
                    <h4>{"Legal"}</h4>
                    <Link<Route> to={Route::Privacy} classes="footer-link">
                        {"Privacy Policy"}
                    </Link<Route>>
                    <Link<Route> to={Route::Terms} classes="footer-link">
                        {"Terms"}
                    </Link<Route>>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} Business English with David • Wrocław", year)}</p>
            </div>
        </footer>
    }
}
