use yew::prelude::*;

use crate::content::SITE_TITLE;
use crate::state::Section;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub scrolled: bool,
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_navigate: Callback<Section>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { scrolled, menu_open, on_toggle_menu, on_navigate } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let links = |extra_class: &'static str| -> Html {
        html! {
            <>
                { for Section::MENU.iter().map(|section| {
                    let section = *section;
                    html! {
                        <button class={classes!("nav-link", extra_class)}
                                onclick={on_navigate.reform(move |_: MouseEvent| section)}>
                            {section.label()}
                        </button>
                    }
                }) }
                <button class={classes!("nav-cta", extra_class)}
                        onclick={on_navigate.reform(|_: MouseEvent| Section::Contact)}>
                    {"Book free trial"}
                </button>
            </>
        }
    };

    html! {
        <nav class={classes!("top-nav", (*scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo">{SITE_TITLE}</div>

                <div class="nav-right">
                    { links("") }
                </div>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    { links("mobile") }
                </div>
            }
        </nav>
    }
}
