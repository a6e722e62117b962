use log::debug;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scrolls to the element with `id`. Returns false, and does nothing
/// else, when the page has no such element.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        debug!("No element with id '{}' to scroll to", id);
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn missing_section_is_a_quiet_no_op() {
        assert!(!scroll_to_section("no-such-section"));
    }

    #[wasm_bindgen_test]
    fn existing_section_is_found() {
        let document = window().and_then(|w| w.document()).expect("browser document");
        let section = document.create_element("section").expect("create section");
        section.set_id("pricing");
        document.body().expect("body").append_child(&section).expect("append");

        assert!(scroll_to_section("pricing"));
        section.remove();
    }
}
