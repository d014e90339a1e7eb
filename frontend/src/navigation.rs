use log::info;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

pub const STORY: &str = "story";
pub const STORY_START: &str = "story-start";
pub const STORY_CTA: &str = "story-cta";
pub const CONTACT: &str = "contact";

/// Smooth-scrolls to the element with `id`. Does nothing when the page has no
/// such element.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        info!("No section #{} to scroll to", id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
