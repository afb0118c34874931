//! Smooth scrolling for in-page anchor links.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Smoothly scroll the element with the given id into view, aligned to the
/// top of the viewport. Unknown ids are ignored.
pub fn smooth_scroll_to(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(target) = document.get_element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    } else {
        log::warn!("smooth_scroll_to: no element with id '{}'", id);
    }
}
