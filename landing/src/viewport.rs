//! Browser-side glue: the real [`Viewport`], the scroll subscription and a
//! few small `window` helpers.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::nav::Viewport;

/// Scrolls the live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_into_view(&self, id: &str) -> bool {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Current vertical scroll offset, `0.0` when unavailable.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Feed window scroll offsets to `on_offset` for as long as the current
/// reactive owner lives.
///
/// `on_offset` is called once immediately with the current offset, so a
/// reload in the middle of the page starts with the right navbar.
pub fn subscribe_scroll(on_offset: impl Fn(f64) + 'static) {
    on_offset(scroll_offset());
    let handle = window_event_listener(ev::scroll, move |_| on_offset(scroll_offset()));
    on_cleanup(move || handle.remove());
}

/// `name` attribute of the element an event was dispatched on.
pub fn event_target_name(ev: &Event) -> Option<String> {
    ev.target()?
        .dyn_into::<Element>()
        .ok()?
        .get_attribute("name")
}

/// Fragment of the page URL including the leading `#`, empty when absent.
pub fn location_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Native `window.alert`. Failures (e.g. alerts blocked) are logged only.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        tracing::warn!(error = ?e, "window.alert failed");
    }
}

/// Calendar year according to the visitor's clock.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
