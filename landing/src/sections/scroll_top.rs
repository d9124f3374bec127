use leptos::prelude::*;

use super::use_nav;
use crate::viewport::BrowserViewport;

/// Floating button that slides in once the page is scrolled far enough.
#[component]
pub fn ScrollTop() -> impl IntoView {
    let nav = use_nav();
    let visible = move || nav.with(|n| n.show_scroll_top());

    view! {
        <button
            class=move || if visible() { "scroll-top visible" } else { "scroll-top" }
            aria-label="Scroll to top"
            aria-hidden=move || (!visible()).to_string()
            tabindex=move || if visible() { "0" } else { "-1" }
            on:click=move |_| nav.with_untracked(|n| n.scroll_to_top(&BrowserViewport))
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
