//! # saini-landing
//!
//! Single-page landing site for SAINI COLLECTION, rendered client-side with
//! [Leptos](https://leptos.dev/) 0.8.
//!
//! ## Architecture
//!
//! - [`nav`] - scroll/navigation state machine, browser-independent
//! - [`form`] - contact form state and the submission boundary
//! - [`viewport`] - web-sys implementation of the DOM side
//! - [`sections`] - Leptos components, one per page section
//! - [`content`], [`theme`], [`styles`] - static copy and styling
//! - [`config`], [`logging`] - `site.toml` and tracing setup
//!
//! `App` owns the only shared state: an `RwSignal<NavController>` provided
//! through context. The contact form keeps its own local signal.

pub mod config;
pub mod content;
pub mod form;
pub mod logging;
pub mod nav;
pub mod sections;
pub mod styles;
pub mod theme;
pub mod viewport;

use leptos::prelude::*;

use config::SiteConfig;
use nav::NavController;
use sections::*;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let nav = RwSignal::new(NavController::new(config.scroll));
    provide_context(nav);
    provide_context(config);

    viewport::subscribe_scroll(move |y| nav.maybe_update(|n| n.on_scroll(y)));
    Effect::new(move |_| follow_location_hash(nav));

    view! {
        <style>{styles::site_css()}</style>
        <Navbar />
        <main>
            <Hero />
            <About />
            <Services />
            <Testimonials />
            <Contact />
        </main>
        <Footer />
        <ScrollTop />
    }
}
