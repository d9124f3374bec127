// Landing page sections

mod about;
mod brand;
mod contact;
mod footer;
mod hero;
mod nav;
mod scroll_top;
mod services;
mod shape;
mod testimonials;

pub use about::About;
pub use brand::BrandLogo;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Navbar;
pub use scroll_top::ScrollTop;
pub use services::Services;
pub use shape::Shape;
pub use testimonials::Testimonials;

use leptos::prelude::*;

use crate::nav::{NavController, SectionId};
use crate::viewport::{self, BrowserViewport};

/// Shared navigation state, provided by `App`.
pub fn use_nav() -> RwSignal<NavController> {
    expect_context::<RwSignal<NavController>>()
}

/// Smooth-scroll to `section` and close the drawer. A missing anchor only
/// produces a warning.
pub fn navigate_to(nav: RwSignal<NavController>, section: SectionId) {
    let mut outcome = Ok(());
    nav.maybe_update(|n| {
        outcome = n.scroll_to_section(&BrowserViewport, section.as_str());
        outcome.is_ok()
    });
    if let Err(e) = outcome {
        tracing::warn!(error = %e, "navigation target missing");
    }
}

/// Scroll to the section named in the URL fragment, so links like
/// `/#contact` land on the right section once the page has rendered.
pub fn follow_location_hash(nav: RwSignal<NavController>) {
    match SectionId::from_hash(&viewport::location_hash()) {
        Ok(Some(section)) => navigate_to(nav, section),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "ignoring location hash"),
    }
}

/// Two-tone section heading: `{lead} <accent>`.
#[component]
pub fn SectionHeading(
    lead: &'static str,
    accent: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-title">
                {lead}" "<span class="accent">{accent}</span>
            </h2>
            {subtitle.map(|s| view! { <p class="section-subtitle">{s}</p> })}
        </div>
    }
}
