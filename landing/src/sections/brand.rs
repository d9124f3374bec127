use leptos::prelude::*;

use crate::content::{BRAND_NAME, BRAND_TAGLINE};

#[component]
pub fn BrandLogo(#[prop(default = "")] class: &'static str) -> impl IntoView {
    view! {
        <div class=format!("brand-logo {class}")>
            <span class="brand-name">{BRAND_NAME}</span>
            <span class="brand-tagline">{BRAND_TAGLINE}</span>
        </div>
    }
}
