use leptos::prelude::*;

use super::BrandLogo;
use crate::content::{
    CONTACT_EMAIL, CONTACT_PHONE, FOOTER_BLURB, LEGAL_LINKS, SOCIAL_NETWORKS, copyright_line,
    footer_links,
};
use crate::viewport;

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = copyright_line(viewport::current_year());

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <BrandLogo class="brand-logo-footer" />
                        <p class="footer-blurb">{FOOTER_BLURB}</p>
                        <div class="footer-social">
                            {SOCIAL_NETWORKS
                                .into_iter()
                                .map(|network| {
                                    view! {
                                        <a href="#" class="social-link" aria-label=network>
                                            <i class=format!("fab fa-{network}")></i>
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>

                    <div class="footer-column">
                        <h6 class="footer-heading">"Company"</h6>
                        {footer_links()
                            .map(|item| {
                                view! {
                                    <a href=item.target.href() class="footer-link">{item.label}</a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <div class="footer-column">
                        <h6 class="footer-heading">"Contact"</h6>
                        <span class="footer-contact">
                            <i class="fas fa-envelope"></i>
                            {CONTACT_EMAIL}
                        </span>
                        <span class="footer-contact">
                            <i class="fas fa-phone"></i>
                            {CONTACT_PHONE}
                        </span>
                    </div>

                    <Newsletter />
                </div>

                <div class="footer-bottom">
                    <span class="footer-copyright">{copyright}</span>
                    <div class="footer-legal">
                        {LEGAL_LINKS
                            .into_iter()
                            .map(|label| view! { <a href="#" class="footer-link">{label}</a> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </footer>
    }
}

/// Signup box. Purely presentational: there is no list to subscribe to.
#[component]
fn Newsletter() -> impl IntoView {
    view! {
        <div class="footer-column footer-newsletter">
            <h6 class="footer-heading">"Newsletter"</h6>
            <p class="footer-blurb">"Get the latest updates and offers."</p>
            <div class="newsletter-box">
                <input type="email" placeholder="Email" aria-label="Newsletter email" />
                <button type="button" class="btn btn-secondary btn-sm" aria-label="Subscribe">
                    <i class="fas fa-paper-plane"></i>
                </button>
            </div>
        </div>
    }
}
