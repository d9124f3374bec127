use leptos::prelude::*;

use super::{Shape, navigate_to, use_nav};
use crate::content::{
    HERO_CHIP, HERO_HIGHLIGHTS, HERO_IMAGE_ALT, HERO_IMAGE_URL, HERO_SHAPES, HERO_SUBTITLE,
};
use crate::nav::SectionId;

#[component]
pub fn Hero() -> impl IntoView {
    let nav = use_nav();

    view! {
        <section id="home" class="hero">
            {HERO_SHAPES.into_iter().map(|spec| view! { <Shape spec=spec /> }).collect::<Vec<_>>()}
            <div class="container hero-grid">
                <div class="hero-content">
                    <span class="chip chip-glow">{HERO_CHIP}</span>
                    <h1 class="hero-title">
                        "We Build "
                        <span class="accent">"Websites & Digital Tools"</span>
                        " That Grow Your Business"
                    </h1>
                    <p class="hero-subtitle">{HERO_SUBTITLE}</p>
                    <div class="hero-actions">
                        <button
                            class="btn btn-secondary btn-lg"
                            on:click=move |_| navigate_to(nav, SectionId::Services)
                        >
                            "Our Services"
                        </button>
                        <button
                            class="btn btn-outline btn-lg"
                            on:click=move |_| navigate_to(nav, SectionId::Contact)
                        >
                            "Contact For Join Us"
                        </button>
                    </div>
                </div>
                <HeroCard />
            </div>
        </section>
    }
}

/// Image card with the "Why Choose Us?" overlay. Desktop only.
#[component]
fn HeroCard() -> impl IntoView {
    view! {
        <div class="hero-card">
            <img class="hero-image" src=HERO_IMAGE_URL alt=HERO_IMAGE_ALT loading="lazy" />
            <div class="hero-card-overlay">
                <h4 class="hero-card-title">
                    <i class="fas fa-star"></i>
                    "Why Choose Us?"
                </h4>
                <ul class="check-list">
                    {HERO_HIGHLIGHTS
                        .into_iter()
                        .map(|line| {
                            view! {
                                <li>
                                    <i class="fas fa-check-circle"></i>
                                    <span>{line}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </div>
    }
}
