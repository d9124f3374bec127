use leptos::prelude::*;

use super::{SectionHeading, navigate_to, use_nav};
use crate::content::{
    ABOUT_JOURNEY, ABOUT_MISSION, ABOUT_STATS, ABOUT_SUBTITLE, COMPANY, Highlight, WHY_CHOOSE,
};
use crate::nav::SectionId;

#[component]
pub fn About() -> impl IntoView {
    let nav = use_nav();

    view! {
        <section id="about" class="about">
            <div class="container">
                <SectionHeading lead="About" accent=COMPANY subtitle=ABOUT_SUBTITLE />

                <div class="about-grid">
                    <article class="card">
                        <h4>"Our Journey"</h4>
                        <p>{ABOUT_JOURNEY}</p>
                        <div class="mission">
                            <h5>"Our Mission"</h5>
                            <p>{ABOUT_MISSION}</p>
                        </div>
                    </article>

                    <article class="card">
                        <div class="stat-grid">
                            {ABOUT_STATS.into_iter().map(|h| view! { <Stat h=h /> }).collect::<Vec<_>>()}
                        </div>
                    </article>
                </div>

                <div class="why-choose">
                    <h3>"Why Choose " {COMPANY} "?"</h3>
                    <div class="why-choose-row">
                        {WHY_CHOOSE
                            .into_iter()
                            .map(|h| {
                                view! {
                                    <article class="card why-card">
                                        <div class="icon-badge">
                                            <i class=h.icon></i>
                                        </div>
                                        <h5>{h.title}</h5>
                                        <p>{h.description}</p>
                                    </article>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <button
                        class="btn btn-secondary btn-lg"
                        on:click=move |_| navigate_to(nav, SectionId::Services)
                    >
                        "Explore And Join Our Services"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Stat(h: Highlight) -> impl IntoView {
    view! {
        <div class="stat">
            <i class=format!("{} stat-icon", h.icon)></i>
            <div>
                <h5>{h.title}</h5>
                <p>{h.description}</p>
            </div>
        </div>
    }
}
