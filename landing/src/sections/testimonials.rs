use leptos::prelude::*;

use super::SectionHeading;
use crate::content::{TESTIMONIALS, TESTIMONIALS_SUBTITLE, Testimonial};

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <SectionHeading lead="Client" accent="Testimonials" subtitle=TESTIMONIALS_SUBTITLE />
                <div class="testimonials-grid">
                    {TESTIMONIALS.into_iter().map(|t| view! { <TestimonialCard t=t /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(t: Testimonial) -> impl IntoView {
    let label = format!("{} out of 5 stars", t.stars());
    view! {
        <article class="card testimonial-card">
            <div class="stars" aria-label=label>
                {(0..t.stars()).map(|_| view! { <i class="fas fa-star"></i> }).collect::<Vec<_>>()}
            </div>
            <blockquote>"\u{201c}"{t.content}"\u{201d}"</blockquote>
            <footer class="testimonial-author">
                <h6>{t.name}</h6>
                <span>{t.role}</span>
            </footer>
        </article>
    }
}
