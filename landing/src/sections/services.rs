use leptos::prelude::*;

use super::{SectionHeading, Shape};
use crate::content::{SERVICES, SERVICES_SHAPES, SERVICES_SUBTITLE, Service};

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services">
            {SERVICES_SHAPES.into_iter().map(|spec| view! { <Shape spec=spec /> }).collect::<Vec<_>>()}
            <div class="container container-wide">
                <SectionHeading lead="Our" accent="IT Services" subtitle=SERVICES_SUBTITLE />
                <div class="services-grid">
                    {SERVICES.into_iter().map(|service| view! { <ServiceCard service=service /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    view! {
        <article class="card service-card">
            <div class="icon-badge icon-badge-lg">
                <i class=service.icon></i>
            </div>
            <h4>{service.title}</h4>
            <p>{service.description}</p>
            <div class="chips">
                {service
                    .features
                    .iter()
                    .map(|feature| view! { <span class="chip chip-outline">{*feature}</span> })
                    .collect::<Vec<_>>()}
            </div>
        </article>
    }
}
