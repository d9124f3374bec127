use leptos::prelude::*;

use super::{BrandLogo, navigate_to, use_nav};
use crate::content::NAV_ITEMS;
use crate::nav::SectionId;

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = use_nav();
    let solid = move || nav.with(|n| n.is_scrolled_past_threshold());
    let drawer_open = move || nav.with(|n| n.is_mobile_menu_open());
    let toggle = move |_| nav.update(|n| n.toggle_mobile_menu());

    view! {
        <header class=move || if solid() { "navbar navbar-solid" } else { "navbar" }>
            <div class="container navbar-inner">
                <a
                    href="#home"
                    class="navbar-brand"
                    on:click=move |ev| {
                        ev.prevent_default();
                        navigate_to(nav, SectionId::Home);
                    }
                >
                    <BrandLogo />
                </a>

                <nav class="navbar-links">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|item| {
                            view! {
                                <button
                                    class="navbar-link"
                                    on:click=move |_| navigate_to(nav, item.target)
                                >
                                    {item.label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <div class="navbar-cta">
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| navigate_to(nav, SectionId::Contact)
                    >
                        "Join For Services"
                    </button>
                </div>

                <button
                    class="navbar-toggle"
                    aria-label="open drawer"
                    aria-expanded=move || drawer_open().to_string()
                    on:click=toggle
                >
                    <i class="fas fa-bars"></i>
                </button>
            </div>
        </header>

        <Show when=drawer_open>
            <MobileDrawer />
        </Show>
    }
}

/// Right-hand overlay that replaces the inline links below `md`.
#[component]
fn MobileDrawer() -> impl IntoView {
    let nav = use_nav();
    let close = move |_| nav.update(|n| n.close_mobile_menu());

    view! {
        <div class="drawer-backdrop" on:click=close></div>
        <aside class="drawer" role="dialog" aria-label="Site navigation">
            <div class="drawer-header">
                <button class="drawer-close" aria-label="close drawer" on:click=close>
                    <i class="fas fa-times"></i>
                </button>
            </div>
            <ul class="drawer-list">
                {NAV_ITEMS
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li>
                                <button
                                    class="drawer-item"
                                    on:click=move |_| navigate_to(nav, item.target)
                                >
                                    <i class="fas fa-chevron-right"></i>
                                    <span>{item.label}</span>
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </aside>
    }
}
