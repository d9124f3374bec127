use leptos::prelude::*;

use crate::content::ShapeSpec;

/// Faint circle in the section background. Hidden on the smallest screens
/// and shrunk below `md` by the stylesheet.
#[component]
pub fn Shape(spec: ShapeSpec) -> impl IntoView {
    let style = format!(
        "--shape-size: {}px; background: {}; {} transform: rotate({}deg);",
        spec.size, spec.color, spec.position, spec.rotation
    );
    view! { <div class="shape" style=style aria-hidden="true"></div> }
}
