//! Thaw `Card` that fades in, with an optional stagger delay.
//!
//! ```ignore
//! <CardAnimated delay_ms=0>...</CardAnimated>
//! <CardAnimated delay_ms=80>...</CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Animation is `@keyframes card-appear` in `styles.css`.
#[component]
pub fn CardAnimated(
    #[prop(optional)]
    delay_ms: u32,
    /// Appended after the animation style
    #[prop(optional, into)]
    style: String,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let full_style = format!("animation: card-appear 0.28s ease-out {delay_ms}ms both; {style}");

    view! {
        <Card class=class attr:style=full_style>
            {children()}
        </Card>
    }
}
