//! CardAnimated: Thaw Card wrapper with an appear animation.
//!
//! Drop-in replacement for `<Card attr:style="...">`; the animation is
//! defined in `site.css` (`@keyframes card-appear`).
//!
//! # Example
//! ```rust,ignore
//! // Staggered cards in a grid
//! <CardAnimated delay_ms=0>   // card 1
//! <CardAnimated delay_ms=80>  // card 2
//! <CardAnimated delay_ms=160> // card 3
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Thaw [`Card`] with the `card-appear` animation from `site.css`.
///
/// # Props
/// - `delay_ms`: animation delay in ms (default `0`), for stagger effects.
/// - `style`:    extra inline styles appended after the animation.
/// - `children`: card content, as with a plain `Card`.
#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds (for stagger effects).
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles (appended after the animation styles).
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    };

    view! {
        <Card attr:style=full_style>
            {children()}
        </Card>
    }
}
