//! Hero panel: headline, idea input, call-to-action, caption, beams layer.

use leptos::prelude::*;

use super::BackgroundBeams;
use crate::content::HERO;

/// The above-the-fold panel.
///
/// Content is a centered bounded-width column stacked above the beams
/// layer. The input and button are static affordances - no value state, no
/// handlers; submission wiring is deliberately absent.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-content">
                <h1 class="hero-title">{HERO.heading}</h1>
                <input class="hero-input" type="text" placeholder=HERO.input_placeholder />
                <CtaButton label=HERO.button_label />
                <p class="hero-caption">{HERO.caption}</p>
            </div>
            <BackgroundBeams />
        </section>
    }
}

/// Full-width pill button with a rotating conic-gradient border and a
/// static inner label. The spin is pure CSS, see `cta-spin` in the
/// stylesheet.
#[component]
fn CtaButton(label: &'static str) -> impl IntoView {
    view! {
        <button class="hero-cta">
            <span class="hero-cta-spin"></span>
            <span class="hero-cta-label">{label}</span>
        </button>
    }
}
