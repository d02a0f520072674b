//! Decorative background beams.
//!
//! A full-panel SVG layer stroking a fixed set of curved paths. Geometry is
//! derived from the beam index alone, so rendering is deterministic - the
//! same markup every time, no randomness. Motion comes from CSS
//! stroke-dash keyframes with an index-derived delay per beam.

use leptos::prelude::*;

/// Number of beam paths in the layer.
const BEAM_COUNT: usize = 12;

/// Stagger between consecutive beams, in milliseconds.
const BEAM_DELAY_STEP_MS: u32 = 700;

/// Full-panel decorative layer, mounted behind the hero's content column.
///
/// No props, no data contract: consumers only rely on "renders behind the
/// foreground". Pointer events pass through it.
#[component]
pub fn BackgroundBeams() -> impl IntoView {
    view! {
        <div class="beams" aria-hidden="true">
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 696 316" fill="none">
                {(0..BEAM_COUNT)
                    .map(|i| {
                        let class = if i % 2 == 0 {
                            "beam beam-indigo"
                        } else {
                            "beam beam-cyan"
                        };
                        let delay = format!(
                            "animation-delay:{}ms",
                            i as u32 * BEAM_DELAY_STEP_MS
                        );
                        view! {
                            <path class=class d=beam_path(i) style=delay></path>
                        }
                    })
                    .collect_view()}
            </svg>
        </div>
    }
}

/// Path data for one beam: a cubic curve sweeping across the panel,
/// translated by a constant per-index offset.
fn beam_path(i: usize) -> String {
    let o = i as i32 * 24;
    format!(
        "M{} {}C{} {} {} {} {} {}",
        -300 + o,
        -140 + o / 2,
        -180 + o,
        60 + o / 3,
        280 + o,
        120 + o / 4,
        760 + o,
        420 + o / 2,
    )
}
