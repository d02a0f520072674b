//! # henneth-landing
//!
//! Leptos SSR renderer for the HENNETH landing page.
//!
//! The page is assembled from independent, stateless components - a
//! navigation bar and a hero panel with a decorative animated background -
//! and rendered server-side to one self-contained HTML file. There is no
//! reactive runtime and no hydration: pure static HTML generation.
//!
//! ## Quick Start
//!
//! ```rust
//! use henneth_landing::render_page;
//!
//! let html = render_page();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//!
//! // Write to file
//! std::fs::write("index.html", html).unwrap();
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - constant page copy and link configuration
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering uses Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <PageDocument /> };
//! let html: String = view.to_html();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod styles;

use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render the complete landing page to an HTML string.
///
/// This is the main entry point. The returned document includes the
/// `<!DOCTYPE html>` prefix and the full inline stylesheet, so it can be
/// written straight to disk and opened in a browser.
pub fn render_page() -> String {
    let doc = view! { <PageDocument /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use components::{Hero, Navbar};
    use content::{BRAND, HERO, NAV_LEFT, NAV_RIGHT};
    use pretty_assertions::assert_eq;
    use styles::PAGE_CSS;

    fn navbar_html() -> String {
        view! { <Navbar /> }.to_html()
    }

    fn hero_html() -> String {
        view! { <Hero /> }.to_html()
    }

    #[test]
    fn renders_complete_document() {
        let html = render_page();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<style>"));
        assert!(html.contains(BRAND));
    }

    #[test]
    fn navbar_renders_four_links_and_one_brand_heading() {
        let html = navbar_html();

        assert_eq!(html.matches("<a ").count(), 4);
        assert_eq!(html.matches(BRAND).count(), 1);
        for link in NAV_LEFT.iter().chain(NAV_RIGHT.iter()) {
            assert_eq!(html.matches(link.label).count(), 1, "{}", link.label);
        }
    }

    #[test]
    fn navbar_orders_left_group_brand_right_group() {
        let html = navbar_html();
        let pos = |s: &str| html.find(s).unwrap_or_else(|| panic!("missing {s}"));

        assert!(pos("Our Work") < pos("About Us"));
        assert!(pos("About Us") < pos(BRAND));
        assert!(pos(BRAND) < pos("Testimonials"));
        assert!(pos("Testimonials") < pos("Future Goals"));
    }

    #[test]
    fn navbar_links_point_at_placeholder_targets() {
        let html = navbar_html();

        assert_eq!(html.matches("href=\"#\"").count(), 4);
    }

    #[test]
    fn nav_row_is_hidden_below_the_breakpoint() {
        // The responsive policy lives in the stylesheet; the markup must
        // carry the class the rules target.
        assert!(navbar_html().contains("class=\"nav-row\""));
        assert!(PAGE_CSS.contains(".nav-row{display:none;}"));
        assert!(PAGE_CSS.contains("@media (min-width:768px){.nav-row{display:flex"));
    }

    #[test]
    fn hero_renders_heading_input_button_and_caption() {
        let html = hero_html();

        assert_eq!(html.matches("<input").count(), 1);
        assert_eq!(html.matches(HERO.heading).count(), 1);
        assert_eq!(
            html.matches(&format!("placeholder=\"{}\"", HERO.input_placeholder))
                .count(),
            1
        );
        assert_eq!(html.matches("<button").count(), 1);
        assert_eq!(html.matches(HERO.button_label).count(), 1);
        assert_eq!(html.matches(HERO.caption).count(), 1);
    }

    #[test]
    fn hero_text_column_precedes_the_beams_layer() {
        let html = hero_html();
        let content = html.find("hero-content").expect("missing content column");
        let beams = html.find("class=\"beams\"").expect("missing beams layer");

        assert!(content < beams);
    }

    #[test]
    fn hero_mounts_exactly_one_beams_layer() {
        assert_eq!(hero_html().matches("class=\"beams\"").count(), 1);
    }

    #[test]
    fn rendering_is_idempotent() {
        assert_eq!(render_page(), render_page());
        assert_eq!(navbar_html(), navbar_html());
        assert_eq!(hero_html(), hero_html());
    }
}
