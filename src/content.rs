//! Page content - the single source of truth for every string on the page.
//!
//! Everything here is constant configuration, not runtime state. Components
//! consume these values directly; nothing is created or mutated while
//! rendering.

/// A single navigation entry: a display label and a destination.
///
/// Destinations are the placeholder `"#"` for now - navigation wiring is
/// deliberately deferred, the links are inert affordances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Display label, also the link's identity (labels are unique page-wide).
    pub label: &'static str,
    /// Destination href.
    pub href: &'static str,
}

impl NavLink {
    const fn new(label: &'static str) -> Self {
        Self { label, href: "#" }
    }
}

/// Brand mark rendered between the two link groups.
pub const BRAND: &str = "HENNETH";

/// Links rendered left of the brand, in display order.
pub const NAV_LEFT: [NavLink; 2] = [NavLink::new("Our Work"), NavLink::new("About Us")];

/// Links rendered right of the brand, in display order.
pub const NAV_RIGHT: [NavLink; 2] = [NavLink::new("Testimonials"), NavLink::new("Future Goals")];

/// Fixed copy for the hero panel.
#[derive(Clone, Copy, Debug)]
pub struct HeroContent {
    /// Main headline.
    pub heading: &'static str,
    /// Placeholder shown in the idea input.
    pub input_placeholder: &'static str,
    /// Label on the call-to-action button.
    pub button_label: &'static str,
    /// Muted caption under the call-to-action.
    pub caption: &'static str,
}

/// The hero copy. Immutable, no derived fields.
pub const HERO: HeroContent = HeroContent {
    heading: "Test Your Ideas Like Never Before",
    input_placeholder: "Write your Idea here",
    button_label: "Run The Test",
    caption: "Get the output over here!",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_labels_are_unique_page_wide() {
        // Labels double as link identity, so a duplicate would collide.
        let mut labels: Vec<&str> = NAV_LEFT
            .iter()
            .chain(NAV_RIGHT.iter())
            .map(|l| l.label)
            .collect();
        labels.sort_unstable();
        let before = labels.len();
        labels.dedup();
        assert_eq!(before, labels.len(), "duplicate nav label");
    }

    #[test]
    fn nav_links_are_placeholder_targets() {
        for link in NAV_LEFT.iter().chain(NAV_RIGHT.iter()) {
            assert_eq!(link.href, "#");
        }
    }
}
