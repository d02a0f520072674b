//! Leptos UI components for the landing page.
//!
//! Each component is a Leptos `#[component]` function producing static
//! markup from the constants in [`crate::content`]. Composition is strictly
//! parent-to-child; no component holds state or calls back into a parent.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── Navbar
//! │   ├── NavLinks (left group)
//! │   ├── brand heading
//! │   └── NavLinks (right group)
//! └── Hero
//!     ├── heading / input / CtaButton / caption
//!     └── BackgroundBeams (decorative layer behind the column)
//! ```
//!
//! Components are typically used via [`crate::render_page`], but can be
//! composed directly for custom layouts.

mod beams;
mod document;
mod hero;
mod nav;

pub use beams::BackgroundBeams;
pub use document::PageDocument;
pub use hero::Hero;
pub use nav::Navbar;
