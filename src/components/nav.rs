//! Navigation bar: a centered brand mark flanked by two link groups.

use leptos::prelude::*;

use crate::content::{BRAND, NAV_LEFT, NAV_RIGHT, NavLink};

/// Horizontal navigation bar.
///
/// Renders three zones in document order: left link group, brand heading,
/// right link group. The whole row is hidden below the 768px breakpoint by
/// the stylesheet; there is no alternate narrow-viewport menu.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav-row">
                <NavLinks links=&NAV_LEFT />
                <h2 class="nav-brand">{BRAND}</h2>
                <NavLinks links=&NAV_RIGHT />
            </div>
        </nav>
    }
}

/// One ordered group of inert links. Display order is slice order; labels
/// are the links' identity and must be unique page-wide.
#[component]
fn NavLinks(links: &'static [NavLink]) -> impl IntoView {
    view! {
        <ul class="nav-group">
            {links
                .iter()
                .map(|link| {
                    view! {
                        <li>
                            <a class="nav-link" href=link.href>{link.label}</a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
