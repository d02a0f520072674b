//! Root document component - the complete HTML page.

use leptos::prelude::*;

use super::{Hero, Navbar};
use crate::styles::PAGE_CSS;

/// The complete HTML document: head with the inline stylesheet, then the
/// navigation bar and the hero panel in sequence.
#[component]
pub fn PageDocument() -> impl IntoView {
    view! {
        <html>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"HENNETH"</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <Navbar />
                <main>
                    <Hero />
                </main>
            </body>
        </html>
    }
}
