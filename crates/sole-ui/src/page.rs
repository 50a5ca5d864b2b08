//! Server-side rendering of a full catalog page.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use sole_commerce::{CardConfig, ShoeListing};

use crate::grid::ShoeGrid;
use crate::style::CARD_CSS;

/// Standalone HTML document listing every shoe in a grid.
#[component]
pub fn ShoeIndexPage(
    title: String,
    listings: Vec<ShoeListing>,
    #[prop(optional)] now: Option<DateTime<Utc>>,
) -> impl IntoView {
    let now = now.unwrap_or_else(Utc::now);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title.clone()}</title>
                <style>{CARD_CSS}</style>
            </head>
            <body>
                <main>
                    <h2>{title}</h2>
                    <ShoeGrid listings=listings now=now/>
                </main>
            </body>
        </html>
    }
}

/// Render a catalog page to an HTML string.
///
/// `config` is provided as context to every card on the page.
pub fn render_catalog_page(
    title: impl Into<String>,
    listings: Vec<ShoeListing>,
    config: CardConfig,
    now: DateTime<Utc>,
) -> String {
    let title = title.into();
    let count = listings.len();
    let owner = Owner::new();
    let html = owner.with(|| {
        provide_context(config);
        view! { <ShoeIndexPage title=title listings=listings now=now/> }.to_html()
    });
    tracing::debug!(count, bytes = html.len(), "rendered catalog page");
    html
}
