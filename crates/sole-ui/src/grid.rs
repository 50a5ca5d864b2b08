//! Grid of shoe cards.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use sole_commerce::ShoeListing;

use crate::card::ShoeCard;

/// Wrapping grid of [`ShoeCard`]s, in listing order.
///
/// Every card is measured against the same instant so a grid rendered
/// across a window boundary stays consistent.
#[component]
pub fn ShoeGrid(
    listings: Vec<ShoeListing>,
    #[prop(optional)] now: Option<DateTime<Utc>>,
) -> impl IntoView {
    let now = now.unwrap_or_else(Utc::now);
    tracing::debug!(count = listings.len(), "rendering shoe grid");

    view! {
        <div class="shoe-grid">
            {listings.into_iter().map(|listing| {
                view! {
                    <ShoeCard listing=listing now=now/>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
