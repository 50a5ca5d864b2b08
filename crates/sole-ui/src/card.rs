//! The shoe card component.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use sole_commerce::{CardConfig, CardPresentation, ShoeListing};

use crate::spacer::Spacer;

/// Link-wrapped card for one listing.
///
/// `now` pins the instant the recency window is measured from; it defaults
/// to the current time. The card itself holds no state, so rendering the
/// same listing at the same instant always yields the same markup.
#[component]
pub fn ShoeCard(
    listing: ShoeListing,
    #[prop(optional)] now: Option<DateTime<Utc>>,
) -> impl IntoView {
    let config = use_context::<CardConfig>().unwrap_or_default();
    let card = CardPresentation::build(&listing, &config, now.unwrap_or_else(Utc::now));
    tracing::debug!(slug = %listing.slug, variant = %card.variant, "rendering shoe card");

    let CardPresentation {
        variant,
        href,
        image_src,
        name,
        price_text,
        price_style,
        color_text,
        sale_price_text,
        flag,
    } = card;

    view! {
        <a class="shoe-card" href=href>
            <article class="shoe-card__wrapper" data-variant=variant.as_str()>
                <div class="shoe-card__image-wrapper">
                    <img class="shoe-card__image" alt="" src=image_src/>
                </div>
                <Spacer size=12/>
                <div class="shoe-card__row">
                    <h3 class="shoe-card__name">{name}</h3>
                    <span class="shoe-card__price" style=price_style.css()>{price_text}</span>
                </div>
                <div class="shoe-card__row">
                    <p class="shoe-card__colors">{color_text}</p>
                    <span class="shoe-card__sale-price">{sale_price_text}</span>
                </div>
                {flag.map(|flag| view! {
                    <div class="shoe-card__flag" style=flag.css()>{flag.text}</div>
                })}
            </article>
        </a>
    }
}
