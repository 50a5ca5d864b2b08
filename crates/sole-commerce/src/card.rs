//! Resolved view model of a shoe card.
//!
//! [`CardPresentation`] is everything a card renders, already formatted.
//! UI layers map it onto markup without making further decisions.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::CardConfig;
use crate::format::{format_price, pluralize};
use crate::listing::ShoeListing;
use crate::variant::{DisplayVariant, PriceStyle};

/// Promotional banner shown over the card image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Flag {
    pub text: &'static str,
    pub background: &'static str,
}

impl Flag {
    /// Inline CSS binding the flag's background variable.
    pub fn css(&self) -> String {
        format!("--background-color: {}", self.background)
    }
}

/// Everything one card displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardPresentation {
    pub variant: DisplayVariant,
    /// Link target of the whole card.
    pub href: String,
    pub image_src: String,
    pub name: String,
    /// Regular price, formatted.
    pub price_text: String,
    pub price_style: PriceStyle,
    /// Color count with the noun pluralized.
    pub color_text: String,
    /// Sale price, formatted, when the listing has one.
    pub sale_price_text: Option<String>,
    /// Banner, absent for the default variant.
    pub flag: Option<Flag>,
}

impl CardPresentation {
    /// Resolve a listing into its card at `now`.
    pub fn build(listing: &ShoeListing, config: &CardConfig, now: DateTime<Utc>) -> Self {
        let variant = DisplayVariant::resolve(listing, &config.recency, now);
        let style = variant.style();
        let flag = style
            .flag_text
            .zip(style.flag_background)
            .map(|(text, background)| Flag { text, background });

        Self {
            variant,
            href: config.detail_href(&listing.slug),
            image_src: listing.image_src.clone(),
            name: listing.name.clone(),
            price_text: format_price(listing.price, config.currency),
            price_style: style.price_style,
            color_text: pluralize("Color", listing.num_of_colors),
            sale_price_text: listing
                .sale_price
                .map(|price| format_price(price, config.currency)),
            flag,
        }
    }

    /// Flag text, or an empty string when no flag is shown.
    pub fn flag_text(&self) -> &'static str {
        self.flag.map(|f| f.text).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn build(listing: &ShoeListing) -> CardPresentation {
        CardPresentation::build(listing, &CardConfig::default(), now())
    }

    #[test]
    fn test_old_shoe_on_sale() {
        let listing = ShoeListing::new("tea-leaf", "Tea Leaf", "/assets/tea-leaf.jpg", 14000)
            .with_sale_price(11000)
            .with_release_date(now() - Duration::days(365 * 10))
            .with_colors(1);

        let card = build(&listing);
        assert_eq!(card.variant, DisplayVariant::OnSale);
        assert_eq!(card.flag_text(), "Sale");
        assert_eq!(card.price_style, PriceStyle::Strikethrough);
        assert_eq!(card.color_text, "1 Color");
        assert_eq!(card.price_text, "$140");
        assert_eq!(card.sale_price_text.as_deref(), Some("$110"));
        assert_eq!(card.flag.unwrap().css(), "--background-color: hsla(340, 65%, 47%, 1)");
    }

    #[test]
    fn test_fresh_release() {
        let listing = ShoeListing::new("stride", "Stride Runner", "/assets/stride.jpg", 14000)
            .with_release_date(now() - Duration::days(3))
            .with_colors(3);

        let card = build(&listing);
        assert_eq!(card.variant, DisplayVariant::NewRelease);
        assert_eq!(card.flag_text(), "Just released!");
        assert_eq!(card.price_style, PriceStyle::Normal);
        assert_eq!(card.color_text, "3 Colors");
        assert_eq!(card.sale_price_text, None);
    }

    #[test]
    fn test_default_has_no_flag() {
        let listing = ShoeListing::new("classic", "Classic", "/assets/classic.jpg", 14000)
            .with_release_date(now() - Duration::days(365 * 3))
            .with_colors(2);

        let card = build(&listing);
        assert_eq!(card.variant, DisplayVariant::Default);
        assert_eq!(card.flag, None);
        assert_eq!(card.flag_text(), "");
        assert_eq!(card.price_style, PriceStyle::Normal);
        assert_eq!(card.color_text, "2 Colors");
    }

    #[test]
    fn test_zero_colors_is_plural() {
        let listing = ShoeListing::new("ghost", "Ghost", "/g.jpg", 100).with_colors(0);
        assert_eq!(build(&listing).color_text, "0 Colors");
    }

    #[test]
    fn test_href_and_image() {
        let listing = ShoeListing::new("tea-leaf", "Tea Leaf", "/assets/tea-leaf.jpg", 14000);
        let card = build(&listing);
        assert_eq!(card.href, "/shoe/tea-leaf");
        assert_eq!(card.image_src, "/assets/tea-leaf.jpg");
        assert_eq!(card.name, "Tea Leaf");
    }

    #[test]
    fn test_build_is_idempotent() {
        let listing = ShoeListing::new("tea-leaf", "Tea Leaf", "/a.jpg", 14000)
            .with_release_date(now() - Duration::days(3));
        assert_eq!(build(&listing), build(&listing));
    }
}
