//! Display variants and their presentation table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::listing::ShoeListing;
use crate::recency::RecencyWindow;

/// How a card presents its listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayVariant {
    /// Listing carries a sale price.
    OnSale,
    /// Listing was released inside the recency window.
    NewRelease,
    /// Nothing to call out.
    #[default]
    Default,
}

/// Text decoration applied to the regular price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceStyle {
    Normal,
    Strikethrough,
}

impl PriceStyle {
    /// Inline CSS for the price element.
    pub fn css(&self) -> &'static str {
        match self {
            PriceStyle::Normal => "text-decoration: none",
            PriceStyle::Strikethrough => "text-decoration: line-through",
        }
    }
}

/// One row of the variant presentation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantStyle {
    /// Flag banner text; `None` means no flag is rendered.
    pub flag_text: Option<&'static str>,
    /// Flag background color.
    pub flag_background: Option<&'static str>,
    /// Regular price decoration.
    pub price_style: PriceStyle,
}

const ON_SALE: VariantStyle = VariantStyle {
    flag_text: Some("Sale"),
    flag_background: Some("hsla(340, 65%, 47%, 1)"),
    price_style: PriceStyle::Strikethrough,
};

const NEW_RELEASE: VariantStyle = VariantStyle {
    flag_text: Some("Just released!"),
    flag_background: Some("hsla(240, 60%, 63%, 1)"),
    price_style: PriceStyle::Normal,
};

const DEFAULT: VariantStyle = VariantStyle {
    flag_text: None,
    flag_background: None,
    price_style: PriceStyle::Normal,
};

impl DisplayVariant {
    /// Resolve the variant for a listing at `now`.
    ///
    /// A sale price wins over a recent release date: a shoe that is both
    /// on sale and newly released shows as on sale.
    pub fn resolve(listing: &ShoeListing, window: &RecencyWindow, now: DateTime<Utc>) -> Self {
        let variant = if listing.sale_price.is_some() {
            DisplayVariant::OnSale
        } else if window.contains(listing.release_date, now) {
            DisplayVariant::NewRelease
        } else {
            DisplayVariant::Default
        };
        tracing::debug!(slug = %listing.slug, %variant, "resolved display variant");
        variant
    }

    /// Presentation for this variant.
    pub fn style(&self) -> &'static VariantStyle {
        match self {
            DisplayVariant::OnSale => &ON_SALE,
            DisplayVariant::NewRelease => &NEW_RELEASE,
            DisplayVariant::Default => &DEFAULT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayVariant::OnSale => "on-sale",
            DisplayVariant::NewRelease => "new-release",
            DisplayVariant::Default => "default",
        }
    }
}

impl fmt::Display for DisplayVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn listing(sale_price: Option<i64>, released_days_ago: i64) -> ShoeListing {
        let listing = ShoeListing::new("test-shoe", "Test Shoe", "/assets/test.jpg", 14000)
            .with_release_date(now() - Duration::days(released_days_ago));
        match sale_price {
            Some(price) => listing.with_sale_price(price),
            None => listing,
        }
    }

    fn resolve(listing: &ShoeListing) -> DisplayVariant {
        DisplayVariant::resolve(listing, &RecencyWindow::default(), now())
    }

    #[test]
    fn test_sale_price_means_on_sale() {
        assert_eq!(resolve(&listing(Some(11000), 365 * 10)), DisplayVariant::OnSale);
    }

    #[test]
    fn test_on_sale_beats_new_release() {
        assert_eq!(resolve(&listing(Some(11000), 3)), DisplayVariant::OnSale);
    }

    #[test]
    fn test_zero_sale_price_is_still_on_sale() {
        assert_eq!(resolve(&listing(Some(0), 365)), DisplayVariant::OnSale);
    }

    #[test]
    fn test_recent_release_without_sale() {
        assert_eq!(resolve(&listing(None, 3)), DisplayVariant::NewRelease);
    }

    #[test]
    fn test_old_release_without_sale() {
        assert_eq!(resolve(&listing(None, 365 * 3)), DisplayVariant::Default);
    }

    #[test]
    fn test_window_is_configurable() {
        let shoe = listing(None, 10);
        let week = RecencyWindow::from_days(7);
        assert_eq!(DisplayVariant::resolve(&shoe, &week, now()), DisplayVariant::Default);
        assert_eq!(resolve(&shoe), DisplayVariant::NewRelease);
    }

    #[test]
    fn test_style_table() {
        let sale = DisplayVariant::OnSale.style();
        assert_eq!(sale.flag_text, Some("Sale"));
        assert_eq!(sale.flag_background, Some("hsla(340, 65%, 47%, 1)"));
        assert_eq!(sale.price_style, PriceStyle::Strikethrough);

        let new = DisplayVariant::NewRelease.style();
        assert_eq!(new.flag_text, Some("Just released!"));
        assert_eq!(new.flag_background, Some("hsla(240, 60%, 63%, 1)"));
        assert_eq!(new.price_style, PriceStyle::Normal);

        let default = DisplayVariant::Default.style();
        assert_eq!(default.flag_text, None);
        assert_eq!(default.flag_background, None);
        assert_eq!(default.price_style, PriceStyle::Normal);
    }

    #[test]
    fn test_only_on_sale_strikes_price() {
        for variant in [
            DisplayVariant::OnSale,
            DisplayVariant::NewRelease,
            DisplayVariant::Default,
        ] {
            let struck = variant.style().price_style == PriceStyle::Strikethrough;
            assert_eq!(struck, variant == DisplayVariant::OnSale);
        }
    }

    #[test]
    fn test_variant_names() {
        assert_eq!(DisplayVariant::OnSale.to_string(), "on-sale");
        assert_eq!(
            serde_json::to_string(&DisplayVariant::NewRelease).unwrap(),
            "\"new-release\""
        );
    }
}
