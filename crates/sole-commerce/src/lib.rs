//! Shoe listing domain types for the Sole storefront.
//!
//! This crate holds everything a shoe card needs that is not markup:
//!
//! - **Listing**: the flat [`ShoeListing`] a caller hands to a card
//! - **Variant**: [`DisplayVariant`] resolution and its presentation table
//! - **Helpers**: price formatting, pluralization, the recency window
//! - **Card**: [`CardPresentation`], the fully resolved view model of one card
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use sole_commerce::prelude::*;
//!
//! let now = Utc::now();
//! let listing = ShoeListing::new("tea-leaf", "Tea Leaf", "/assets/tea-leaf.jpg", 14000)
//!     .with_sale_price(11000)
//!     .with_release_date(now - Duration::days(3))
//!     .with_colors(1);
//!
//! let card = CardPresentation::build(&listing, &CardConfig::default(), now);
//! assert_eq!(card.variant, DisplayVariant::OnSale);
//! assert_eq!(card.color_text, "1 Color");
//! assert_eq!(card.href, "/shoe/tea-leaf");
//! ```

pub mod card;
pub mod config;
pub mod error;
pub mod format;
pub mod listing;
pub mod money;
pub mod recency;
pub mod variant;

pub use card::{CardPresentation, Flag};
pub use config::CardConfig;
pub use error::CatalogError;
pub use format::{format_price, pluralize};
pub use listing::{Catalog, ShoeListing};
pub use money::{Currency, Money};
pub use recency::{is_new_release, RecencyWindow};
pub use variant::{DisplayVariant, PriceStyle, VariantStyle};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::card::{CardPresentation, Flag};
    pub use crate::config::CardConfig;
    pub use crate::error::CatalogError;
    pub use crate::format::{format_price, pluralize};
    pub use crate::listing::{Catalog, ShoeListing};
    pub use crate::money::{Currency, Money};
    pub use crate::recency::{is_new_release, RecencyWindow};
    pub use crate::variant::{DisplayVariant, PriceStyle, VariantStyle};
}
