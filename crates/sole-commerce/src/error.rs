//! Catalog error types.

use thiserror::Error;

/// Errors raised while loading or validating shoe listings.
///
/// Rendering never produces these; they come from the optional checks a
/// caller runs before handing listings to a card.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Listing has no slug, so it cannot link anywhere.
    #[error("Listing has an empty slug")]
    EmptySlug,

    /// Slug would escape its path segment.
    #[error("Slug must be a single path segment: {0}")]
    InvalidSlug(String),

    /// Listing has no display name.
    #[error("Listing {0} has an empty name")]
    EmptyName(String),

    /// Regular price below zero.
    #[error("Listing {slug} has a negative price: {price}")]
    NegativePrice { slug: String, price: i64 },

    /// Sale price below zero.
    #[error("Listing {slug} has a negative sale price: {sale_price}")]
    NegativeSalePrice { slug: String, sale_price: i64 },

    /// Catalog document could not be parsed.
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Card configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),
}
