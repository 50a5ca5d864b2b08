//! Shoe listings and catalogs of them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A single shoe listing as supplied to a card.
///
/// Field names serialize in camelCase to match the storefront front end.
/// `releaseDate` is read either as an RFC 3339 string or as Unix
/// milliseconds, and always written as RFC 3339.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShoeListing {
    /// URL path segment of the detail page.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Image URI.
    pub image_src: String,
    /// Regular price in the smallest currency unit.
    pub price: i64,
    /// Discounted price in the smallest currency unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<i64>,
    /// Release timestamp.
    #[serde(deserialize_with = "release_date::deserialize")]
    pub release_date: DateTime<Utc>,
    /// Number of color variants available.
    #[serde(default)]
    pub num_of_colors: u32,
}

impl ShoeListing {
    /// Create a listing released now, in one color, with no sale price.
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        image_src: impl Into<String>,
        price: i64,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            image_src: image_src.into(),
            price,
            sale_price: None,
            release_date: Utc::now(),
            num_of_colors: 1,
        }
    }

    pub fn with_sale_price(mut self, sale_price: i64) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    pub fn with_release_date(mut self, release_date: DateTime<Utc>) -> Self {
        self.release_date = release_date;
        self
    }

    pub fn with_colors(mut self, num_of_colors: u32) -> Self {
        self.num_of_colors = num_of_colors;
        self
    }

    /// Check the fields a card relies on.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.slug.trim().is_empty() {
            return Err(CatalogError::EmptySlug);
        }
        if self.slug.contains('/') {
            return Err(CatalogError::InvalidSlug(self.slug.clone()));
        }
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyName(self.slug.clone()));
        }
        if self.price < 0 {
            return Err(CatalogError::NegativePrice {
                slug: self.slug.clone(),
                price: self.price,
            });
        }
        if let Some(sale_price) = self.sale_price.filter(|p| *p < 0) {
            return Err(CatalogError::NegativeSalePrice {
                slug: self.slug.clone(),
                sale_price,
            });
        }
        Ok(())
    }
}

mod release_date {
    use chrono::{DateTime, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Text(DateTime<Utc>),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Millis(ms) => DateTime::from_timestamp_millis(ms)
                .ok_or_else(|| D::Error::custom(format!("release date out of range: {ms}"))),
            Raw::Text(date) => Ok(date),
        }
    }
}

/// An ordered collection of listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Catalog {
    pub listings: Vec<ShoeListing>,
}

impl Catalog {
    pub fn new(listings: Vec<ShoeListing>) -> Self {
        Self { listings }
    }

    /// Parse a JSON array of listings.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShoeListing> {
        self.listings.iter()
    }

    /// Split into valid listings and the errors of the rejected ones,
    /// keeping catalog order.
    pub fn partition_valid(self) -> (Vec<ShoeListing>, Vec<CatalogError>) {
        let mut valid = Vec::with_capacity(self.listings.len());
        let mut rejected = Vec::new();
        for listing in self.listings {
            match listing.validate() {
                Ok(()) => valid.push(listing),
                Err(e) => rejected.push(e),
            }
        }
        (valid, rejected)
    }
}

impl IntoIterator for Catalog {
    type Item = ShoeListing;
    type IntoIter = std::vec::IntoIter<ShoeListing>;

    fn into_iter(self) -> Self::IntoIter {
        self.listings.into_iter()
    }
}
