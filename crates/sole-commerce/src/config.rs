//! Card configuration.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::money::Currency;
use crate::recency::RecencyWindow;

/// Settings shared by every card on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    /// Path the detail link is built under; the slug is appended.
    #[serde(default = "default_route_prefix")]
    pub route_prefix: String,

    /// How long after release a shoe counts as new.
    #[serde(default, rename = "recency_window_secs")]
    pub recency: RecencyWindow,

    /// Currency prices are expressed in.
    #[serde(default)]
    pub currency: Currency,
}

fn default_route_prefix() -> String {
    "/shoe".to_string()
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            route_prefix: default_route_prefix(),
            recency: RecencyWindow::default(),
            currency: Currency::default(),
        }
    }
}

impl CardConfig {
    /// Parse card settings from a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(content)?)
    }

    /// Detail page path for a slug.
    pub fn detail_href(&self, slug: &str) -> String {
        format!("{}/{}", self.route_prefix.trim_end_matches('/'), slug)
    }
}
