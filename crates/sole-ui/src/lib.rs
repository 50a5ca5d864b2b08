//! Leptos components for the Sole storefront.
//!
//! - [`ShoeCard`]: one link-wrapped card for a [`ShoeListing`]
//! - [`ShoeGrid`]: a wrapping grid of cards
//! - [`Spacer`]: fixed-size gap between stacked elements
//!
//! Cards read a [`CardConfig`] from context and fall back to the default
//! when none is provided.
//!
//! ```rust,ignore
//! use sole_ui::prelude::*;
//!
//! #[component]
//! fn ShoeIndex(listings: Vec<ShoeListing>) -> impl IntoView {
//!     provide_context(CardConfig::default());
//!     view! { <ShoeGrid listings=listings/> }
//! }
//! ```

mod card;
mod grid;
mod spacer;
pub mod style;

#[cfg(feature = "ssr")]
mod page;

pub use card::*;
pub use grid::*;
pub use spacer::*;

#[cfg(feature = "ssr")]
pub use page::*;

pub use sole_commerce::{CardConfig, ShoeListing};

/// Prelude for convenient imports.
pub mod prelude {
    pub use leptos::prelude::*;
    pub use sole_commerce::prelude::*;

    pub use crate::{Axis, ShoeCard, ShoeGrid, Spacer};

    #[cfg(feature = "ssr")]
    pub use crate::{render_catalog_page, ShoeIndexPage};
}
