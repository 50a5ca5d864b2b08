//! Classify command.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sole_commerce::{CardConfig, CardPresentation, Catalog, DisplayVariant};

use super::{load_catalog, parse_now, ClassifyArgs};
use crate::context::Context;
use crate::output::variant_badge;

/// One classified listing, as printed in JSON mode.
#[derive(Debug, Serialize)]
struct Classified {
    slug: String,
    variant: DisplayVariant,
    flag: &'static str,
    price: String,
    sale_price: Option<String>,
    colors: String,
}

/// Run the classify command.
pub fn run(args: ClassifyArgs, ctx: &Context) -> Result<()> {
    let catalog = load_catalog(&args.catalog, ctx)?;
    let now = parse_now(args.now.as_deref())?;
    let rows = classify(&catalog, &ctx.config.card, now);

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header(&format!("{} listings", rows.len()));
    let slug_width = rows.iter().map(|r| r.slug.len()).max().unwrap_or(4).max(4);
    let widths = [slug_width, 11, 14, 10, 10];
    ctx.output
        .table_row(&["SLUG", "VARIANT", "FLAG", "PRICE", "SALE"], &widths);

    for row in &rows {
        let badge = variant_badge(row.variant, widths[1]);
        ctx.output.table_row(
            &[
                row.slug.as_str(),
                badge.as_str(),
                row.flag,
                row.price.as_str(),
                row.sale_price.as_deref().unwrap_or("-"),
            ],
            &widths,
        );
    }

    Ok(())
}

fn classify(catalog: &Catalog, config: &CardConfig, now: DateTime<Utc>) -> Vec<Classified> {
    catalog
        .iter()
        .map(|listing| {
            let card = CardPresentation::build(listing, config, now);
            Classified {
                slug: listing.slug.clone(),
                variant: card.variant,
                flag: card.flag_text(),
                price: card.price_text,
                sale_price: card.sale_price_text,
                colors: card.color_text,
            }
        })
        .collect()
}
