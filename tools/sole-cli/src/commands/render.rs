//! Render command.

use anyhow::{bail, Context as _, Result};
use sole_commerce::{Catalog, CatalogError, ShoeListing};
use sole_ui::render_catalog_page;

use super::{load_catalog, parse_now, RenderArgs};
use crate::context::Context;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let catalog = load_catalog(&args.catalog, ctx)?;
    let now = parse_now(args.now.as_deref())?;
    let strict = args.strict || ctx.config.render.strict;
    let title = args
        .title
        .unwrap_or_else(|| ctx.config.render.title.clone());

    let (listings, rejected) = screen_listings(catalog, strict)?;
    for err in &rejected {
        tracing::debug!("skipping listing: {err}");
        ctx.output.warn(&format!("Skipping listing: {}", err));
    }

    let cards = listings.len();
    let html = render_catalog_page(title, listings, ctx.config.card.clone(), now);

    match args.output {
        Some(path) => {
            let path = ctx.resolve_path(&path);
            std::fs::write(&path, &html)
                .with_context(|| format!("Failed to write page: {}", path.display()))?;

            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "output": path.display().to_string(),
                    "cards": cards,
                    "skipped": rejected.len(),
                }));
            } else {
                ctx.output
                    .success(&format!("Rendered {} cards to {}", cards, path.display()));
            }
        }
        None => println!("{}", html),
    }

    Ok(())
}

/// Split a catalog into renderable listings and the reasons others were
/// dropped. In strict mode any invalid listing fails the whole render.
fn screen_listings(
    catalog: Catalog,
    strict: bool,
) -> Result<(Vec<ShoeListing>, Vec<CatalogError>)> {
    let (listings, rejected) = catalog.partition_valid();
    if strict && !rejected.is_empty() {
        let reasons: Vec<String> = rejected.iter().map(|e| e.to_string()).collect();
        bail!("{} invalid listings: {}", rejected.len(), reasons.join("; "));
    }
    Ok((listings, rejected))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_catalog() -> Catalog {
        Catalog::new(vec![
            ShoeListing::new("tea-leaf", "Tea Leaf", "/t.jpg", 14000),
            ShoeListing::new("broken", "Broken", "/b.jpg", -100),
            ShoeListing::new("stride", "Stride", "/s.jpg", 14000),
        ])
    }

    #[test]
    fn test_screen_skips_invalid_listings() {
        let (listings, rejected) = screen_listings(mixed_catalog(), false).unwrap();
        let slugs: Vec<_> = listings.iter().map(|l| l.slug.as_str()).collect();
        assert_eq!(slugs, ["tea-leaf", "stride"]);
        assert_eq!(rejected.len(), 1);
        assert!(matches!(
            rejected[0],
            CatalogError::NegativePrice { price: -100, .. }
        ));
    }

    #[test]
    fn test_screen_strict_fails_on_invalid_listing() {
        let err = screen_listings(mixed_catalog(), true).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("1 invalid listings"));
        assert!(message.contains("broken"));
    }

    #[test]
    fn test_screen_strict_passes_clean_catalog() {
        let catalog = Catalog::new(vec![ShoeListing::new("a", "A", "/a.jpg", 100)]);
        let (listings, rejected) = screen_listings(catalog, true).unwrap();
        assert_eq!(listings.len(), 1);
        assert!(rejected.is_empty());
    }
}
