//! Text helpers shared by every card.

use crate::money::{Currency, Money};

/// Format a price given in the smallest currency unit for display on a card.
///
/// ```
/// use sole_commerce::{format_price, Currency};
/// assert_eq!(format_price(16500, Currency::USD), "$165");
/// assert_eq!(format_price(9950, Currency::USD), "$99.5");
/// ```
pub fn format_price(amount_cents: i64, currency: Currency) -> String {
    Money::new(amount_cents, currency).display_compact()
}

/// Prefix `word` with `count`, adding a plural `s` unless the count is one.
///
/// ```
/// use sole_commerce::pluralize;
/// assert_eq!(pluralize("Color", 1), "1 Color");
/// assert_eq!(pluralize("Color", 0), "0 Colors");
/// ```
pub fn pluralize(word: &str, count: u32) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize_singular() {
        assert_eq!(pluralize("Color", 1), "1 Color");
    }

    #[test]
    fn test_pluralize_plural() {
        assert_eq!(pluralize("Color", 0), "0 Colors");
        assert_eq!(pluralize("Color", 2), "2 Colors");
        assert_eq!(pluralize("Color", 12), "12 Colors");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(14000, Currency::USD), "$140");
        assert_eq!(format_price(11050, Currency::USD), "$110.5");
        assert_eq!(format_price(11000, Currency::GBP), "\u{00a3}110");
    }
}
