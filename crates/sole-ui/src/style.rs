//! Stylesheet for shoe cards and grids.
//!
//! Variant-dependent styling is not in here: the price decoration and the
//! flag background are set inline per card.

/// Card and grid rules, ready to inline in a `<style>` element.
pub const CARD_CSS: &str = r#"
.shoe-grid {
  display: flex;
  flex-wrap: wrap;
  gap: 32px;
}

.shoe-card {
  text-decoration: none;
  color: inherit;
  flex: 1 1 340px;
}

.shoe-card__wrapper {
  position: relative;
}

.shoe-card__image-wrapper {
  position: relative;
}

.shoe-card__image {
  width: 100%;
}

.shoe-card__row {
  font-size: 1rem;
  display: flex;
  justify-content: space-between;
}

.shoe-card__name {
  font-weight: 500;
  color: hsl(220deg 3% 20%);
}

.shoe-card__colors {
  color: hsl(220deg 5% 40%);
}

.shoe-card__sale-price {
  font-weight: 500;
  color: hsl(340deg 65% 47%);
}

.shoe-card__flag {
  position: absolute;
  top: 0;
  right: 0;
  height: 32px;
  color: hsla(0, 0%, 100%, 1);
  font-size: 14px;
  font-weight: 700;
  background-color: var(--background-color);
  border-radius: 2px;
  margin-right: -4px;
  padding: 9px;
  display: flex;
  align-items: center;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_reads_background_variable() {
        assert!(CARD_CSS.contains("background-color: var(--background-color)"));
    }

    #[test]
    fn test_no_markup_sensitive_characters() {
        assert!(!CARD_CSS.contains('<'));
        assert!(!CARD_CSS.contains('&'));
    }
}
