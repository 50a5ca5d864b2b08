//! Money type for listing prices.
//!
//! Prices arrive as integers in the smallest unit of the currency, so
//! formatting never goes through floating point.

use serde::{Deserialize, Serialize};

/// Supported storefront currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
        }
    }

    /// Number of fractional digits in the smallest unit.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Format with trailing fractional zeros dropped (e.g., "$165", "$49.9").
    ///
    /// This is the storefront's card price format.
    pub fn display_compact(&self) -> String {
        let (sign, whole, frac) = self.split();
        let places = self.currency.decimal_places() as usize;
        if frac == 0 {
            return format!("{sign}{}{whole}", self.currency.symbol());
        }
        let digits = format!("{frac:0places$}");
        format!(
            "{sign}{}{whole}.{}",
            self.currency.symbol(),
            digits.trim_end_matches('0')
        )
    }

    fn split(&self) -> (&'static str, u64, u64) {
        let divisor = 10_u64.pow(self.currency.decimal_places());
        let abs = self.amount_cents.unsigned_abs();
        let sign = if self.is_negative() { "-" } else { "" };
        (sign, abs / divisor, abs % divisor)
    }
}
