//! Type-safe price representation in integer minor currency units.
//!
//! Catalog and cart math happens on integer cents so totals never
//! accumulate floating-point drift. Conversion to a decimal amount is
//! only done at the display boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in integer minor currency units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create a price from an amount in cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Get the amount in cents.
    #[must_use]
    pub const fn as_cents(&self) -> i64 {
        self.0
    }

    /// Get the amount in the currency's standard unit.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Format for display, e.g. `NT$2,980` or `NT$12.50`.
    ///
    /// Whole amounts drop the fractional part; the integer part is grouped
    /// with thousands separators.
    #[must_use]
    pub fn display(&self) -> String {
        let units = self.0 / 100;
        let rem = (self.0 % 100).abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        let grouped = group_thousands(units.unsigned_abs());
        if rem == 0 {
            format!("{sign}NT${grouped}")
        } else {
            format!("{sign}NT${grouped}.{rem:02}")
        }
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Group a non-negative integer with comma thousands separators.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
