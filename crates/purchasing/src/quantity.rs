//! Whole-number quantities carried as text on purchase order lines.

use core::str::FromStr;

use stockpo_core::{DomainError, ValueObject};

/// Non-negative whole quantity (units of the line's order unit).
///
/// The ERP transports quantities as text (`"99994"`); comparisons must use
/// this parsed value, never the string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u64);

impl Quantity {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl ValueObject for Quantity {}

impl FromStr for Quantity {
    type Err = DomainError;

    /// Accepts ASCII digits with optional surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(format!(
                "quantity ({s}) is not a whole number"
            )));
        }
        trimmed
            .parse::<u64>()
            .map(Self)
            .map_err(|_| DomainError::validation(format!("quantity ({s}) is out of range")))
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
