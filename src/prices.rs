//! Prices

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

/// Errors related to price construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// The given value was negative.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
}

/// A non-negative monetary value, displayed as a two-decimal fixed-point string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(Decimal);

impl Price {
    /// The zero price.
    pub const ZERO: Price = Price(Decimal::ZERO);

    /// Creates a new price from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the value is below zero.
    pub fn new(value: Decimal) -> Result<Self, PriceError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(PriceError::Negative(value));
        }

        Ok(Price(value))
    }

    /// Creates a price from a whole number of minor units (cents).
    #[must_use]
    pub fn from_minor(minor: u64) -> Self {
        Price(Decimal::new(i64::try_from(minor).unwrap_or(i64::MAX), 2))
    }

    /// Parses a price from a string, recovering to zero.
    ///
    /// Malformed or negative input becomes [`Price::ZERO`] rather than an
    /// error, matching the tolerant formatting contract where anything
    /// unusable renders as `"0.00"`.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Decimal::from_str(input.trim())
            .ok()
            .and_then(|value| Price::new(value).ok())
            .unwrap_or(Price::ZERO)
    }

    /// Returns the underlying decimal value.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Multiplies the price by a quantity, saturating on overflow.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Price(self.0.saturating_mul(Decimal::from(quantity)))
    }

    /// Adds another price, saturating on overflow.
    #[must_use]
    pub fn saturating_add(&self, other: Price) -> Self {
        Price(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round_dp(2);
        write!(f, "{rounded:.2}")
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0.to_f64().unwrap_or(0.0))
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        let decimal = Decimal::try_from(value).map_err(de::Error::custom)?;

        Price::new(decimal).map_err(de::Error::custom)
    }
}
