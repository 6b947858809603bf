//! Pricing types and errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A precondition of a pricing stage was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("Discount percentage must be between 0 and 100.")]
    DiscountOutOfRange,

    #[error("Tax rate cannot be negative.")]
    NegativeTaxRate,
}

/// Result alias for pricing operations.
pub type PricingResult<T> = Result<T, InvalidArgument>;

/// Discount on the 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DiscountPercent(f64);

impl DiscountPercent {
    pub fn new(percent: f64) -> PricingResult<Self> {
        // NaN fails the range check
        if (0.0..=100.0).contains(&percent) {
            Ok(Self(percent))
        } else {
            Err(InvalidArgument::DiscountOutOfRange)
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Multiplier left after the discount, exactly `0.0` at 100%.
    pub fn remaining_factor(&self) -> f64 {
        1.0 - self.0 / 100.0
    }
}

impl TryFrom<f64> for DiscountPercent {
    type Error = InvalidArgument;

    fn try_from(value: f64) -> PricingResult<Self> {
        Self::new(value)
    }
}

impl From<DiscountPercent> for f64 {
    fn from(value: DiscountPercent) -> Self {
        value.0
    }
}

/// Fractional tax rate, e.g. `0.05` for 5%. No upper bound.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct TaxRate(f64);

impl TaxRate {
    pub fn new(rate: f64) -> PricingResult<Self> {
        if rate >= 0.0 {
            Ok(Self(rate))
        } else {
            Err(InvalidArgument::NegativeTaxRate)
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for TaxRate {
    type Error = InvalidArgument;

    fn try_from(value: f64) -> PricingResult<Self> {
        Self::new(value)
    }
}

impl From<TaxRate> for f64 {
    fn from(value: TaxRate) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InvalidArgument::DiscountOutOfRange.to_string(),
            "Discount percentage must be between 0 and 100."
        );
        assert_eq!(
            InvalidArgument::NegativeTaxRate.to_string(),
            "Tax rate cannot be negative."
        );
    }

    #[test]
    fn test_discount_bounds() {
        assert!(DiscountPercent::new(0.0).is_ok());
        assert!(DiscountPercent::new(100.0).is_ok());
        assert_eq!(DiscountPercent::new(-0.01), Err(InvalidArgument::DiscountOutOfRange));
        assert_eq!(DiscountPercent::new(100.01), Err(InvalidArgument::DiscountOutOfRange));
        assert_eq!(DiscountPercent::new(f64::NAN), Err(InvalidArgument::DiscountOutOfRange));
        assert_eq!(DiscountPercent::new(100.0).unwrap().remaining_factor(), 0.0);
    }

    #[test]
    fn test_tax_rate_bounds() {
        assert!(TaxRate::new(0.0).is_ok());
        assert!(TaxRate::new(1_000.0).is_ok());
        assert!(TaxRate::new(f64::INFINITY).is_ok());
        assert_eq!(TaxRate::new(-0.01), Err(InvalidArgument::NegativeTaxRate));
        assert_eq!(TaxRate::new(f64::NAN), Err(InvalidArgument::NegativeTaxRate));
    }

    #[test]
    fn test_serde_validates() {
        let ok: DiscountPercent = serde_json::from_str("25.0").unwrap();
        assert_eq!(ok.value(), 25.0);
        assert!(serde_json::from_str::<DiscountPercent>("150.0").is_err());
        assert!(serde_json::from_str::<TaxRate>("-1.0").is_err());
    }
}
