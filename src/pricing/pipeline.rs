//! Discount and tax stages.
//!
//! Both stages validate their rate before touching the price and are pure,
//! so they can be called from any number of threads at once.

use serde::Serialize;

use crate::pricing::types::{DiscountPercent, PricingResult, TaxRate};

/// Apply a percentage discount (0–100) to `price`.
pub fn apply_discount(price: f64, discount_percent: f64) -> PricingResult<f64> {
    let discount = DiscountPercent::new(discount_percent)?;
    Ok(price * discount.remaining_factor())
}

/// Apply a fractional tax rate (`0.05` = 5%) to `price`.
pub fn apply_tax(price: f64, tax_rate: f64) -> PricingResult<f64> {
    let rate = TaxRate::new(tax_rate)?;
    Ok(price + price * rate.value())
}

/// Every intermediate value of one run through both stages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub original: f64,
    pub discount_percent: f64,
    pub discounted: f64,
    pub tax_rate: f64,
    pub final_price: f64,
}
