//! Input parsing and display formatting for the pricing CLI.

use thiserror::Error;

/// Default display symbol.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// A value typed by the user could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid input: expected a decimal number, got '{0}'")]
    NotANumber(String),

    #[error("Invalid input: no value provided")]
    Missing,
}

/// Parse a user-supplied decimal string.
pub fn parse_amount(raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Missing);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))
}

/// `Price after 10.00% discount: ₹90.00`
pub fn discount_line(discount_percent: f64, discounted: f64, symbol: &str) -> String {
    format!(
        "Price after {:.2}% discount: {}{:.2}",
        discount_percent, symbol, discounted
    )
}

/// `Final price with tax: ₹94.50`
pub fn final_line(final_price: f64, symbol: &str) -> String {
    format!("Final price with tax: {}{:.2}", symbol, final_price)
}
