//! Interactive pricing session.
//!
//! Reads the original price, discount percentage and tax rate (from presets
//! or by prompting), prints each stage's result, and reports failures on the
//! error stream instead of aborting.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::pricing::pipeline::{apply_discount, apply_tax, PriceBreakdown};
use crate::pricing::report::{discount_line, final_line, parse_amount, InputError};
use crate::pricing::types::InvalidArgument;

pub const PRICE_PROMPT: &str = "Enter the original price: ";
pub const DISCOUNT_PROMPT: &str = "Enter the discount percentage: ";
pub const TAX_PROMPT: &str = "Enter the tax rate (e.g., 0.05 for 5%): ";

/// Anything that can end a session early.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Pricing(#[from] InvalidArgument),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Values supplied up front; `None` means "ask".
#[derive(Debug, Clone, Default)]
pub struct SessionInputs {
    pub price: Option<String>,
    pub discount: Option<String>,
    pub tax: Option<String>,
}

/// One run of the calculator over a pair of streams.
pub struct PriceSession<R, W, E> {
    input: R,
    out: W,
    err: E,
    symbol: String,
}

impl<R: BufRead, W: Write, E: Write> PriceSession<R, W, E> {
    pub fn new(input: R, out: W, err: E, symbol: impl Into<String>) -> Self {
        Self {
            input,
            out,
            err,
            symbol: symbol.into(),
        }
    }

    /// Run the session, reporting any failure on the error stream.
    ///
    /// Rejected input is reported as `Error: <message>`, stream failures as
    /// `Unexpected error: <message>`. Returns `true` when both stages completed.
    pub fn run_and_report(&mut self, inputs: SessionInputs) -> bool {
        match self.run(inputs) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(error = %e, "Pricing session failed");
                let prefix = match e {
                    SessionError::Io(_) => "Unexpected error",
                    SessionError::Pricing(_) | SessionError::Input(_) => "Error",
                };
                // Nothing left to report to if stderr is gone
                let _ = writeln!(self.err, "{}: {}", prefix, e);
                let _ = self.err.flush();
                false
            }
        }
    }

    /// Run both stages, printing each result as soon as it is known.
    pub fn run(&mut self, inputs: SessionInputs) -> Result<PriceBreakdown, SessionError> {
        let original = self.value(inputs.price, PRICE_PROMPT)?;
        let discount_percent = self.value(inputs.discount, DISCOUNT_PROMPT)?;

        let discounted = apply_discount(original, discount_percent)?;
        writeln!(self.out, "{}", discount_line(discount_percent, discounted, &self.symbol))?;

        let tax_rate = self.value(inputs.tax, TAX_PROMPT)?;
        let final_price = apply_tax(discounted, tax_rate)?;
        writeln!(self.out, "{}", final_line(final_price, &self.symbol))?;
        self.out.flush()?;

        tracing::debug!(original, discounted, final_price, "Price computed");
        Ok(PriceBreakdown {
            original,
            discount_percent,
            discounted,
            tax_rate,
            final_price,
        })
    }

    fn value(&mut self, preset: Option<String>, prompt: &str) -> Result<f64, SessionError> {
        let raw = match preset {
            Some(raw) => raw,
            None => {
                write!(self.out, "{}", prompt)?;
                self.out.flush()?;
                let mut line = String::new();
                if self.input.read_line(&mut line)? == 0 {
                    return Err(InputError::Missing.into());
                }
                line
            }
        };
        Ok(parse_amount(&raw)?)
    }
}
