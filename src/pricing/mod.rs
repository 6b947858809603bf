//! Pricing subsystem.
//!
//! # Data Flow
//! ```text
//! price, discount %, tax rate (decimal strings)
//!     → report.rs (parse input)
//!     → pipeline.rs (discount stage, validated)
//!     → pipeline.rs (tax stage, validated)
//!     → report.rs (format with currency symbol, two decimals)
//! ```
//!
//! # Design Decisions
//! - Fail fast: each stage validates its rate before computing
//! - Discount (0–100 scale) and tax rate (fraction, unbounded above) are distinct types
//! - Stages are pure functions; no shared state

pub mod pipeline;
pub mod report;
pub mod session;
pub mod types;

pub use pipeline::{apply_discount, apply_tax, PriceBreakdown};
pub use session::{PriceSession, SessionError, SessionInputs};
pub use types::{DiscountPercent, InvalidArgument, PricingResult, TaxRate};
