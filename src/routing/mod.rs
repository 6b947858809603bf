//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → router.rs (walk the table in specificity order)
//!     → matcher.rs (evaluate one pattern, capture its variable)
//!     → handler.rs (build the greeting payload)
//!
//! Table construction (at startup):
//!     Route[]
//!     → Sort by specificity (exact, single segment, catch-all)
//!     → Freeze as immutable RouteTable, shared via Arc
//! ```
//!
//! # Design Decisions
//! - Routes fixed at startup, immutable at runtime
//! - Deterministic: same input always yields the same handler and capture
//! - Never fails: the catch-all covers every path

pub mod handler;
pub mod matcher;
pub mod router;

pub use handler::{Greeting, Handler};
pub use matcher::{Capture, RoutePattern};
pub use router::{Route, RouteMatch, RouteTable};
