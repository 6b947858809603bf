//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, method filter, middleware)
//!     → request.rs (request ID, path variable decoding)
//!     → routing (resolve path to handler)
//!     → response.rs (JSON body)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{AppState, GreeterServer};
