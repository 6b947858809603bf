//! Greeting service and price calculator library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pricing;
pub mod routing;

pub use config::ServiceConfig;
pub use http::GreeterServer;
pub use lifecycle::Shutdown;
pub use pricing::{apply_discount, apply_tax, InvalidArgument};
pub use routing::{Handler, RouteMatch, RouteTable};
