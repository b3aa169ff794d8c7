//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, tracing span)
//!     → params.rs (escape nested URL, decode url / line)
//!     → handler.rs (fetch document, select line)
//!     → response.rs (line or "Error! ..." with mapped status)
//!     → Send to client
//! ```

pub mod handler;
pub mod params;
pub mod request;
pub mod response;
pub mod server;

pub use handler::pick_line;
pub use params::PickParams;
pub use request::X_REQUEST_ID;
pub use response::PickError;
pub use server::{build_router, AppState, HttpServer, PICK_ENDPOINT};
