//! Line Picker Library
//!
//! Fetches a remote text document and returns one line of it: a numbered
//! line, a random line matching a search, or any random non-blank line.

pub mod config;
pub mod fetch;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod select;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
