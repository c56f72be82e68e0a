//! Infrastructure layer module
//!
//! - Configuration loading (figment)
//! - Logging: diagnostic sinks, tracing setup, secret scrubbing

pub mod config;
pub mod logging;
