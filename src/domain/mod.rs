//! Domain layer
//!
//! Configuration models and the log sink port.

pub mod models;
pub mod ports;
