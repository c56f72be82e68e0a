//! Domain models

pub mod config;

pub use config::{Config, ControllerMapping, EndpointCredentials, VirtualizationConfig};
