//! ecs-infra - support library for ECS controller hosts
//!
//! Two independent pieces:
//!
//! - **Diagnostics** (`infrastructure::logging`): critical messages in red and
//!   error logging tagged with the reporting call site, written to an
//!   injected sink.
//! - **Configuration** (`domain::models::config`): vCenter and NSX-T
//!   credentials plus controller/VM mappings, loaded with
//!   `infrastructure::config::ConfigLoader`.
//!
//! # Example
//!
//! ```ignore
//! use ecs_infra::{fmt_error, ConfigLoader, Diagnostics};
//!
//! let config = ConfigLoader::load()?;
//! let diagnostics = Diagnostics::stderr(&config.logging);
//! if fmt_error!(diagnostics, connect(&config.ecs.hypervisor).err().as_ref()) {
//!     return Ok(());
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{Config, ControllerMapping, EndpointCredentials, VirtualizationConfig};
pub use domain::ports::{CallSite, LogRecord, LogSink, Severity};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::logging::{
    ColorMode, Diagnostics, LogConfig, LoggerImpl, MemorySink, StderrSink,
};
