//! Logging infrastructure
//!
//! - Critical/error diagnostics over an injected sink (`Diagnostics`)
//! - Process logging via tracing and tracing-subscriber
//! - Secret redaction for printed configuration and error text

pub mod config;
pub mod diagnostics;
pub mod logger;
pub mod secret_scrubbing;
pub mod sinks;

pub use config::{ColorMode, LogConfig};
pub use diagnostics::Diagnostics;
pub use logger::{parse_log_level, LoggerImpl, LoggingError};
pub use secret_scrubbing::{redact_value, SecretScrubber, REDACTED};
pub use sinks::{CapturedLine, MemorySink, StderrSink};
