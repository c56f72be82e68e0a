//! Port trait definitions
//!
//! - `LogSink`: destination for diagnostic lines
//!
//! Infrastructure provides the stderr and in-memory implementations.

pub mod log_sink;

pub use log_sink::{CallSite, Color, LogRecord, LogSink, Severity};
