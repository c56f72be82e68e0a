//! Diagnostic records and the sink they are written to

use std::fmt;
use std::panic::Location;

pub use console::Color;

/// Severity of a diagnostic line
///
/// Only two severities exist: `Critical` for conditions the host cannot
/// recover from, `Error` for recoverable failures reported with their call
/// site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Fatal condition, rendered in red
    Critical,
    /// Recoverable failure, tagged `[error]`
    Error,
}

impl Severity {
    /// Returns the lowercase tag used in rendered lines
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source location a diagnostic is reported from
///
/// `file` and `line` identify the statement; `function` is optional because
/// Rust only exposes it through macros at the call site (see
/// [`call_site!`](crate::call_site)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    /// Fully qualified path of the enclosing function
    pub function: Option<&'a str>,
    /// Source file path as recorded by the compiler
    pub file: &'a str,
    /// 1-based line number
    pub line: u32,
}

impl<'a> CallSite<'a> {
    /// Builds a call site from explicit parts.
    pub const fn new(function: &'a str, file: &'a str, line: u32) -> Self {
        Self {
            function: Some(function),
            file,
            line,
        }
    }

    /// Location of the caller of the function this is invoked from.
    ///
    /// Only meaningful when every frame between the caller and this call is
    /// `#[track_caller]`.
    #[track_caller]
    pub fn caller() -> CallSite<'static> {
        let location = Location::caller();
        CallSite {
            function: None,
            file: location.file(),
            line: location.line(),
        }
    }

    /// Attaches the enclosing function name.
    #[must_use]
    pub const fn with_function(mut self, function: &'a str) -> Self {
        self.function = Some(function);
        self
    }
}

/// One diagnostic, produced per call and rendered to a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord<'a> {
    /// Critical or error
    pub severity: Severity,
    /// Message text, without tag or location
    pub message: String,
    /// Reporting location, for error records
    pub site: Option<CallSite<'a>>,
}

impl<'a> LogRecord<'a> {
    /// Critical record; `parts` are joined with no separator.
    pub fn critical<S: AsRef<str>>(parts: &[S]) -> Self {
        Self {
            severity: Severity::Critical,
            message: parts.iter().map(|part| part.as_ref()).collect(),
            site: None,
        }
    }

    /// Error record reported from `site`.
    pub fn error(site: CallSite<'a>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            site: Some(site),
        }
    }

    /// Renders the line body written to the sink.
    ///
    /// - critical: `<message>`
    /// - error: `[error] <file>:<line> <message>`
    /// - error with function: `[error] in <function> [<file>:<line>] <message>`
    pub fn render(&self) -> String {
        match (self.severity, &self.site) {
            (Severity::Critical, _) => self.message.clone(),
            (Severity::Error, None) => format!("[error] {}", self.message),
            (Severity::Error, Some(site)) => match site.function {
                Some(function) => format!(
                    "[error] in {} [{}:{}] {}",
                    function, site.file, site.line, self.message
                ),
                None => format!("[error] {}:{} {}", site.file, site.line, self.message),
            },
        }
    }
}

/// Destination for diagnostic lines
///
/// Implementations must write each `write_line` call as one uninterrupted
/// line. Write failures are swallowed; diagnostics never fail their caller.
/// The foreground color set through `set_color` applies to every following
/// line until reset with `None`.
pub trait LogSink: Send + Sync {
    /// Writes one line; the terminator is added by the sink.
    fn write_line(&self, line: &str);

    /// Switches the foreground color, `None` restores the default.
    fn set_color(&self, color: Option<Color>);
}
