//! Critical and error diagnostics over an injected [`LogSink`]
//!
//! Hosts build one [`Diagnostics`] at startup and pass it to the components
//! that report failures:
//!
//! ```ignore
//! let diagnostics = Diagnostics::stderr(&config.logging);
//! if diagnostics.log_error(result.as_ref().err()) {
//!     return;
//! }
//! ```

use std::fmt::Display;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::ports::{CallSite, Color, LogRecord, LogSink};

use super::config::LogConfig;
use super::sinks::StderrSink;

/// Process-wide diagnostic context
pub struct Diagnostics {
    sink: Arc<dyn LogSink>,
    styling: Mutex<()>,
}

impl Diagnostics {
    /// Diagnostics writing to `sink`.
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink,
            styling: Mutex::new(()),
        }
    }

    /// Diagnostics on standard error, colored according to `config.color`.
    pub fn stderr(config: &LogConfig) -> Self {
        Self::new(Arc::new(StderrSink::new(config.color.enabled())))
    }

    /// The underlying sink
    pub fn sink(&self) -> &Arc<dyn LogSink> {
        &self.sink
    }

    /// Writes the concatenation of `parts` in red.
    ///
    /// The color is held for exactly this line and reset before returning.
    pub fn critical<S: AsRef<str>>(&self, parts: &[S]) {
        let record = LogRecord::critical(parts);
        let _style = StyleGuard::acquire(self, Color::Red);
        self.sink.write_line(&record.render());
    }

    /// Logs `err` tagged with the caller's file and line.
    ///
    /// Returns `false` without writing anything when `err` is `None`.
    #[track_caller]
    pub fn log_error<E>(&self, err: Option<&E>) -> bool
    where
        E: Display + ?Sized,
    {
        let Some(err) = err else {
            return false;
        };
        self.emit(&LogRecord::error(CallSite::caller(), err.to_string()));
        true
    }

    /// Logs `err` tagged with an explicit call site, including its function.
    ///
    /// Usually invoked through [`fmt_error!`](crate::fmt_error), which fills in
    /// the site. Returns `false` without writing anything when `err` is `None`.
    pub fn fmt_error<E>(&self, site: CallSite<'_>, err: Option<&E>) -> bool
    where
        E: Display + ?Sized,
    {
        let Some(err) = err else {
            return false;
        };
        self.emit(&LogRecord::error(site, err.to_string()));
        true
    }

    fn emit(&self, record: &LogRecord<'_>) {
        // Serialized with critical output so no line picks up its color.
        let _styling = self.lock_styling();
        self.sink.write_line(&record.render());
    }

    fn lock_styling(&self) -> MutexGuard<'_, ()> {
        self.styling.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Exclusive hold on the terminal styling, reset on drop
struct StyleGuard<'a> {
    sink: &'a dyn LogSink,
    _lock: MutexGuard<'a, ()>,
}

impl<'a> StyleGuard<'a> {
    fn acquire(diagnostics: &'a Diagnostics, color: Color) -> Self {
        let lock = diagnostics.lock_styling();
        diagnostics.sink.set_color(Some(color));
        Self {
            sink: diagnostics.sink.as_ref(),
            _lock: lock,
        }
    }
}

impl Drop for StyleGuard<'_> {
    fn drop(&mut self) {
        self.sink.set_color(None);
    }
}

/// Fully qualified name of the enclosing function.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        let name = name.strip_suffix("::__here").unwrap_or(name);
        name.trim_end_matches("::{{closure}}")
    }};
}

/// [`CallSite`](crate::domain::ports::CallSite) of the invocation point.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::domain::ports::CallSite::new(
            $crate::function_name!(),
            ::std::file!(),
            ::std::line!(),
        )
    };
}

/// Writes a critical line built from `Display` parts, concatenated as-is.
///
/// `critical!(diagnostics, "controller ", name, " lost")`
#[macro_export]
macro_rules! critical {
    ($diagnostics:expr $(, $part:expr)* $(,)?) => {
        $diagnostics.critical::<::std::string::String>(&[
            $(::std::string::ToString::to_string(&$part)),*
        ])
    };
}

/// Logs an optional error with the enclosing function, file and line.
///
/// `if fmt_error!(diagnostics, result.as_ref().err()) { return; }`
#[macro_export]
macro_rules! fmt_error {
    ($diagnostics:expr, $err:expr $(,)?) => {
        $diagnostics.fmt_error($crate::call_site!(), $err)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::logging::MemorySink;
    use std::io;

    fn capture() -> (Arc<MemorySink>, Diagnostics) {
        let sink = Arc::new(MemorySink::new());
        let diagnostics = Diagnostics::new(sink.clone());
        (sink, diagnostics)
    }

    #[test]
    fn test_critical_concatenates_in_red() {
        let (sink, diagnostics) = capture();
        diagnostics.critical(&["a", "b"]);

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "ab");
        assert_eq!(lines[0].color, Some(Color::Red));
        assert_eq!(sink.current_color(), None);
    }

    #[test]
    fn test_critical_empty_resets_color() {
        let (sink, diagnostics) = capture();
        diagnostics.critical::<&str>(&[]);

        assert_eq!(sink.texts(), vec![String::new()]);
        assert_eq!(sink.current_color(), None);
    }

    #[test]
    fn test_log_error_none_is_silent() {
        let (sink, diagnostics) = capture();
        assert!(!diagnostics.log_error::<io::Error>(None));
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_log_error_reports_caller_line() {
        let (sink, diagnostics) = capture();
        let err = io::Error::other("socket closed");

        let line = line!() + 1;
        assert!(diagnostics.log_error(Some(&err)));

        let texts = sink.texts();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0], format!("[error] {}:{line} socket closed", file!()));
        assert_eq!(sink.lines()[0].color, None);
    }

    #[test]
    fn test_fmt_error_includes_function() {
        let (sink, diagnostics) = capture();
        let err = io::Error::other("lease expired");

        let line = line!() + 1;
        assert!(crate::fmt_error!(diagnostics, Some(&err)));

        assert_eq!(
            sink.texts()[0],
            format!(
                "[error] in ecs_infra::infrastructure::logging::diagnostics::tests::test_fmt_error_includes_function [{}:{line}] lease expired",
                file!()
            )
        );
    }

    #[test]
    fn test_fmt_error_none_is_silent() {
        let (sink, diagnostics) = capture();
        assert!(!crate::fmt_error!(diagnostics, None::<&io::Error>));
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_function_name_in_closure() {
        let name = (|| crate::function_name!())();
        assert_eq!(
            name,
            "ecs_infra::infrastructure::logging::diagnostics::tests::test_function_name_in_closure"
        );
    }

    #[test]
    fn test_critical_macro_formats_parts() {
        let (sink, diagnostics) = capture();
        crate::critical!(diagnostics, "controller ", "edge-a", " unreachable after ", 3, " attempts");
        crate::critical!(diagnostics);

        assert_eq!(
            sink.texts(),
            vec![
                "controller edge-a unreachable after 3 attempts".to_string(),
                String::new()
            ]
        );
    }

    #[test]
    fn test_concurrent_critical_and_errors_do_not_bleed() {
        let (sink, diagnostics) = capture();
        let diagnostics = Arc::new(diagnostics);
        let err = io::Error::other("transient");

        std::thread::scope(|scope| {
            for _ in 0..4 {
                let diagnostics = &diagnostics;
                let err = &err;
                scope.spawn(move || {
                    for _ in 0..50 {
                        diagnostics.critical(&["critical"]);
                        diagnostics.log_error(Some(err));
                    }
                });
            }
        });

        let lines = sink.lines();
        assert_eq!(lines.len(), 400);
        for line in lines {
            if line.text == "critical" {
                assert_eq!(line.color, Some(Color::Red));
            } else {
                assert!(line.text.ends_with(" transient"));
                assert_eq!(line.color, None);
            }
        }
        assert_eq!(sink.current_color(), None);
    }
}
