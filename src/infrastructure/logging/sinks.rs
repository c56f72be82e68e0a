//! Log sink implementations
//!
//! - `StderrSink`: timestamped lines on standard error, ANSI colored
//! - `MemorySink`: captures lines in memory for assertions

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Local;
use console::{Style, Term};

use crate::domain::ports::{Color, LogSink};

/// Timestamp prefix matching the conventional `log` line layout
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Sink writing to the process's standard error
pub struct StderrSink {
    term: Term,
    ansi: bool,
    color: Mutex<Option<Color>>,
}

impl StderrSink {
    /// Create a sink; `ansi` controls whether color escapes are emitted.
    pub fn new(ansi: bool) -> Self {
        Self {
            term: Term::stderr(),
            ansi,
            color: Mutex::new(None),
        }
    }

    fn format_line(&self, line: &str) -> String {
        let stamped = format!("{} {}", Local::now().format(TIMESTAMP_FORMAT), line);
        match *lock(&self.color) {
            Some(color) if self.ansi => Style::new()
                .fg(color)
                .force_styling(true)
                .apply_to(stamped)
                .to_string(),
            _ => stamped,
        }
    }
}

impl LogSink for StderrSink {
    fn write_line(&self, line: &str) {
        // Term::write_line issues a single write of line + '\n'.
        let _ = self.term.write_line(&self.format_line(line));
    }

    fn set_color(&self, color: Option<Color>) {
        *lock(&self.color) = color;
    }
}

/// A line captured by [`MemorySink`], with the color active when written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLine {
    /// Line as passed to the sink
    pub text: String,
    /// Foreground color in effect
    pub color: Option<Color>,
}

/// In-memory sink for tests and embedding
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<CapturedLine>>,
    color: Mutex<Option<Color>>,
}

impl MemorySink {
    /// Empty sink with default color
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines, oldest first
    pub fn lines(&self) -> Vec<CapturedLine> {
        lock(&self.lines).clone()
    }

    /// Text of all captured lines
    pub fn texts(&self) -> Vec<String> {
        lock(&self.lines).iter().map(|l| l.text.clone()).collect()
    }

    /// Color currently in effect
    pub fn current_color(&self) -> Option<Color> {
        *lock(&self.color)
    }

    /// Drops captured lines
    pub fn clear(&self) {
        lock(&self.lines).clear();
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) {
        let color = self.current_color();
        lock(&self.lines).push(CapturedLine {
            text: line.to_string(),
            color,
        });
    }

    fn set_color(&self, color: Option<Color>) {
        *lock(&self.color) = color;
    }
}
