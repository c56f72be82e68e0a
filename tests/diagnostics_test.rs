// Integration tests for the critical/error diagnostics

use std::fmt;
use std::io;
use std::sync::Arc;

use ecs_infra::domain::ports::Color;
use ecs_infra::{critical, fmt_error, CallSite, Diagnostics, MemorySink};
use proptest::prelude::*;

fn capture() -> (Arc<MemorySink>, Diagnostics) {
    let sink = Arc::new(MemorySink::new());
    let diagnostics = Diagnostics::new(sink.clone());
    (sink, diagnostics)
}

#[derive(Debug)]
struct DeployError {
    vm: String,
}

impl fmt::Display for DeployError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vm {} not found in inventory", self.vm)
    }
}

impl std::error::Error for DeployError {}

fn deploy(diagnostics: &Diagnostics, vm: &str) -> bool {
    let result: Result<(), DeployError> = Err(DeployError { vm: vm.to_string() });
    fmt_error!(diagnostics, result.as_ref().err())
}

/// Splits `[error] <file>:<line> <text>` into its parts.
fn parse_error_line(line: &str) -> (&str, u32, &str) {
    let rest = line.strip_prefix("[error] ").expect("error tag");
    let (location, text) = rest.split_once(' ').expect("location and text");
    let (file, line) = location.rsplit_once(':').expect("file:line");
    (file, line.parse().expect("numeric line"), text)
}

#[test]
fn test_guard_style_error_check() {
    let (sink, diagnostics) = capture();

    let ok: Result<u32, io::Error> = Ok(7);
    assert!(!diagnostics.log_error(ok.as_ref().err()));

    let failed: Result<u32, io::Error> = Err(io::Error::other("vcenter login rejected"));
    let expected_line = line!() + 1;
    if !diagnostics.log_error(failed.as_ref().err()) {
        panic!("error should have been logged");
    }

    let texts = sink.texts();
    assert_eq!(texts.len(), 1);
    let (file, line, text) = parse_error_line(&texts[0]);
    assert!(file.ends_with("diagnostics_test.rs"));
    assert_eq!(line, expected_line);
    assert_eq!(text, "vcenter login rejected");
}

#[test]
fn test_fmt_error_names_enclosing_function() {
    let (sink, diagnostics) = capture();
    assert!(deploy(&diagnostics, "ctrl-vm-a"));

    let texts = sink.texts();
    assert_eq!(texts.len(), 1);
    let line = &texts[0];
    let rest = line.strip_prefix("[error] in ").unwrap();
    let (function, rest) = rest.split_once(" [").unwrap();
    assert_eq!(function, "diagnostics_test::deploy");
    assert!(rest.starts_with("tests/diagnostics_test.rs:"));
    assert!(line.ends_with("] vm ctrl-vm-a not found in inventory"));
}

#[test]
fn test_explicit_call_site() {
    let (sink, diagnostics) = capture();
    let site = CallSite::new("host::reconcile", "host/reconcile.rs", 88);
    assert!(diagnostics.fmt_error(site, Some("lease lost")));
    assert_eq!(
        sink.texts(),
        vec!["[error] in host::reconcile [host/reconcile.rs:88] lease lost".to_string()]
    );
}

#[test]
fn test_critical_is_red_and_restored() {
    let (sink, diagnostics) = capture();
    critical!(diagnostics, "a", "b");
    diagnostics.log_error(Some("after"));

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text, "ab");
    assert_eq!(lines[0].color, Some(Color::Red));
    assert_eq!(lines[1].color, None);
    assert_eq!(sink.current_color(), None);
}

proptest! {
    /// Property: absent errors are silent and report false
    #[test]
    fn prop_absent_errors_are_silent(calls in 1usize..20) {
        let (sink, diagnostics) = capture();
        for _ in 0..calls {
            prop_assert!(!diagnostics.log_error::<io::Error>(None));
            prop_assert!(!fmt_error!(diagnostics, None::<&io::Error>));
        }
        prop_assert!(sink.lines().is_empty());
    }

    /// Property: every present error yields exactly one line ending in its text
    #[test]
    fn prop_present_error_one_line(text in "[a-zA-Z0-9 ]{1,40}") {
        let (sink, diagnostics) = capture();
        prop_assert!(diagnostics.log_error(Some(text.as_str())));

        let texts = sink.texts();
        prop_assert_eq!(texts.len(), 1);
        let line = &texts[0];
        prop_assert!(line.ends_with(&text));

        let (file, line_no, _) = parse_error_line(line);
        prop_assert!(!file.is_empty());
        prop_assert!(line_no > 0);
    }

    /// Property: critical output is the plain concatenation and never leaves color set
    #[test]
    fn prop_critical_concatenates(parts in proptest::collection::vec("[a-z ]{0,6}", 0..6)) {
        let (sink, diagnostics) = capture();
        diagnostics.critical(&parts);

        let lines = sink.lines();
        prop_assert_eq!(lines.len(), 1);
        prop_assert_eq!(&lines[0].text, &parts.concat());
        prop_assert_eq!(lines[0].color, Some(Color::Red));
        prop_assert_eq!(sink.current_color(), None);
    }
}
