//! Credential redaction for printed output

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Value;

/// Replacement text for redacted values
pub const REDACTED: &str = "[REDACTED]";

/// Keys whose values are always redacted in structured output
const SENSITIVE_KEYS: &[&str] = &["password", "token", "secret", "session_id"];

static PASSWORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(["']?password["']?\s*[:=]\s*)["']?[^"'\s,}]+["']?"#)
        .expect("static pattern")
});

static BASIC_AUTH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(authorization["']?\s*[:=]\s*["']?Basic\s+)[A-Za-z0-9+/=]+"#)
        .expect("static pattern")
});

// vCenter REST session header and NSX-T manager XSRF header
static SESSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)((?:vmware-api-session-id|x-xsrf-token)["']?\s*[:=]\s*)["']?[A-Za-z0-9\-_.]+["']?"#)
        .expect("static pattern")
});

/// Scrubs credentials from free text before it is printed
#[derive(Debug, Clone, Copy, Default)]
pub struct SecretScrubber;

impl SecretScrubber {
    /// Create a scrubber
    pub const fn new() -> Self {
        Self
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let scrubbed = BASIC_AUTH_PATTERN.replace_all(message, |caps: &Captures| {
            format!("{}{REDACTED}", &caps[1])
        });
        let scrubbed = SESSION_PATTERN.replace_all(&scrubbed, |caps: &Captures| {
            format!("{}{REDACTED}", &caps[1])
        });
        PASSWORD_PATTERN
            .replace_all(&scrubbed, |caps: &Captures| format!("{}{REDACTED}", &caps[1]))
            .into_owned()
    }
}

/// Replaces the values of sensitive keys anywhere in a JSON tree.
pub fn redact_value(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, entry) in map.iter_mut() {
                if is_sensitive(key) {
                    *entry = Value::String(REDACTED.to_string());
                } else {
                    redact_value(entry);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact_value),
        _ => {}
    }
}

fn is_sensitive(key: &str) -> bool {
    let key = key.to_lowercase();
    SENSITIVE_KEYS.iter().any(|s| key.contains(s))
}
