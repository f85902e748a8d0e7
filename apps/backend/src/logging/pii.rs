use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
});

// scheme://user:password@  (driver errors sometimes echo the connection string)
static URL_PASSWORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"([A-Za-z][A-Za-z0-9+.-]*://[^:/@\s]+:)[^@\s]+@").unwrap()
});

/// Mask personal data and secrets before a string reaches the logs.
///
/// - connection string passwords become `***`
/// - emails keep the first character of the local part and the full domain
pub fn redact(input: &str) -> String {
    let without_passwords = URL_PASSWORD_REGEX.replace_all(input, "${1}***@");

    EMAIL_REGEX
        .replace_all(&without_passwords, |caps: &Captures| {
            let full = &caps[0];
            match full.split_once('@') {
                Some((local, domain)) if !local.is_empty() => {
                    let first: String = local.chars().take(1).collect();
                    format!("{first}***@{domain}")
                }
                _ => full.to_string(),
            }
        })
        .into_owned()
}

/// Display wrapper that redacts on format, for use in log fields:
/// `info!(email = %Redacted(&email), ...)`.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
