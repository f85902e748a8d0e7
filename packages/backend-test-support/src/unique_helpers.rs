//! Unique test data built from ULIDs, so tests sharing a process never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("item");
/// assert_ne!(a, unique_str("item"));
/// assert!(a.starts_with("item-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{prefix}-{}", Ulid::new())
}

/// `{prefix}-{ulid}@example.test` (lowercased, so it round-trips unchanged).
///
/// ```
/// use backend_test_support::unique_helpers::unique_email;
///
/// let email = unique_email("alice");
/// assert!(email.starts_with("alice-"));
/// assert!(email.ends_with("@example.test"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.test", Ulid::new().to_string().to_lowercase())
}
