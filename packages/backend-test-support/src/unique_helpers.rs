//! ULID-suffixed test data, so rows from different tests never collide on
//! unique columns such as `users.email`.

use ulid::Ulid;

/// `{prefix}-{ulid}`
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("module");
/// assert_ne!(a, unique_str("module"));
/// assert!(a.starts_with("module-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// `{prefix}-{ulid}@example.test`
///
/// ```
/// use backend_test_support::unique_helpers::unique_email;
///
/// let email = unique_email("tutor");
/// assert!(email.starts_with("tutor-"));
/// assert!(email.ends_with("@example.test"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new())
}
