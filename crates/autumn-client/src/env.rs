//! Ambient environment lookup.
//!
//! The client never calls `std::env` directly; it goes through an
//! [`Environment`] so tests can supply fixed values without touching the
//! process environment.

use std::collections::HashMap;
use std::fmt;

/// Ambient slot holding the secret key.
pub const SECRET_KEY_VAR: &str = "AUTUMN_SECRET_KEY";

/// Ambient slot holding the publishable key.
pub const PUBLISHABLE_KEY_VAR: &str = "AUTUMN_PUBLISHABLE_KEY";

/// Ambient slot overriding the backend base URL.
pub const API_URL_VAR: &str = "AUTUMN_API_URL";

/// Read-only source of ambient configuration values.
///
/// Lookups never fail: a value that is missing, unreadable or empty is
/// reported as `None`.
pub trait Environment: Send + Sync + fmt::Debug {
    /// Look up a raw value.
    fn get(&self, name: &str) -> Option<String>;

    /// Look up a value, treating the empty string as unset.
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).filter(|value| !value.is_empty())
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        // Non-unicode values count as unset.
        std::env::var(name).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_are_unset() {
        let env: HashMap<String, String> = [
            (SECRET_KEY_VAR.to_string(), String::new()),
            (PUBLISHABLE_KEY_VAR.to_string(), "am_pk_test".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(env.var(SECRET_KEY_VAR), None);
        assert_eq!(env.var(PUBLISHABLE_KEY_VAR).as_deref(), Some("am_pk_test"));
        assert_eq!(env.var(API_URL_VAR), None);
    }

    #[test]
    fn process_env_missing_is_none() {
        assert_eq!(ProcessEnv.var("AUTUMN_TEST_DEFINITELY_NOT_SET"), None);
    }
}
