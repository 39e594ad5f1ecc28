//! Credential resolution.

use std::fmt;

use crate::env::{Environment, PUBLISHABLE_KEY_VAR, SECRET_KEY_VAR};
use crate::error::AutumnError;
use crate::options::AutumnOptions;

/// Keys in effect for one client.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Secret key, if any.
    pub secret_key: Option<String>,
    /// Publishable key, if any.
    pub publishable_key: Option<String>,
}

impl Credentials {
    /// Resolve keys from explicit options, falling back to the environment.
    ///
    /// Explicit values win over ambient ones and empty strings count as
    /// unset.
    ///
    /// # Errors
    ///
    /// Returns [`AutumnError::Configuration`] when no key resolves and the
    /// options carry no explicit header override.
    pub fn resolve(options: &AutumnOptions, env: &dyn Environment) -> Result<Self, AutumnError> {
        let pick = |explicit: Option<&String>, slot: &str| {
            explicit
                .filter(|key| !key.is_empty())
                .cloned()
                .or_else(|| env.var(slot))
        };

        let credentials = Self {
            secret_key: pick(options.secret_key.as_ref(), SECRET_KEY_VAR),
            publishable_key: pick(options.publishable_key.as_ref(), PUBLISHABLE_KEY_VAR),
        };

        if credentials.is_empty() && options.headers.is_none() {
            return Err(AutumnError::Configuration(
                "Autumn secret key or publishable key is required".into(),
            ));
        }
        Ok(credentials)
    }

    /// Returns `true` when neither key is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.secret_key.is_none() && self.publishable_key.is_none()
    }

    /// The key used for the `Authorization` header: secret first.
    #[must_use]
    pub fn bearer(&self) -> Option<&str> {
        self.secret_key
            .as_deref()
            .or(self.publishable_key.as_deref())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("publishable_key", &self.publishable_key)
            .finish()
    }
}
