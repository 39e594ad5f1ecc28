//! Client construction options.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::logger::Logger;

/// Production backend endpoint.
pub const DEFAULT_API_URL: &str = "https://api.useautumn.com/v1";

/// API version sent when none is configured.
pub const LATEST_API_VERSION: &str = "1.2";

/// Log level used when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Options recognized by [`Autumn::with_options`](crate::Autumn::with_options).
///
/// Every field is optional. Keys fall back to the ambient environment, the
/// URL to `AUTUMN_API_URL` and then [`DEFAULT_API_URL`], the version to
/// [`LATEST_API_VERSION`].
#[derive(Debug, Clone, Default)]
pub struct AutumnOptions {
    /// Secret key (`am_sk_...`).
    pub secret_key: Option<String>,

    /// Publishable key (`am_pk_...`), used when no secret key is available.
    pub publishable_key: Option<String>,

    /// Backend base URL.
    pub url: Option<String>,

    /// Value of the `x-api-version` header.
    pub version: Option<String>,

    /// Headers sent verbatim instead of the synthesized ones.
    ///
    /// `x-api-version` is still set from [`version`](Self::version).
    pub headers: Option<BTreeMap<String, String>>,

    /// Verbosity of the client's logger (`error`, `warn`, `info`, `debug`,
    /// `trace`, `off`).
    pub log_level: Option<String>,

    /// Logger override. Defaults to [`TracingLogger`](crate::TracingLogger).
    pub logger: Option<Arc<dyn Logger>>,
}

impl AutumnOptions {
    /// Create empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the secret key.
    #[must_use]
    pub fn with_secret_key(mut self, key: impl Into<String>) -> Self {
        self.secret_key = Some(key.into());
        self
    }

    /// Set the publishable key.
    #[must_use]
    pub fn with_publishable_key(mut self, key: impl Into<String>) -> Self {
        self.publishable_key = Some(key.into());
        self
    }

    /// Set the backend base URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the API version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Replace the synthesized headers.
    #[must_use]
    pub fn with_headers<K, V>(mut self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.headers = Some(
            headers
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        );
        self
    }

    /// Set the log level.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Use a custom logger.
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }
}
