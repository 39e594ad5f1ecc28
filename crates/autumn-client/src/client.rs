//! Autumn HTTP client implementation.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use reqwest::header::HeaderMap;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::credentials::Credentials;
use crate::dispatch::{Outcome, Target};
use crate::env::{Environment, ProcessEnv, API_URL_VAR};
use crate::error::AutumnError;
use crate::headers::{compose_headers, to_header_map, API_VERSION_HEADER};
use crate::logger::{parse_log_level, Logger, TracingLogger};
use crate::options::{AutumnOptions, DEFAULT_API_URL, DEFAULT_LOG_LEVEL};
use crate::response;
use crate::Api;

/// Autumn API client.
///
/// Holds the resolved credentials, headers and base URL. Everything is fixed
/// at construction, so one client can serve any number of concurrent calls.
/// Cloning is cheap.
#[derive(Clone)]
pub struct Autumn {
    inner: Arc<Inner>,
}

struct Inner {
    http: Client,
    base_url: String,
    credentials: Credentials,
    headers: BTreeMap<String, String>,
    wire_headers: HeaderMap,
    logger: Arc<dyn Logger>,
}

impl Autumn {
    /// Create a client from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`AutumnError::Configuration`] if neither `AUTUMN_SECRET_KEY`
    /// nor `AUTUMN_PUBLISHABLE_KEY` is set.
    pub fn new() -> Result<Self, AutumnError> {
        Self::with_options(AutumnOptions::default())
    }

    /// Create a client from explicit options, falling back to the process
    /// environment for anything unset.
    ///
    /// # Errors
    ///
    /// Returns [`AutumnError::Configuration`] if no credential resolves, a
    /// header is invalid or the log level is unknown.
    pub fn with_options(options: AutumnOptions) -> Result<Self, AutumnError> {
        Self::with_options_in(options, &ProcessEnv)
    }

    /// Create a client using only the ambient values of `env`.
    ///
    /// This is how static-form calls obtain their throwaway client.
    ///
    /// # Errors
    ///
    /// Returns [`AutumnError::Configuration`] if `env` holds no credential.
    pub fn from_environment(env: &dyn Environment) -> Result<Self, AutumnError> {
        Self::with_options_in(AutumnOptions::default(), env)
    }

    /// Create a client from options, resolving fallbacks against `env`.
    ///
    /// # Errors
    ///
    /// Returns [`AutumnError::Configuration`] if no credential resolves, a
    /// header is invalid or the log level is unknown. Returns
    /// [`AutumnError::Http`] if the HTTP client cannot be initialized.
    pub fn with_options_in(
        options: AutumnOptions,
        env: &dyn Environment,
    ) -> Result<Self, AutumnError> {
        let credentials = Credentials::resolve(&options, env)?;
        let headers = compose_headers(
            &credentials,
            options.headers.as_ref(),
            options.version.as_deref(),
        );
        let wire_headers = to_header_map(&headers)?;

        let base_url = options
            .url
            .filter(|url| !url.is_empty())
            .or_else(|| env.var(API_URL_VAR))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let filter = parse_log_level(options.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL))?;
        let logger = options
            .logger
            .unwrap_or_else(|| Arc::new(TracingLogger::new(filter)));

        // One request per call: no idle connections are kept between calls.
        let http = Client::builder().pool_max_idle_per_host(0).build()?;

        tracing::debug!(
            base_url = %base_url,
            version = %headers[API_VERSION_HEADER],
            secret_key = credentials.secret_key.is_some(),
            publishable_key = credentials.publishable_key.is_some(),
            "Autumn client configured"
        );

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                base_url,
                credentials,
                headers,
                wire_headers,
                logger,
            }),
        })
    }

    /// Static-form surface backed by the process environment.
    ///
    /// Each call builds a throwaway client from `AUTUMN_SECRET_KEY` /
    /// `AUTUMN_PUBLISHABLE_KEY` (and `AUTUMN_API_URL`).
    #[must_use]
    pub fn ambient() -> Api<'static> {
        Self::ambient_in(Arc::new(ProcessEnv))
    }

    /// Static-form surface backed by a custom environment.
    #[must_use]
    pub fn ambient_in(env: Arc<dyn Environment>) -> Api<'static> {
        Api::new(Target::Ambient(env))
    }

    /// Instance-form surface bound to this client.
    #[must_use]
    pub fn api(&self) -> Api<'_> {
        Api::new(Target::Bound(self))
    }

    /// Base URL requests are sent to, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Headers sent with every request.
    #[must_use]
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.inner.headers
    }

    /// API version sent in `x-api-version`.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.inner.headers[API_VERSION_HEADER]
    }

    /// Secret key in effect, if any.
    #[must_use]
    pub fn secret_key(&self) -> Option<&str> {
        self.inner.credentials.secret_key.as_deref()
    }

    /// Publishable key in effect, if any.
    #[must_use]
    pub fn publishable_key(&self) -> Option<&str> {
        self.inner.credentials.publishable_key.as_deref()
    }

    /// Logger receiving API error diagnostics.
    #[must_use]
    pub fn logger(&self) -> &dyn Logger {
        self.inner.logger.as_ref()
    }

    /// Send a GET request to `path` (relative to the base URL).
    ///
    /// # Errors
    ///
    /// Returns [`AutumnError::Http`] if no response was received.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Outcome<T> {
        let request = self.inner.http.get(self.url(path));
        self.send(request, path).await
    }

    /// Send a POST request with `body` encoded as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AutumnError::Serialization`] if `body` cannot be encoded and
    /// [`AutumnError::Http`] if no response was received.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Outcome<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body)?;
        let request = self.inner.http.post(self.url(path)).body(payload);
        self.send(request, path).await
    }

    /// Send a DELETE request to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AutumnError::Http`] if no response was received.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Outcome<T> {
        let request = self.inner.http.delete(self.url(path));
        self.send(request, path).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, path: &str) -> Outcome<T> {
        let response = request
            .headers(self.inner.wire_headers.clone())
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(path = %path, error = %e, "Autumn request failed");
                AutumnError::Http(e)
            })?;

        response::from_response(response, path, self.logger()).await
    }
}

impl fmt::Debug for Autumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Autumn")
            .field("base_url", &self.inner.base_url)
            .field("version", &self.version())
            .field("credentials", &self.inner.credentials)
            .finish_non_exhaustive()
    }
}
