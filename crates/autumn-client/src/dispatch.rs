//! Static and instance dispatch of domain operations.
//!
//! Every operation is written once, as a handler taking a configured
//! [`Autumn`] and its parameters. An [`Operation`] can then run that handler
//! in two ways:
//!
//! - **instance form**: with a client the caller built and owns;
//! - **static form**: with a throwaway client built from the ambient
//!   environment for this one call.
//!
//! Apart from where the credentials and base URL come from, both forms behave
//! identically.

use std::fmt;
use std::sync::Arc;

use autumn_core::ApiResult;
use futures::future::BoxFuture;

use crate::client::Autumn;
use crate::env::Environment;
use crate::error::AutumnError;

/// What every operation resolves to: an [`ApiResult`] when the backend
/// answered, an [`AutumnError`] when it could not be reached or the client
/// could not be configured.
pub type Outcome<T> = Result<ApiResult<T>, AutumnError>;

/// Signature shared by every domain handler.
pub type Handler<P, T> = for<'a> fn(&'a Autumn, P) -> BoxFuture<'a, Outcome<T>>;

/// Which client an operation runs against.
#[derive(Debug, Clone)]
pub enum Target<'a> {
    /// Build a client from this environment for each call.
    Ambient(Arc<dyn Environment>),
    /// Use an existing client.
    Bound(&'a Autumn),
}

/// A named domain handler that can run in static or instance form.
pub struct Operation<P, T> {
    name: &'static str,
    handler: Handler<P, T>,
}

impl<P, T> Operation<P, T> {
    /// Wrap a handler.
    #[must_use]
    pub const fn new(name: &'static str, handler: Handler<P, T>) -> Self {
        Self { name, handler }
    }

    /// Operation name, used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Instance form: run against `client`.
    ///
    /// # Errors
    ///
    /// Propagates transport and serialization errors from the handler.
    pub async fn call(&self, client: &Autumn, params: P) -> Outcome<T> {
        (self.handler)(client, params).await
    }

    /// Static form: run against a client built from `env` alone.
    ///
    /// # Errors
    ///
    /// Returns [`AutumnError::Configuration`] if `env` holds no credential,
    /// otherwise propagates handler errors.
    pub async fn call_ambient(&self, env: &dyn Environment, params: P) -> Outcome<T> {
        let client = Autumn::from_environment(env)?;
        tracing::debug!(operation = self.name, "Dispatching with ambient credentials");
        self.call(&client, params).await
    }

    /// Run against whichever client `target` designates.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call) and [`call_ambient`](Self::call_ambient).
    pub async fn dispatch(&self, target: &Target<'_>, params: P) -> Outcome<T> {
        match target {
            Target::Ambient(env) => self.call_ambient(env.as_ref(), params).await,
            Target::Bound(client) => self.call(client, params).await,
        }
    }
}

impl<P, T> Clone for Operation<P, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P, T> Copy for Operation<P, T> {}

impl<P, T> fmt::Debug for Operation<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation").field("name", &self.name).finish()
    }
}
