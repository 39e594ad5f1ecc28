//! Autumn Client SDK.
//!
//! This crate lets services talk to the Autumn billing API without handling
//! HTTP, auth headers or error shapes themselves. Every operation resolves to
//! an [`ApiResult`]: the decoded payload, or the [`ApiError`] the backend
//! returned. Only configuration problems and transport failures are `Err`.
//!
//! Operations can be called on a configured client (instance form) or without
//! one, using `AUTUMN_SECRET_KEY` / `AUTUMN_PUBLISHABLE_KEY` from the
//! environment (static form).
//!
//! # Example
//!
//! ```no_run
//! use autumn_client::{Autumn, AutumnOptions, CheckParams, TrackParams};
//!
//! # async fn example() -> Result<(), autumn_client::AutumnError> {
//! let autumn = Autumn::with_options(AutumnOptions::new().with_secret_key("am_sk_test_..."))?;
//!
//! let check = autumn.check(CheckParams::feature("user_123", "messages")).await?;
//! if check.data().is_some_and(|c| c.allowed) {
//!     autumn.track(TrackParams::feature("user_123", "messages", 1.0)).await?;
//! }
//!
//! // Same operation, static form.
//! let result = autumn_client::check(CheckParams::feature("user_123", "messages")).await?;
//! if let Some(error) = result.error() {
//!     eprintln!("check failed: {error}");
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod api;
mod client;
pub mod credentials;
pub mod dispatch;
pub mod env;
mod error;
pub mod headers;
pub mod logger;
pub mod ops;
mod options;
pub mod response;

pub use api::{
    attach, cancel, check, checkout, query, setup_payment, track, usage, Api, Customers,
    Entities, Features, Products, Referrals,
};
pub use autumn_core::*;
pub use client::Autumn;
pub use credentials::Credentials;
pub use dispatch::{Handler, Operation, Outcome, Target};
pub use env::{Environment, ProcessEnv};
pub use error::AutumnError;
pub use logger::{Logger, TracingLogger};
pub use options::{AutumnOptions, DEFAULT_API_URL, LATEST_API_VERSION};
