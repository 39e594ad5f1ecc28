//! Domain operation handlers.
//!
//! Each handler only builds a path and payload and calls one of the
//! [`Autumn`](crate::Autumn) verbs. The `const` [`Operation`](crate::Operation)
//! next to each handler is what the public surfaces dispatch through.

pub mod customers;
pub mod entities;
pub mod features;
pub mod general;
pub mod products;
pub mod referrals;

use std::borrow::Cow;

/// Percent-encode one path segment.
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Append `pairs` as a query string, skipping absent values.
pub(crate) fn with_query(path: String, pairs: &[(&str, Option<String>)]) -> String {
    let query: Vec<String> = pairs
        .iter()
        .filter_map(|(name, value)| {
            value
                .as_ref()
                .map(|value| format!("{name}={}", urlencoding::encode(value)))
        })
        .collect();

    if query.is_empty() {
        path
    } else {
        format!("{path}?{}", query.join("&"))
    }
}

/// Join `expand` sections into the comma separated form the backend expects.
pub(crate) fn expand_param(expand: &[autumn_core::CustomerExpand]) -> Option<String> {
    if expand.is_empty() {
        return None;
    }
    Some(
        expand
            .iter()
            .map(autumn_core::CustomerExpand::as_str)
            .collect::<Vec<_>>()
            .join(","),
    )
}
