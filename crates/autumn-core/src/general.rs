//! Parameters and responses for the top-level billing operations.
//!
//! These are the payloads of `checkout`, `attach`, `setup_payment`, `cancel`,
//! `check`, `track`, `usage` and `query`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::customers::CustomerData;

/// Quantity selected for a prepaid feature at checkout or attach time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureOption {
    /// Feature being purchased.
    pub feature_id: String,
    /// Quantity purchased.
    pub quantity: f64,
}

/// Parameters for `checkout`.
///
/// Returns either a hosted checkout URL or a preview of the charges when the
/// customer already has a payment method on file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutParams {
    /// Customer buying the product.
    pub customer_id: String,
    /// Product to purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Several products to purchase at once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_ids: Option<Vec<String>>,
    /// Entity the purchase applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    /// Prepaid quantities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FeatureOption>>,
    /// Redirect target after a successful payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    /// Data used to create the customer if they do not exist yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_data: Option<CustomerData>,
    /// Promotion or reward codes to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward: Option<String>,
    /// Extra parameters forwarded to the payment provider session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_session_params: Option<Value>,
}

impl CheckoutParams {
    /// Checkout a single product for a customer.
    #[must_use]
    pub fn new(customer_id: impl Into<String>, product_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            product_id: Some(product_id.into()),
            ..Self::default()
        }
    }
}

/// Line of a checkout preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutLine {
    /// Line description.
    pub description: String,
    /// Amount in the currency's major unit.
    pub amount: f64,
    /// Product or feature the line belongs to.
    #[serde(default)]
    pub item: Option<Value>,
}

/// Response of `checkout`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    /// Customer the checkout was created for.
    pub customer_id: String,
    /// Hosted checkout page, present when payment details are needed.
    #[serde(default)]
    pub url: Option<String>,
    /// Preview lines when no redirect is required.
    #[serde(default)]
    pub lines: Vec<CheckoutLine>,
    /// Product being purchased.
    #[serde(default)]
    pub product: Option<Value>,
    /// Product currently attached, when this is an upgrade or downgrade.
    #[serde(default)]
    pub current_product: Option<Value>,
    /// Total due now.
    #[serde(default)]
    pub total: Option<f64>,
    /// ISO currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Whether the change is prorated.
    #[serde(default)]
    pub has_prorations: Option<bool>,
}

/// Parameters for `attach`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachParams {
    /// Customer receiving the product.
    pub customer_id: String,
    /// Product to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Several products to attach at once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_ids: Option<Vec<String>>,
    /// Entity the product applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    /// Prepaid quantities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FeatureOption>>,
    /// Redirect target after a successful payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    /// Force a hosted checkout page even with a card on file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_checkout: Option<bool>,
    /// Create an invoice instead of charging immediately.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice: Option<bool>,
    /// Data used to create the customer if they do not exist yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_data: Option<CustomerData>,
    /// Reward code to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward: Option<String>,
    /// Arbitrary metadata stored with the attachment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl AttachParams {
    /// Attach a single product to a customer.
    #[must_use]
    pub fn new(customer_id: impl Into<String>, product_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            product_id: Some(product_id.into()),
            ..Self::default()
        }
    }
}

/// Response of `attach`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachResponse {
    /// Customer the products were attached to.
    pub customer_id: String,
    /// Products attached.
    #[serde(default)]
    pub product_ids: Vec<String>,
    /// Outcome code, e.g. `checkout_created` or `new_product_attached`.
    pub code: String,
    /// Outcome message.
    #[serde(default)]
    pub message: Option<String>,
    /// Hosted checkout page when payment is still required.
    #[serde(default)]
    pub checkout_url: Option<String>,
}

/// Parameters for `setup_payment`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetupPaymentParams {
    /// Customer adding a payment method.
    pub customer_id: String,
    /// Redirect target after the method is saved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    /// Extra parameters forwarded to the payment provider session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_session_params: Option<Value>,
}

/// Response of `setup_payment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupPaymentResponse {
    /// Customer the session was created for.
    pub customer_id: String,
    /// Hosted page collecting the payment method.
    pub url: String,
}

/// Parameters for `cancel`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CancelParams {
    /// Customer owning the product.
    pub customer_id: String,
    /// Product to cancel.
    pub product_id: String,
    /// Entity the product is attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    /// Cancel now instead of at the end of the billing period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_immediately: Option<bool>,
}

/// Response of `cancel`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelResponse {
    /// Whether the cancellation was accepted.
    pub success: bool,
    /// Customer owning the product.
    pub customer_id: String,
    /// Product cancelled.
    pub product_id: String,
}

/// Parameters for `check`.
///
/// Exactly one of `feature_id` or `product_id` is expected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckParams {
    /// Customer whose access is checked.
    pub customer_id: String,
    /// Feature to check access to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_id: Option<String>,
    /// Product to check access to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Entity to check access for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    /// Balance the customer must hold for access to be allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_balance: Option<f64>,
    /// Record a usage event when access is allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_event: Option<bool>,
    /// Include paywall/upgrade preview data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_preview: Option<bool>,
    /// Data used to create the customer if they do not exist yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_data: Option<CustomerData>,
}

impl CheckParams {
    /// Check access to a feature.
    #[must_use]
    pub fn feature(customer_id: impl Into<String>, feature_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            feature_id: Some(feature_id.into()),
            ..Self::default()
        }
    }

    /// Check access to a product.
    #[must_use]
    pub fn product(customer_id: impl Into<String>, product_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            product_id: Some(product_id.into()),
            ..Self::default()
        }
    }
}

/// Response of `check`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResponse {
    /// Whether the customer may proceed.
    pub allowed: bool,
    /// Customer checked.
    pub customer_id: String,
    /// Feature checked.
    #[serde(default)]
    pub feature_id: Option<String>,
    /// Product checked.
    #[serde(default)]
    pub product_id: Option<String>,
    /// Entity checked.
    #[serde(default)]
    pub entity_id: Option<String>,
    /// Balance that was required.
    #[serde(default)]
    pub required_balance: Option<f64>,
    /// Remaining balance for the feature.
    #[serde(default)]
    pub balance: Option<f64>,
    /// Whether the feature is unlimited.
    #[serde(default)]
    pub unlimited: Option<bool>,
    /// Usage in the current interval.
    #[serde(default)]
    pub usage: Option<f64>,
    /// Usage included in the plan.
    #[serde(default)]
    pub included_usage: Option<f64>,
    /// Reset interval of the feature.
    #[serde(default)]
    pub interval: Option<String>,
    /// Next reset, in epoch milliseconds.
    #[serde(default)]
    pub next_reset_at: Option<i64>,
    /// Paywall or upgrade preview when requested.
    #[serde(default)]
    pub preview: Option<Value>,
}

/// Parameters for `track`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackParams {
    /// Customer who used the feature.
    pub customer_id: String,
    /// Feature consumed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_id: Option<String>,
    /// Event name, for features metered by event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    /// Amount consumed (defaults to 1 on the backend).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Entity that consumed the feature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    /// Key making retries of the same event safe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
    /// Arbitrary event properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
    /// Data used to create the customer if they do not exist yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_data: Option<CustomerData>,
}

impl TrackParams {
    /// Track `value` units of a feature.
    #[must_use]
    pub fn feature(
        customer_id: impl Into<String>,
        feature_id: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            feature_id: Some(feature_id.into()),
            value: Some(value),
            ..Self::default()
        }
    }

    /// Track a named event.
    #[must_use]
    pub fn event(customer_id: impl Into<String>, event_name: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            event_name: Some(event_name.into()),
            ..Self::default()
        }
    }
}

/// Response of `track` and `usage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackResponse {
    /// Identifier of the recorded event.
    #[serde(default)]
    pub id: Option<String>,
    /// Outcome code, e.g. `event_received`.
    pub code: String,
    /// Customer the event was recorded for.
    pub customer_id: String,
    /// Feature the event applied to.
    #[serde(default)]
    pub feature_id: Option<String>,
    /// Event name recorded.
    #[serde(default)]
    pub event_name: Option<String>,
}

/// Parameters for `usage`, which sets an absolute usage value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageParams {
    /// Customer whose usage is set.
    pub customer_id: String,
    /// Feature whose usage is set.
    pub feature_id: String,
    /// New usage value.
    pub value: f64,
    /// Data used to create the customer if they do not exist yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_data: Option<CustomerData>,
}

/// One or several features for `query`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureSelector {
    /// A single feature.
    One(String),
    /// Several features.
    Many(Vec<String>),
}

impl From<&str> for FeatureSelector {
    fn from(feature_id: &str) -> Self {
        Self::One(feature_id.to_string())
    }
}

impl From<Vec<String>> for FeatureSelector {
    fn from(feature_ids: Vec<String>) -> Self {
        Self::Many(feature_ids)
    }
}

/// Time range for `query`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryRange {
    /// Last 24 hours.
    #[serde(rename = "24h")]
    Day,
    /// Last 7 days.
    #[serde(rename = "7d")]
    Week,
    /// Last 30 days.
    #[serde(rename = "30d")]
    Month,
    /// Last 90 days.
    #[serde(rename = "90d")]
    Quarter,
    /// Current billing cycle.
    #[serde(rename = "last_cycle")]
    LastCycle,
}

/// Parameters for `query`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryParams {
    /// Customer whose usage is queried.
    pub customer_id: String,
    /// Features to aggregate.
    pub feature_id: FeatureSelector,
    /// Window to aggregate over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<QueryRange>,
}

/// Response of `query`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Aggregated usage buckets.
    #[serde(default)]
    pub list: Vec<Value>,
}
