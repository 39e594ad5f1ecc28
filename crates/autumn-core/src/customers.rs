//! Customer and entity types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Details used to create a customer on first contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerData {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Fingerprint used to detect duplicate free-tier signups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

/// Optional sections of a customer the backend can embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerExpand {
    /// Past invoices.
    Invoices,
    /// Rewards granted.
    Rewards,
    /// Free trials already used.
    TrialsUsed,
    /// Entities owned by the customer.
    Entities,
    /// Referrals made by the customer.
    Referrals,
    /// Default payment method.
    PaymentMethod,
}

impl CustomerExpand {
    /// The query-string spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Invoices => "invoices",
            Self::Rewards => "rewards",
            Self::TrialsUsed => "trials_used",
            Self::Entities => "entities",
            Self::Referrals => "referrals",
            Self::PaymentMethod => "payment_method",
        }
    }
}

/// Product attached to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProduct {
    /// Product identifier.
    pub id: String,
    /// Product name.
    #[serde(default)]
    pub name: Option<String>,
    /// Product group.
    #[serde(default)]
    pub group: Option<String>,
    /// Status such as `active`, `trialing`, `scheduled`.
    pub status: String,
    /// Whether the product is an add-on.
    #[serde(default)]
    pub is_add_on: bool,
    /// Start, in epoch milliseconds.
    #[serde(default)]
    pub started_at: Option<i64>,
    /// Cancellation time, in epoch milliseconds.
    #[serde(default)]
    pub canceled_at: Option<i64>,
    /// Current billing period start.
    #[serde(default)]
    pub current_period_start: Option<i64>,
    /// Current billing period end.
    #[serde(default)]
    pub current_period_end: Option<i64>,
}

/// Balance of one feature for a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerFeature {
    /// Feature identifier.
    pub id: String,
    /// Feature name.
    #[serde(default)]
    pub name: Option<String>,
    /// Feature kind (`static`, `single_use`, `continuous_use`).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Whether the feature is unlimited.
    #[serde(default)]
    pub unlimited: Option<bool>,
    /// Remaining balance.
    #[serde(default)]
    pub balance: Option<f64>,
    /// Usage in the current interval.
    #[serde(default)]
    pub usage: Option<f64>,
    /// Usage included in the plan.
    #[serde(default)]
    pub included_usage: Option<f64>,
    /// Next reset, in epoch milliseconds.
    #[serde(default)]
    pub next_reset_at: Option<i64>,
    /// Reset interval.
    #[serde(default)]
    pub interval: Option<String>,
}

/// A customer as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Caller-chosen identifier; `None` for anonymous customers.
    #[serde(default)]
    pub id: Option<String>,
    /// Creation time, in epoch milliseconds.
    #[serde(default)]
    pub created_at: Option<i64>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Duplicate-detection fingerprint.
    #[serde(default)]
    pub fingerprint: Option<String>,
    /// Payment provider customer id.
    #[serde(default)]
    pub stripe_id: Option<String>,
    /// `sandbox` or `live`.
    #[serde(default)]
    pub env: Option<String>,
    /// Arbitrary metadata.
    #[serde(default)]
    pub metadata: Option<Value>,
    /// Products attached to the customer.
    #[serde(default)]
    pub products: Vec<CustomerProduct>,
    /// Feature balances keyed by feature id.
    #[serde(default)]
    pub features: BTreeMap<String, CustomerFeature>,
    /// Sections requested via `expand`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoices: Option<Vec<Value>>,
    /// Entities, when expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Value>>,
}

/// Parameters for `customers.get`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCustomerParams {
    /// Sections to embed.
    pub expand: Vec<CustomerExpand>,
}

/// Parameters for `customers.list`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCustomersParams {
    /// Page size.
    pub limit: Option<u32>,
    /// Page offset.
    pub offset: Option<u32>,
}

/// Page of customers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerList {
    /// Customers on this page.
    pub list: Vec<Customer>,
    /// Total customers matching.
    #[serde(default)]
    pub total: Option<u64>,
    /// Page size used.
    #[serde(default)]
    pub limit: Option<u32>,
    /// Page offset used.
    #[serde(default)]
    pub offset: Option<u32>,
}

/// Parameters for `customers.create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCustomerParams {
    /// Identifier chosen by the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Duplicate-detection fingerprint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    /// Arbitrary metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    /// Sections to embed in the response.
    #[serde(skip)]
    pub expand: Vec<CustomerExpand>,
}

/// Parameters for `customers.update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCustomerParams {
    /// New identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New fingerprint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    /// Replacement metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Parameters for `customers.billing_portal`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingPortalParams {
    /// Where the portal's back button leads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
}

/// Response of `customers.billing_portal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingPortalResponse {
    /// Customer the portal was opened for.
    pub customer_id: String,
    /// Portal URL.
    pub url: String,
}

/// A sub-account of a customer (seat, workspace, project...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Owning customer.
    #[serde(default)]
    pub customer_id: Option<String>,
    /// Feature the entity counts against.
    #[serde(default)]
    pub feature_id: Option<String>,
    /// Creation time, in epoch milliseconds.
    #[serde(default)]
    pub created_at: Option<i64>,
    /// `sandbox` or `live`.
    #[serde(default)]
    pub env: Option<String>,
    /// Products attached to the entity.
    #[serde(default)]
    pub products: Vec<CustomerProduct>,
    /// Feature balances keyed by feature id.
    #[serde(default)]
    pub features: BTreeMap<String, CustomerFeature>,
}

/// One entity to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityInput {
    /// Entity identifier.
    pub id: String,
    /// Feature the entity counts against.
    pub feature_id: String,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Parameters for `entities.get`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetEntityParams {
    /// Sections to embed.
    pub expand: Vec<CustomerExpand>,
}
