//! Product, feature and referral catalog types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A product (plan or add-on) in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Internal identifier assigned by the backend.
    #[serde(default)]
    pub autumn_id: Option<String>,
    /// Group used for upgrade/downgrade logic.
    #[serde(default)]
    pub group: Option<String>,
    /// `sandbox` or `live`.
    #[serde(default)]
    pub env: Option<String>,
    /// Whether the product is an add-on.
    #[serde(default)]
    pub is_add_on: bool,
    /// Whether the product is attached to new customers.
    #[serde(default)]
    pub is_default: bool,
    /// Catalog version.
    #[serde(default)]
    pub version: Option<u32>,
    /// Creation time, in epoch milliseconds.
    #[serde(default)]
    pub created_at: Option<i64>,
    /// Prices and feature grants.
    #[serde(default)]
    pub items: Vec<Value>,
    /// Trial configuration.
    #[serde(default)]
    pub free_trial: Option<Value>,
}

/// Parameters for `products.list`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListProductsParams {
    /// Annotate products with the customer's eligibility.
    pub customer_id: Option<String>,
}

/// Catalog listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductList {
    /// Products.
    pub list: Vec<Product>,
}

/// Parameters for `products.create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateProductParams {
    /// Product identifier.
    pub id: String,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Upgrade/downgrade group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Whether the product is an add-on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_add_on: Option<bool>,
    /// Whether the product is attached to new customers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    /// Prices and feature grants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Value>>,
    /// Trial configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_trial: Option<Value>,
}

/// Parameters for `products.delete`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteProductParams {
    /// Delete every version rather than only the latest.
    pub all_versions: bool,
}

/// A feature in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Feature identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Feature kind (`boolean`, `single_use`, `continuous_use`, `credit_system`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Singular/plural display labels.
    #[serde(default)]
    pub display: Option<Value>,
    /// Cost of each metered feature, for credit systems.
    #[serde(default)]
    pub credit_schema: Option<Vec<Value>>,
    /// Whether the feature is archived.
    #[serde(default)]
    pub archived: bool,
}

/// Feature listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureList {
    /// Features.
    pub list: Vec<Feature>,
}

/// Parameters for `referrals.create_code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReferralCodeParams {
    /// Customer who will share the code.
    pub customer_id: String,
    /// Referral program the code belongs to.
    pub program_id: String,
}

/// A referral code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralCode {
    /// Shareable code.
    pub code: String,
    /// Customer owning the code.
    pub customer_id: String,
    /// Creation time, in epoch milliseconds.
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// Parameters for `referrals.redeem_code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedeemReferralCodeParams {
    /// Code being redeemed.
    pub code: String,
    /// Customer redeeming it.
    pub customer_id: String,
}

/// Result of redeeming a referral code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralRedemption {
    /// Redemption identifier.
    pub id: String,
    /// Customer who redeemed.
    pub customer_id: String,
    /// Reward granted.
    #[serde(default)]
    pub reward_id: Option<String>,
    /// Whether the reward was applied already.
    #[serde(default)]
    pub applied: bool,
}
