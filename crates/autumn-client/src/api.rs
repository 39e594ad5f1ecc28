//! Public operation surfaces.
//!
//! [`Api`] exposes every operation against a [`Target`]: bound to a client
//! (`client.api()`) or ambient (`Autumn::ambient()`). The general operations
//! are also inherent methods on [`Autumn`] and crate-level functions; all
//! three spellings come from one macro table and share
//! the handlers in [`crate::ops`].

use autumn_core::{
    AttachParams, AttachResponse, BillingPortalParams, BillingPortalResponse, CancelParams,
    CancelResponse, CheckParams, CheckResponse, CheckoutParams, CheckoutResponse,
    CreateCustomerParams, CreateProductParams, CreateReferralCodeParams, Customer, CustomerList,
    DeleteProductParams, Entity, EntityInput, Feature, FeatureList, GetCustomerParams,
    GetEntityParams, ListCustomersParams, ListProductsParams, Product, ProductList, QueryParams,
    QueryResponse, RedeemReferralCodeParams, ReferralCode, ReferralRedemption,
    SetupPaymentParams, SetupPaymentResponse, TrackParams, TrackResponse, UpdateCustomerParams,
    UsageParams,
};
use serde_json::Value;

use crate::client::Autumn;
use crate::dispatch::{Outcome, Target};
use crate::ops;

/// Operation surface for one [`Target`].
#[derive(Debug, Clone)]
pub struct Api<'a> {
    target: Target<'a>,
}

impl<'a> Api<'a> {
    pub(crate) fn new(target: Target<'a>) -> Self {
        Self { target }
    }

    /// Customer operations.
    #[must_use]
    pub fn customers(&self) -> Customers<'a> {
        Customers {
            target: self.target.clone(),
        }
    }

    /// Entity operations.
    #[must_use]
    pub fn entities(&self) -> Entities<'a> {
        Entities {
            target: self.target.clone(),
        }
    }

    /// Product operations.
    #[must_use]
    pub fn products(&self) -> Products<'a> {
        Products {
            target: self.target.clone(),
        }
    }

    /// Referral operations.
    #[must_use]
    pub fn referrals(&self) -> Referrals<'a> {
        Referrals {
            target: self.target.clone(),
        }
    }

    /// Feature operations.
    #[must_use]
    pub fn features(&self) -> Features<'a> {
        Features {
            target: self.target.clone(),
        }
    }
}

/// Generates, for each general operation, a method on [`Api`], an inherent
/// method on [`Autumn`] and a crate-level static-form function.
macro_rules! general_operations {
    ($($(#[$doc:meta])* $name:ident($params:ty) -> $response:ty => $op:expr;)*) => {
        impl Api<'_> {
            $(
                $(#[$doc])*
                ///
                /// # Errors
                ///
                /// Fails only when no response was received, or, in static
                /// form, when no ambient credential is set.
                pub async fn $name(&self, params: $params) -> Outcome<$response> {
                    $op.dispatch(&self.target, params).await
                }
            )*
        }

        impl Autumn {
            $(
                $(#[$doc])*
                ///
                /// # Errors
                ///
                /// Fails only when no response was received.
                pub async fn $name(&self, params: $params) -> Outcome<$response> {
                    $op.call(self, params).await
                }
            )*
        }

        $(
            $(#[$doc])*
            ///
            /// Static form: uses a client built from the process environment.
            ///
            /// # Errors
            ///
            /// Fails when no ambient credential is set or no response was
            /// received.
            pub async fn $name(params: $params) -> Outcome<$response> {
                Autumn::ambient().$name(params).await
            }
        )*
    };
}

general_operations! {
    /// Start a checkout for a product.
    checkout(CheckoutParams) -> CheckoutResponse => ops::general::CHECKOUT;
    /// Attach a product to a customer.
    attach(AttachParams) -> AttachResponse => ops::general::ATTACH;
    /// Open a session to collect a payment method.
    setup_payment(SetupPaymentParams) -> SetupPaymentResponse => ops::general::SETUP_PAYMENT;
    /// Cancel a customer's product.
    cancel(CancelParams) -> CancelResponse => ops::general::CANCEL;
    /// Check whether a customer may use a feature or product.
    check(CheckParams) -> CheckResponse => ops::general::CHECK;
    /// Record usage of a feature.
    track(TrackParams) -> TrackResponse => ops::general::TRACK;
    /// Set the absolute usage of a feature.
    usage(UsageParams) -> TrackResponse => ops::general::USAGE;
    /// Aggregate a customer's usage over time.
    query(QueryParams) -> QueryResponse => ops::general::QUERY;
}

impl Autumn {
    /// Customer operations bound to this client.
    #[must_use]
    pub fn customers(&self) -> Customers<'_> {
        self.api().customers()
    }

    /// Entity operations bound to this client.
    #[must_use]
    pub fn entities(&self) -> Entities<'_> {
        self.api().entities()
    }

    /// Product operations bound to this client.
    #[must_use]
    pub fn products(&self) -> Products<'_> {
        self.api().products()
    }

    /// Referral operations bound to this client.
    #[must_use]
    pub fn referrals(&self) -> Referrals<'_> {
        self.api().referrals()
    }

    /// Feature operations bound to this client.
    #[must_use]
    pub fn features(&self) -> Features<'_> {
        self.api().features()
    }
}

/// Customer operations.
#[derive(Debug, Clone)]
pub struct Customers<'a> {
    target: Target<'a>,
}

impl Customers<'_> {
    /// Fetch a customer.
    ///
    /// # Errors
    ///
    /// See [`Outcome`].
    pub async fn get(
        &self,
        id: impl Into<String>,
        params: GetCustomerParams,
    ) -> Outcome<Customer> {
        ops::customers::GET
            .dispatch(&self.target, (id.into(), params))
            .await
    }

    /// List customers.
    ///
    /// # Errors
    ///
    /// See [`Outcome`].
    pub async fn list(&self, params: ListCustomersParams) -> Outcome<CustomerList> {
        ops::customers::LIST.dispatch(&self.target, params).await
    }

    /// Create a customer.
    ///
    /// # Errors
    ///
    /// See [`Outcome`].
    pub async fn create(&self, params: CreateCustomerParams) -> Outcome<Customer> {
        ops::customers::CREATE.dispatch(&self.target, params).await
    }

    /// Update a customer.
    ///
    /// # Errors
    ///
    /// See [`Outcome`].
    pub async fn update(
        &self,
        id: impl Into<String>,
        params: UpdateCustomerParams,
    ) -> Outcome<Customer> {
        ops::customers::UPDATE
            .dispatch(&self.target, (id.into(), params))
            .await
    }

    /// Delete a customer.
    ///
    /// # Errors
    ///
    /// See [`Outcome`].
    pub async fn delete(&self, id: impl Into<String>) -> Outcome<Value> {
        ops::customers::DELETE.dispatch(&self.target, id.into()).await
    }

    /// Open the billing portal for a customer.
    ///
    /// # Errors
    ///
    /// See [`Outcome`].
    pub async fn billing_portal(
        &self,
        id: impl Into<String>,
        params: BillingPortalParams,
    ) -> Outcome<BillingPortalResponse> {
        ops::customers::BILLING_PORTAL
            .dispatch(&self.target, (id.into(), params))
            .await
    }
}

/// Entity operations.
#[derive(Debug, Clone)]
pub struct Entities<'a> {
    target: Target<'a>,
}

impl Entities<'_> {
    /// Fetch one entity of a customer.
    ///
    /// # Errors
    ///
    /// See [`Outcome`].
    pub async fn get(
        &self,
        customer_id: impl Into<String>,
        entity_id: impl Into<String>,
        params: GetEntityParams,
    ) -> Outcome<Entity> {
        ops::entities::GET
            .dispatch(&self.target, (customer_id.into(), entity_id.into(), params))
            .await
    }

    /// Create entities for a customer.
    ///
    /// # Errors
    ///
    /// See [`Outcome`].
    pub async fn create(
        &self,
        customer_id: impl Into<String>,
        entities: Vec<EntityInput>,
    ) -> Outcome<Value> {
        ops::entities::CREATE
            .dispatch(&self.target, (customer_id.into(), entities))
            .await
    }

    /// Delete an entity.
    ///
    /// # Errors
    ///
    /// See [`Outcome`].
    pub async fn delete(
        &self,
        customer_id: impl Into<String>,
        entity_id: impl Into<String>,
    ) -> Outcome<Value> {
        ops::entities::DELETE
            .dispatch(&self.target, (customer_id.into(), entity_id.into()))
            .await
    }
}

/// Product operations.
#[derive(Debug, Clone)]
pub struct Products<'a> {
    target: Target<'a>,
}

impl Products<'_> {
    /// Fetch a product.
    ///
    /// # Errors
    ///
    /// See [`Outcome`].
    pub async fn get(&self, id: impl Into<String>) -> Outcome<Product> {
        ops::products::GET.dispatch(&self.target, id.into()).await
    }

    /// List the catalog.
    ///
    /// # Errors
    ///
    /// See [`Outcome`].
    pub async fn list(&self, params: ListProductsParams) -> Outcome<ProductList> {
        ops::products::LIST.dispatch(&self.target, params).await
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// See [`Outcome`].
    pub async fn create(&self, params: CreateProductParams) -> Outcome<Product> {
        ops::products::CREATE.dispatch(&self.target, params).await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// See [`Outcome`].
    pub async fn delete(
        &self,
        id: impl Into<String>,
        params: DeleteProductParams,
    ) -> Outcome<Value> {
        ops::products::DELETE
            .dispatch(&self.target, (id.into(), params))
            .await
    }
}

/// Referral operations.
#[derive(Debug, Clone)]
pub struct Referrals<'a> {
    target: Target<'a>,
}

impl Referrals<'_> {
    /// Create a referral code for a customer.
    ///
    /// # Errors
    ///
    /// See [`Outcome`].
    pub async fn create_code(&self, params: CreateReferralCodeParams) -> Outcome<ReferralCode> {
        ops::referrals::CREATE_CODE.dispatch(&self.target, params).await
    }

    /// Redeem a referral code.
    ///
    /// # Errors
    ///
    /// See [`Outcome`].
    pub async fn redeem_code(
        &self,
        params: RedeemReferralCodeParams,
    ) -> Outcome<ReferralRedemption> {
        ops::referrals::REDEEM_CODE.dispatch(&self.target, params).await
    }
}

/// Feature operations.
#[derive(Debug, Clone)]
pub struct Features<'a> {
    target: Target<'a>,
}

impl Features<'_> {
    /// List features.
    ///
    /// # Errors
    ///
    /// See [`Outcome`].
    pub async fn list(&self) -> Outcome<FeatureList> {
        ops::features::LIST.dispatch(&self.target, ()).await
    }

    /// Fetch a feature.
    ///
    /// # Errors
    ///
    /// See [`Outcome`].
    pub async fn get(&self, id: impl Into<String>) -> Outcome<Feature> {
        ops::features::GET.dispatch(&self.target, id.into()).await
    }
}
