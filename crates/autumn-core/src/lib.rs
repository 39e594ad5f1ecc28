//! Core types for the Autumn billing client.
//!
//! This crate holds the transport-independent data model:
//!
//! - **Results**: `ApiResult`, `ApiError`, `ErrorCode`
//! - **General operations**: `CheckoutParams`, `AttachParams`, `CheckParams`, `TrackParams`, ...
//! - **Customers and entities**: `Customer`, `Entity`, `CustomerData`, `CustomerExpand`
//! - **Catalog**: `Product`, `Feature`, referral codes
//!
//! Optional request fields are omitted from the JSON body when unset; response
//! types default missing fields so older and newer API versions both decode.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod customers;
pub mod general;
pub mod products;
pub mod result;

pub use customers::{
    BillingPortalParams, BillingPortalResponse, CreateCustomerParams, Customer, CustomerData,
    CustomerExpand, CustomerFeature, CustomerList, CustomerProduct, Entity, EntityInput,
    GetCustomerParams, GetEntityParams, ListCustomersParams, UpdateCustomerParams,
};
pub use general::{
    AttachParams, AttachResponse, CancelParams, CancelResponse, CheckParams, CheckResponse,
    CheckoutLine, CheckoutParams, CheckoutResponse, FeatureOption, FeatureSelector, QueryParams,
    QueryRange, QueryResponse, SetupPaymentParams, SetupPaymentResponse, TrackParams,
    TrackResponse, UsageParams,
};
pub use products::{
    CreateProductParams, CreateReferralCodeParams, DeleteProductParams, Feature, FeatureList,
    ListProductsParams, Product, ProductList, RedeemReferralCodeParams, ReferralCode,
    ReferralRedemption,
};
pub use result::{ApiError, ApiResult, ErrorCode, INVALID_RESPONSE_CODE, UNKNOWN_ERROR_CODE};
