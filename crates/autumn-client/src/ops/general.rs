//! Top-level billing operations.

use autumn_core::{
    AttachParams, AttachResponse, CancelParams, CancelResponse, CheckParams, CheckResponse,
    CheckoutParams, CheckoutResponse, QueryParams, QueryResponse, SetupPaymentParams,
    SetupPaymentResponse, TrackParams, TrackResponse, UsageParams,
};
use futures::future::{BoxFuture, FutureExt};

use crate::client::Autumn;
use crate::dispatch::{Operation, Outcome};

/// `POST /checkout`
pub const CHECKOUT: Operation<CheckoutParams, CheckoutResponse> =
    Operation::new("checkout", checkout);

/// `POST /attach`
pub const ATTACH: Operation<AttachParams, AttachResponse> = Operation::new("attach", attach);

/// `POST /setup_payment`
pub const SETUP_PAYMENT: Operation<SetupPaymentParams, SetupPaymentResponse> =
    Operation::new("setup_payment", setup_payment);

/// `POST /cancel`
pub const CANCEL: Operation<CancelParams, CancelResponse> = Operation::new("cancel", cancel);

/// `POST /check`
pub const CHECK: Operation<CheckParams, CheckResponse> = Operation::new("check", check);

/// `POST /track`
pub const TRACK: Operation<TrackParams, TrackResponse> = Operation::new("track", track);

/// `POST /usage`
pub const USAGE: Operation<UsageParams, TrackResponse> = Operation::new("usage", usage);

/// `POST /query`
pub const QUERY: Operation<QueryParams, QueryResponse> = Operation::new("query", query);

fn checkout(client: &Autumn, params: CheckoutParams) -> BoxFuture<'_, Outcome<CheckoutResponse>> {
    async move { client.post("/checkout", &params).await }.boxed()
}

fn attach(client: &Autumn, params: AttachParams) -> BoxFuture<'_, Outcome<AttachResponse>> {
    async move { client.post("/attach", &params).await }.boxed()
}

fn setup_payment(
    client: &Autumn,
    params: SetupPaymentParams,
) -> BoxFuture<'_, Outcome<SetupPaymentResponse>> {
    async move { client.post("/setup_payment", &params).await }.boxed()
}

fn cancel(client: &Autumn, params: CancelParams) -> BoxFuture<'_, Outcome<CancelResponse>> {
    async move { client.post("/cancel", &params).await }.boxed()
}

fn check(client: &Autumn, params: CheckParams) -> BoxFuture<'_, Outcome<CheckResponse>> {
    async move { client.post("/check", &params).await }.boxed()
}

fn track(client: &Autumn, params: TrackParams) -> BoxFuture<'_, Outcome<TrackResponse>> {
    async move { client.post("/track", &params).await }.boxed()
}

fn usage(client: &Autumn, params: UsageParams) -> BoxFuture<'_, Outcome<TrackResponse>> {
    async move { client.post("/usage", &params).await }.boxed()
}

fn query(client: &Autumn, params: QueryParams) -> BoxFuture<'_, Outcome<QueryResponse>> {
    async move { client.post("/query", &params).await }.boxed()
}
