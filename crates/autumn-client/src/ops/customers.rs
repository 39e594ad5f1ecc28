//! Customer operations.

use autumn_core::{
    BillingPortalParams, BillingPortalResponse, CreateCustomerParams, Customer, CustomerList,
    GetCustomerParams, ListCustomersParams, UpdateCustomerParams,
};
use futures::future::{BoxFuture, FutureExt};
use serde_json::Value;

use super::{expand_param, segment, with_query};
use crate::client::Autumn;
use crate::dispatch::{Operation, Outcome};

/// `GET /customers/{id}`
pub const GET: Operation<(String, GetCustomerParams), Customer> =
    Operation::new("customers.get", get);

/// `GET /customers`
pub const LIST: Operation<ListCustomersParams, CustomerList> =
    Operation::new("customers.list", list);

/// `POST /customers`
pub const CREATE: Operation<CreateCustomerParams, Customer> =
    Operation::new("customers.create", create);

/// `POST /customers/{id}`
pub const UPDATE: Operation<(String, UpdateCustomerParams), Customer> =
    Operation::new("customers.update", update);

/// `DELETE /customers/{id}`
pub const DELETE: Operation<String, Value> = Operation::new("customers.delete", delete);

/// `POST /customers/{id}/billing_portal`
pub const BILLING_PORTAL: Operation<(String, BillingPortalParams), BillingPortalResponse> =
    Operation::new("customers.billing_portal", billing_portal);

fn get(
    client: &Autumn,
    (id, params): (String, GetCustomerParams),
) -> BoxFuture<'_, Outcome<Customer>> {
    let path = with_query(
        format!("/customers/{}", segment(&id)),
        &[("expand", expand_param(&params.expand))],
    );
    async move { client.get(&path).await }.boxed()
}

fn list(client: &Autumn, params: ListCustomersParams) -> BoxFuture<'_, Outcome<CustomerList>> {
    let path = with_query(
        "/customers".to_string(),
        &[
            ("limit", params.limit.map(|n| n.to_string())),
            ("offset", params.offset.map(|n| n.to_string())),
        ],
    );
    async move { client.get(&path).await }.boxed()
}

fn create(client: &Autumn, params: CreateCustomerParams) -> BoxFuture<'_, Outcome<Customer>> {
    let path = with_query(
        "/customers".to_string(),
        &[("expand", expand_param(&params.expand))],
    );
    async move { client.post(&path, &params).await }.boxed()
}

fn update(
    client: &Autumn,
    (id, params): (String, UpdateCustomerParams),
) -> BoxFuture<'_, Outcome<Customer>> {
    let path = format!("/customers/{}", segment(&id));
    async move { client.post(&path, &params).await }.boxed()
}

fn delete(client: &Autumn, id: String) -> BoxFuture<'_, Outcome<Value>> {
    let path = format!("/customers/{}", segment(&id));
    async move { client.delete(&path).await }.boxed()
}

fn billing_portal(
    client: &Autumn,
    (id, params): (String, BillingPortalParams),
) -> BoxFuture<'_, Outcome<BillingPortalResponse>> {
    let path = format!("/customers/{}/billing_portal", segment(&id));
    async move { client.post(&path, &params).await }.boxed()
}
