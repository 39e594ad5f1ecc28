//! Product catalog operations.

use autumn_core::{
    CreateProductParams, DeleteProductParams, ListProductsParams, Product, ProductList,
};
use futures::future::{BoxFuture, FutureExt};
use serde_json::Value;

use super::{segment, with_query};
use crate::client::Autumn;
use crate::dispatch::{Operation, Outcome};

/// `GET /products/{id}`
pub const GET: Operation<String, Product> = Operation::new("products.get", get);

/// `GET /products`
pub const LIST: Operation<ListProductsParams, ProductList> =
    Operation::new("products.list", list);

/// `POST /products`
pub const CREATE: Operation<CreateProductParams, Product> =
    Operation::new("products.create", create);

/// `DELETE /products/{id}`
pub const DELETE: Operation<(String, DeleteProductParams), Value> =
    Operation::new("products.delete", delete);

fn get(client: &Autumn, id: String) -> BoxFuture<'_, Outcome<Product>> {
    let path = format!("/products/{}", segment(&id));
    async move { client.get(&path).await }.boxed()
}

fn list(client: &Autumn, params: ListProductsParams) -> BoxFuture<'_, Outcome<ProductList>> {
    let path = with_query("/products".to_string(), &[("customer_id", params.customer_id)]);
    async move { client.get(&path).await }.boxed()
}

fn create(client: &Autumn, params: CreateProductParams) -> BoxFuture<'_, Outcome<Product>> {
    async move { client.post("/products", &params).await }.boxed()
}

fn delete(
    client: &Autumn,
    (id, params): (String, DeleteProductParams),
) -> BoxFuture<'_, Outcome<Value>> {
    let path = with_query(
        format!("/products/{}", segment(&id)),
        &[("all_versions", params.all_versions.then(|| "true".to_string()))],
    );
    async move { client.delete(&path).await }.boxed()
}
