//! Entity operations, nested under a customer.

use autumn_core::{Entity, EntityInput, GetEntityParams};
use futures::future::{BoxFuture, FutureExt};
use serde_json::Value;

use super::{expand_param, segment, with_query};
use crate::client::Autumn;
use crate::dispatch::{Operation, Outcome};

/// `GET /customers/{customer_id}/entities/{entity_id}`
pub const GET: Operation<(String, String, GetEntityParams), Entity> =
    Operation::new("entities.get", get);

/// `POST /customers/{customer_id}/entities`
pub const CREATE: Operation<(String, Vec<EntityInput>), Value> =
    Operation::new("entities.create", create);

/// `DELETE /customers/{customer_id}/entities/{entity_id}`
pub const DELETE: Operation<(String, String), Value> = Operation::new("entities.delete", delete);

fn get(
    client: &Autumn,
    (customer_id, entity_id, params): (String, String, GetEntityParams),
) -> BoxFuture<'_, Outcome<Entity>> {
    let path = with_query(
        format!(
            "/customers/{}/entities/{}",
            segment(&customer_id),
            segment(&entity_id)
        ),
        &[("expand", expand_param(&params.expand))],
    );
    async move { client.get(&path).await }.boxed()
}

fn create(
    client: &Autumn,
    (customer_id, entities): (String, Vec<EntityInput>),
) -> BoxFuture<'_, Outcome<Value>> {
    let path = format!("/customers/{}/entities", segment(&customer_id));
    async move { client.post(&path, &entities).await }.boxed()
}

fn delete(
    client: &Autumn,
    (customer_id, entity_id): (String, String),
) -> BoxFuture<'_, Outcome<Value>> {
    let path = format!(
        "/customers/{}/entities/{}",
        segment(&customer_id),
        segment(&entity_id)
    );
    async move { client.delete(&path).await }.boxed()
}
