//! Feature catalog operations.

use autumn_core::{Feature, FeatureList};
use futures::future::{BoxFuture, FutureExt};

use super::segment;
use crate::client::Autumn;
use crate::dispatch::{Operation, Outcome};

/// `GET /features`
pub const LIST: Operation<(), FeatureList> = Operation::new("features.list", list);

/// `GET /features/{id}`
pub const GET: Operation<String, Feature> = Operation::new("features.get", get);

fn list(client: &Autumn, (): ()) -> BoxFuture<'_, Outcome<FeatureList>> {
    async move { client.get("/features").await }.boxed()
}

fn get(client: &Autumn, id: String) -> BoxFuture<'_, Outcome<Feature>> {
    let path = format!("/features/{}", segment(&id));
    async move { client.get(&path).await }.boxed()
}
