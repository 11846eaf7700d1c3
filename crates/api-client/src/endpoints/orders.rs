//! Order endpoints

use crate::client::StorefrontClient;
use crate::error::ApiResult;
use serde_json::Value;

/// Orders API interface
#[derive(Clone)]
pub struct OrdersApi {
    client: StorefrontClient,
}

impl OrdersApi {
    pub(crate) fn new(client: StorefrontClient) -> Self {
        Self { client }
    }

    /// List the current user's orders
    ///
    /// GET /orders/
    pub async fn list(&self) -> ApiResult<Value> {
        self.client.get("/orders/").await
    }

    /// Turn the current cart into an order
    ///
    /// POST /orders/create/ (no body)
    pub async fn create(&self) -> ApiResult<Value> {
        self.client.post_empty("/orders/create/").await
    }
}
