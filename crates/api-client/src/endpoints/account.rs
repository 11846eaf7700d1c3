//! Notifications and site content endpoints

use crate::client::StorefrontClient;
use crate::error::ApiResult;
use serde_json::Value;

/// Account API interface
#[derive(Clone)]
pub struct AccountApi {
    client: StorefrontClient,
}

impl AccountApi {
    pub(crate) fn new(client: StorefrontClient) -> Self {
        Self { client }
    }

    /// GET /notifications/
    pub async fn notifications(&self) -> ApiResult<Value> {
        self.client.get("/notifications/").await
    }

    /// POST /notifications/{id}/read/ (no body)
    pub async fn mark_notification_read(&self, id: u64) -> ApiResult<Value> {
        self.client
            .post_empty(&format!("/notifications/{id}/read/"))
            .await
    }

    /// GET /home/
    pub async fn home(&self) -> ApiResult<Value> {
        self.client.get("/home/").await
    }

    /// GET /about/
    pub async fn about(&self) -> ApiResult<Value> {
        self.client.get("/about/").await
    }
}
