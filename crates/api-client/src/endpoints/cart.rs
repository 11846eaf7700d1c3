//! Shopping cart endpoints

use crate::client::StorefrontClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Cart API interface
#[derive(Clone)]
pub struct CartApi {
    client: StorefrontClient,
}

impl CartApi {
    pub(crate) fn new(client: StorefrontClient) -> Self {
        Self { client }
    }

    /// Fetch the current user's cart
    ///
    /// GET /cart/
    pub async fn get(&self) -> ApiResult<Value> {
        self.client.get("/cart/").await
    }

    /// Add a product to the cart
    ///
    /// POST /cart/add/
    pub async fn add<B: Serialize + ?Sized>(&self, item: &B) -> ApiResult<Value> {
        self.client.post("/cart/add/", item).await
    }

    /// Change the quantity of a cart line; the server drops lines set to zero
    ///
    /// PATCH /cart/update_item/
    pub async fn update_item<B: Serialize + ?Sized>(&self, update: &B) -> ApiResult<Value> {
        self.client.patch("/cart/update_item/", update).await
    }

    /// Empty the cart
    ///
    /// DELETE /cart/clear/
    pub async fn clear(&self) -> ApiResult<Value> {
        self.client.delete("/cart/clear/").await
    }
}

/// Body for [`CartApi::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToCartRequest {
    /// Product to add
    pub product_id: u64,
    /// Quantity to add
    pub qty: u32,
}

/// Body for [`CartApi::update_item`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCartItemRequest {
    /// Cart line to change
    pub item_id: u64,
    /// New quantity; `0` removes the line
    pub qty: u32,
}
