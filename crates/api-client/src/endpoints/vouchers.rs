//! Voucher endpoints

use crate::client::StorefrontClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Vouchers API interface
#[derive(Clone)]
pub struct VouchersApi {
    client: StorefrontClient,
}

impl VouchersApi {
    pub(crate) fn new(client: StorefrontClient) -> Self {
        Self { client }
    }

    /// Buy a voucher
    ///
    /// POST /vouchers/purchase/
    pub async fn purchase<B: Serialize + ?Sized>(&self, voucher: &B) -> ApiResult<Value> {
        self.client.post("/vouchers/purchase/", voucher).await
    }

    /// List the current user's vouchers
    ///
    /// GET /vouchers/
    pub async fn list(&self) -> ApiResult<Value> {
        self.client.get("/vouchers/").await
    }
}

/// Body for [`VouchersApi::purchase`]
///
/// `value` is a decimal amount kept as a string so it reaches the server
/// exactly as typed (e.g. `"500.00"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseVoucherRequest {
    /// Face value of the voucher
    pub value: String,
}
