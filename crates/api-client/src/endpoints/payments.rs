//! Payment endpoints

use crate::client::StorefrontClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Payments API interface
#[derive(Clone)]
pub struct PaymentsApi {
    client: StorefrontClient,
}

impl PaymentsApi {
    pub(crate) fn new(client: StorefrontClient) -> Self {
        Self { client }
    }

    /// Start a payment for an order
    ///
    /// POST /payment/initiate/
    pub async fn initiate<B: Serialize + ?Sized>(&self, payment: &B) -> ApiResult<Value> {
        self.client.post("/payment/initiate/", payment).await
    }

    /// Payment status of an order
    ///
    /// GET /payment/status/{order_id}/
    pub async fn status(&self, order_id: u64) -> ApiResult<Value> {
        self.client
            .get(&format!("/payment/status/{order_id}/"))
            .await
    }
}

/// Payment providers the backend can route to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentGateway {
    /// Razorpay
    Razorpay,
    /// PayU
    Payu,
    /// Stripe
    Stripe,
    /// PayPal
    Paypal,
}

impl PaymentGateway {
    /// Wire name of the gateway
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Razorpay => "razorpay",
            Self::Payu => "payu",
            Self::Stripe => "stripe",
            Self::Paypal => "paypal",
        }
    }
}

impl fmt::Display for PaymentGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentGateway {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "razorpay" => Ok(Self::Razorpay),
            "payu" => Ok(Self::Payu),
            "stripe" => Ok(Self::Stripe),
            "paypal" => Ok(Self::Paypal),
            other => Err(format!(
                "unknown payment gateway '{other}' (expected razorpay, payu, stripe or paypal)"
            )),
        }
    }
}

/// Body for [`PaymentsApi::initiate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitiatePaymentRequest {
    /// Order being paid
    pub order_id: u64,
    /// Provider to route the payment through
    pub payment_gateway: PaymentGateway,
}
