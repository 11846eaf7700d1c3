//! Payment commands

use crate::output::print_body;
use crate::OutputFormat;
use anyhow::Result;
use storefront_api_client::endpoints::{InitiatePaymentRequest, PaymentGateway};
use storefront_api_client::StorefrontClient;

pub async fn initiate(
    client: &StorefrontClient,
    order_id: u64,
    payment_gateway: PaymentGateway,
    format: OutputFormat,
) -> Result<()> {
    let request = InitiatePaymentRequest {
        order_id,
        payment_gateway,
    };
    let body = client.payments().initiate(&request).await?;
    print_body(&format!("Payment via {payment_gateway}"), &body, format)
}

pub async fn status(client: &StorefrontClient, order_id: u64, format: OutputFormat) -> Result<()> {
    let body = client.payments().status(order_id).await?;
    print_body(&format!("Payment status of order {order_id}"), &body, format)
}
