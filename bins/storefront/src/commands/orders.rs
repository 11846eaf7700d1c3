//! Order commands

use crate::output::print_body;
use crate::OutputFormat;
use anyhow::Result;
use storefront_api_client::StorefrontClient;

pub async fn list(client: &StorefrontClient, format: OutputFormat) -> Result<()> {
    let body = client.orders().list().await?;
    print_body("Orders", &body, format)
}

pub async fn create(client: &StorefrontClient, format: OutputFormat) -> Result<()> {
    let body = client.orders().create().await?;
    print_body("Order placed", &body, format)
}
