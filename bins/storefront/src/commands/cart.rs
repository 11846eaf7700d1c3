//! Cart commands

use crate::output::print_body;
use crate::OutputFormat;
use anyhow::Result;
use storefront_api_client::endpoints::{AddToCartRequest, UpdateCartItemRequest};
use storefront_api_client::StorefrontClient;

pub async fn show(client: &StorefrontClient, format: OutputFormat) -> Result<()> {
    let body = client.cart().get().await?;
    print_body("Cart", &body, format)
}

pub async fn add(
    client: &StorefrontClient,
    product_id: u64,
    qty: u32,
    format: OutputFormat,
) -> Result<()> {
    let body = client
        .cart()
        .add(&AddToCartRequest { product_id, qty })
        .await?;
    print_body("Cart", &body, format)
}

pub async fn update(
    client: &StorefrontClient,
    item_id: u64,
    qty: u32,
    format: OutputFormat,
) -> Result<()> {
    let body = client
        .cart()
        .update_item(&UpdateCartItemRequest { item_id, qty })
        .await?;
    print_body("Cart", &body, format)
}

pub async fn clear(client: &StorefrontClient, format: OutputFormat) -> Result<()> {
    let body = client.cart().clear().await?;
    print_body("Cart cleared", &body, format)
}
