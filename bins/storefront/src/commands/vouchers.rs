//! Voucher commands

use crate::output::print_body;
use crate::OutputFormat;
use anyhow::Result;
use storefront_api_client::endpoints::PurchaseVoucherRequest;
use storefront_api_client::StorefrontClient;

pub async fn list(client: &StorefrontClient, format: OutputFormat) -> Result<()> {
    let body = client.vouchers().list().await?;
    print_body("Vouchers", &body, format)
}

pub async fn buy(client: &StorefrontClient, value: String, format: OutputFormat) -> Result<()> {
    let body = client
        .vouchers()
        .purchase(&PurchaseVoucherRequest { value })
        .await?;
    print_body("Voucher purchased", &body, format)
}
