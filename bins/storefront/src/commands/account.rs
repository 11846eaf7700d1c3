//! Notification commands

use crate::output::print_body;
use crate::OutputFormat;
use anyhow::Result;
use storefront_api_client::StorefrontClient;

pub async fn notifications(client: &StorefrontClient, format: OutputFormat) -> Result<()> {
    let body = client.account().notifications().await?;
    print_body("Notifications", &body, format)
}

pub async fn mark_read(client: &StorefrontClient, id: u64, format: OutputFormat) -> Result<()> {
    let body = client.account().mark_notification_read(id).await?;
    print_body(&format!("Notification {id}"), &body, format)
}
