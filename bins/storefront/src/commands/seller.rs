//! Seller catalog commands

use super::parse_data;
use crate::output::print_body;
use crate::OutputFormat;
use anyhow::{Context, Result};
use std::path::Path;
use storefront_api_client::endpoints::{ImagePart, ImageUpload};
use storefront_api_client::StorefrontClient;
use tracing::debug;

pub async fn products(client: &StorefrontClient, format: OutputFormat) -> Result<()> {
    let body = client.seller().products().await?;
    print_body("My products", &body, format)
}

pub async fn get(client: &StorefrontClient, id: u64, format: OutputFormat) -> Result<()> {
    let body = client.seller().product(id).await?;
    print_body(&format!("Product {id}"), &body, format)
}

pub async fn create(client: &StorefrontClient, data: &str, format: OutputFormat) -> Result<()> {
    let product = parse_data(data)?;
    let body = client.seller().create_product(&product).await?;
    print_body("Product created", &body, format)
}

pub async fn update(
    client: &StorefrontClient,
    id: u64,
    data: &str,
    format: OutputFormat,
) -> Result<()> {
    let changes = parse_data(data)?;
    let body = client.seller().update_product(id, &changes).await?;
    print_body(&format!("Product {id} updated"), &body, format)
}

pub async fn delete(client: &StorefrontClient, id: u64, format: OutputFormat) -> Result<()> {
    let body = client.seller().delete_product(id).await?;
    print_body(&format!("Product {id} deleted"), &body, format)
}

pub async fn upload(
    client: &StorefrontClient,
    product_id: u64,
    files: &[String],
    format: OutputFormat,
) -> Result<()> {
    let mut upload = ImageUpload::new(product_id);
    for file in files {
        let bytes = tokio::fs::read(file)
            .await
            .with_context(|| format!("Failed to read {file}"))?;
        let name = Path::new(file)
            .file_name()
            .map_or_else(|| file.clone(), |n| n.to_string_lossy().into_owned());
        debug!(file = %name, bytes = bytes.len(), "Queued image");
        upload = upload.with_image(ImagePart::new(name, bytes));
    }

    let body = client.seller().upload_images(upload).await?;
    print_body("Images uploaded", &body, format)
}

pub async fn orders(client: &StorefrontClient, format: OutputFormat) -> Result<()> {
    let body = client.seller().orders().await?;
    print_body("Seller orders", &body, format)
}

pub async fn registration(client: &StorefrontClient, format: OutputFormat) -> Result<()> {
    let body = client.seller().registration().await?;
    print_body("Seller registration", &body, format)
}

pub async fn register(client: &StorefrontClient, data: &str, format: OutputFormat) -> Result<()> {
    let profile = parse_data(data)?;
    let body = client.seller().register(&profile).await?;
    print_body("Seller registration submitted", &body, format)
}
