//! Product, category and review commands

use crate::output::print_body;
use crate::OutputFormat;
use anyhow::Result;
use storefront_api_client::endpoints::{ListProductsParams, ReviewRequest};
use storefront_api_client::StorefrontClient;

/// Filters for `products list`
pub struct ListArgs {
    pub search: Option<String>,
    pub category: Option<String>,
    pub ordering: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl From<ListArgs> for ListProductsParams {
    fn from(args: ListArgs) -> Self {
        Self {
            category_slug: args.category,
            search: args.search,
            ordering: args.ordering,
            page: args.page,
            page_size: args.page_size,
        }
    }
}

pub async fn list(client: &StorefrontClient, args: ListArgs, format: OutputFormat) -> Result<()> {
    let params = ListProductsParams::from(args);
    let body = client.products().list(&params).await?;
    print_body("Products", &body, format)
}

pub async fn get(client: &StorefrontClient, slug: &str, format: OutputFormat) -> Result<()> {
    let body = client.products().get(slug).await?;
    print_body(&format!("Product {slug}"), &body, format)
}

pub async fn categories(client: &StorefrontClient, format: OutputFormat) -> Result<()> {
    let body = client.products().categories().await?;
    print_body("Categories", &body, format)
}

pub async fn reviews(client: &StorefrontClient, slug: &str, format: OutputFormat) -> Result<()> {
    let body = client.products().reviews(slug).await?;
    print_body(&format!("Reviews of {slug}"), &body, format)
}

pub async fn review(
    client: &StorefrontClient,
    slug: &str,
    rating: u8,
    comment: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let body = client
        .products()
        .add_review(slug, &ReviewRequest { rating, comment })
        .await?;
    print_body("Review posted", &body, format)
}
