//! Product catalog endpoints
//!
//! Public browsing of the storefront:
//! - List products with filters and pagination
//! - Get a single product by slug
//! - List categories
//! - Read and post product reviews

use crate::client::StorefrontClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Products API interface
#[derive(Clone)]
pub struct ProductsApi {
    client: StorefrontClient,
}

impl ProductsApi {
    /// Create a new products API interface
    pub(crate) fn new(client: StorefrontClient) -> Self {
        Self { client }
    }

    /// List products with filters and pagination
    ///
    /// GET /products/
    pub async fn list(&self, params: &ListProductsParams) -> ApiResult<Value> {
        self.client.get_with_query("/products/", params).await
    }

    /// Get a single product by slug
    ///
    /// GET /products/{slug}/
    pub async fn get(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("/products/{slug}/")).await
    }

    /// List all categories
    ///
    /// GET /categories/
    pub async fn categories(&self) -> ApiResult<Value> {
        self.client.get("/categories/").await
    }

    /// List reviews of a product
    ///
    /// GET /products/{slug}/reviews/
    pub async fn reviews(&self, slug: &str) -> ApiResult<Value> {
        self.client.get(&format!("/products/{slug}/reviews/")).await
    }

    /// Post a review for a product
    ///
    /// POST /products/{slug}/reviews/
    pub async fn add_review<B: Serialize + ?Sized>(&self, slug: &str, review: &B) -> ApiResult<Value> {
        self.client
            .post(&format!("/products/{slug}/reviews/"), review)
            .await
    }
}

// ============================================================================
// Request Types
// ============================================================================

/// Query parameters for listing products
///
/// Unset fields are left out of the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListProductsParams {
    /// Filter by category slug
    #[serde(rename = "category__slug", skip_serializing_if = "Option::is_none")]
    pub category_slug: Option<String>,
    /// Case-insensitive title search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Sort field, e.g. `-created_at` or `price`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
    /// Page number (1-based)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl ListProductsParams {
    /// Create new params with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    #[must_use]
    pub fn with_category(mut self, slug: impl Into<String>) -> Self {
        self.category_slug = Some(slug.into());
        self
    }

    /// Search product titles
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Set sort order
    #[must_use]
    pub fn with_ordering(mut self, ordering: impl Into<String>) -> Self {
        self.ordering = Some(ordering.into());
        self
    }

    /// Set page number
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

/// Review submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    /// Star rating
    pub rating: u8,
    /// Free-text comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_params_builder() {
        let params = ListProductsParams::new()
            .with_category("electronics")
            .with_search("phone")
            .with_page(2);

        assert_eq!(params.category_slug.as_deref(), Some("electronics"));
        assert_eq!(params.search.as_deref(), Some("phone"));
        assert_eq!(params.page, Some(2));
        assert_eq!(params.page_size, None);
    }

    #[test]
    fn test_list_params_wire_names() {
        let params = ListProductsParams::new()
            .with_category("books")
            .with_ordering("-created_at");

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"category__slug": "books", "ordering": "-created_at"})
        );
        assert_eq!(serde_json::to_value(ListProductsParams::new()).unwrap(), json!({}));
    }

    #[test]
    fn test_review_without_comment() {
        let review = ReviewRequest {
            rating: 4,
            comment: None,
        };
        assert_eq!(serde_json::to_value(&review).unwrap(), json!({"rating": 4}));
    }
}
