//! HTTP client facade for the Storefront REST API
//!
//! This crate binds one HTTP client to the storefront backend and exposes a
//! flat catalog of named operations (products, cart, orders, payments, seller
//! catalog management, vouchers, auth). Each operation is a single request
//! with a fixed method and path; responses and failures are handed back as
//! the server and transport produced them.
//!
//! # Features
//!
//! - **Environment-based configuration**: base URL and timeout from `STOREFRONT_*` variables
//! - **Bearer token injection**: an interceptor reads the token from an injected
//!   [`CredentialProvider`] before every request
//! - **Pluggable token storage**: file-backed and in-memory [`TokenStore`]s
//! - **Request correlation**: every request gets a `request_id` in its tracing span
//!
//! # Example
//!
//! ```rust,no_run
//! use storefront_api_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Environment configuration, token from the default credentials file
//!     let client = StorefrontClient::new()?;
//!
//!     let page = client
//!         .products()
//!         .list(&ListProductsParams::new().with_search("phone"))
//!         .await?;
//!     println!("{page:#}");
//!
//!     let cart = client.cart().add(&AddToCartRequest { product_id: 12, qty: 1 }).await?;
//!     println!("{cart:#}");
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod credentials;
pub mod endpoints;
pub mod error;
pub mod middleware;

pub use client::StorefrontClient;
pub use config::ClientConfig;
pub use credentials::{CredentialProvider, FileTokenStore, MemoryTokenStore, TokenStore};
pub use error::{ApiError, ApiResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::StorefrontClient;
    pub use crate::config::ClientConfig;
    pub use crate::credentials::{
        CredentialProvider, FileTokenStore, MemoryTokenStore, NoCredentials, StaticToken,
        TokenStore,
    };
    pub use crate::endpoints::{
        AccountApi, AddToCartRequest, AuthApi, CartApi, ImagePart, ImageUpload,
        InitiatePaymentRequest, ListProductsParams, LoginRequest, OrdersApi, PaymentGateway,
        PaymentsApi, ProductsApi, SellerApi, UpdateCartItemRequest, VouchersApi,
    };
    pub use crate::error::{ApiError, ApiResult};
}
