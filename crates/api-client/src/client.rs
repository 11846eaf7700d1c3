//! Main API client implementation

use crate::config::ClientConfig;
use crate::credentials::{CredentialProvider, FileTokenStore};
use crate::endpoints::{
    AccountApi, AuthApi, CartApi, OrdersApi, PaymentsApi, ProductsApi, SellerApi, VouchersApi,
};
use crate::error::{ApiError, ApiResult};
use crate::middleware::{BearerAuth, RequestInterceptor};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, Span};
use uuid::Uuid;

const CLIENT_USER_AGENT: &str = concat!("storefront-api-client/", env!("CARGO_PKG_VERSION"));

/// Storefront API client
///
/// One `reqwest` client bound to a base URL with `Content-Type:
/// application/json` as a default header. Every request passes through the
/// bearer-token interceptor, then any extra interceptors, and is sent once.
/// Responses and failures come back unmodified.
#[derive(Clone)]
pub struct StorefrontClient {
    inner: Client,
    config: Arc<ClientConfig>,
    auth: BearerAuth,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl StorefrontClient {
    /// Create a client from environment configuration, authenticated from the
    /// default file token store
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        let store = FileTokenStore::from_env()?;
        Ok(Self::with_config(config)?.with_credentials(Arc::new(store)))
    }

    /// Create an anonymous client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let mut builder = Client::builder().default_headers(default_headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let inner = builder.build().map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
            auth: BearerAuth::anonymous(),
            interceptors: Vec::new(),
        })
    }

    /// Read bearer tokens from `provider` on every request
    #[must_use]
    pub fn with_credentials(mut self, provider: Arc<dyn CredentialProvider>) -> Self {
        self.auth = BearerAuth::new(provider);
        self
    }

    /// Run `interceptor` after the auth step on every request
    #[must_use]
    pub fn with_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Products, categories and reviews
    #[must_use]
    pub fn products(&self) -> ProductsApi {
        ProductsApi::new(self.clone())
    }

    /// Shopping cart
    #[must_use]
    pub fn cart(&self) -> CartApi {
        CartApi::new(self.clone())
    }

    /// Buyer orders
    #[must_use]
    pub fn orders(&self) -> OrdersApi {
        OrdersApi::new(self.clone())
    }

    /// Payment initiation and status
    #[must_use]
    pub fn payments(&self) -> PaymentsApi {
        PaymentsApi::new(self.clone())
    }

    /// Seller catalog management
    #[must_use]
    pub fn seller(&self) -> SellerApi {
        SellerApi::new(self.clone())
    }

    /// Vouchers
    #[must_use]
    pub fn vouchers(&self) -> VouchersApi {
        VouchersApi::new(self.clone())
    }

    /// Login, signup and profile
    #[must_use]
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.clone())
    }

    /// Notifications and site content
    #[must_use]
    pub fn account(&self) -> AccountApi {
        AccountApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP methods
    // -------------------------------------------------------------------------

    /// Perform a GET request
    #[instrument(skip(self), fields(request_id))]
    pub async fn get(&self, path: &str) -> ApiResult<Value> {
        self.execute(self.request_builder(Method::GET, path)).await
    }

    /// Perform a GET request with query parameters
    #[instrument(skip(self, query), fields(request_id))]
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ApiResult<Value> {
        let request = self.request_builder(Method::GET, path).query(query);
        self.execute(request).await
    }

    /// Perform a POST request with a JSON body
    #[instrument(skip(self, body), fields(request_id))]
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Value> {
        let request = self.request_builder(Method::POST, path).json(body);
        self.execute(request).await
    }

    /// Perform a POST request without a body
    #[instrument(skip(self), fields(request_id))]
    pub async fn post_empty(&self, path: &str) -> ApiResult<Value> {
        self.execute(self.request_builder(Method::POST, path)).await
    }

    /// Perform a PATCH request with a JSON body
    #[instrument(skip(self, body), fields(request_id))]
    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Value> {
        let request = self.request_builder(Method::PATCH, path).json(body);
        self.execute(request).await
    }

    /// Perform a DELETE request
    #[instrument(skip(self), fields(request_id))]
    pub async fn delete(&self, path: &str) -> ApiResult<Value> {
        self.execute(self.request_builder(Method::DELETE, path)).await
    }

    /// Perform a POST request with a `multipart/form-data` body
    ///
    /// The form's content type, boundary included, replaces the default JSON
    /// content type for this request.
    #[instrument(skip(self, form), fields(request_id))]
    pub async fn post_multipart(&self, path: &str, form: Form) -> ApiResult<Value> {
        let request = self.request_builder(Method::POST, path).multipart(form);
        self.execute(request).await
    }

    /// Build a request builder for custom requests
    ///
    /// `path` is appended to the base URL as-is, so it should start with `/`.
    pub fn request_builder(&self, method: Method, path: &str) -> RequestBuilder {
        self.inner.request(method, self.url(path))
    }

    /// Absolute URL for an API path
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Run the interceptors, send the request and hand back the body
    pub async fn execute(&self, request: RequestBuilder) -> ApiResult<Value> {
        let request_id = Uuid::new_v4().to_string();
        Span::current().record("request_id", request_id.as_str());

        let response = self.execute_raw(request).await?;
        handle_response(&request_id, response).await
    }

    /// Run the interceptors and send, returning the raw response whatever its status
    pub async fn execute_raw(&self, request: RequestBuilder) -> ApiResult<Response> {
        let request = self.intercept(request);
        let start = Instant::now();

        let response = request.send().await?;
        debug!(
            path = %response.url().path(),
            status = response.status().as_u16(),
            elapsed_ms = start.elapsed().as_millis(),
            "Response received"
        );
        Ok(response)
    }

    fn intercept(&self, request: RequestBuilder) -> RequestBuilder {
        let request = self.auth.intercept(request);
        self.interceptors
            .iter()
            .fold(request, |request, interceptor| interceptor.intercept(request))
    }
}

/// Return 2xx bodies as JSON (empty body as `null`), everything else as an error
async fn handle_response(request_id: &str, response: Response) -> ApiResult<Value> {
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(ApiError::Json)
    } else {
        debug!(
            request_id = %request_id,
            status = status.as_u16(),
            "Request failed"
        );
        Err(ApiError::api_response(status.as_u16(), body))
    }
}
