//! Authentication endpoints
//!
//! These calls only talk to the server. Persisting the tokens a login returns
//! is up to the caller (see [`crate::credentials::TokenStore`]).

use crate::client::StorefrontClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Auth API interface
#[derive(Clone)]
pub struct AuthApi {
    client: StorefrontClient,
}

impl AuthApi {
    pub(crate) fn new(client: StorefrontClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a token pair
    ///
    /// POST /login/
    pub async fn login<B: Serialize + ?Sized>(&self, credentials: &B) -> ApiResult<Value> {
        self.client.post("/login/", credentials).await
    }

    /// Create an account
    ///
    /// POST /signup/
    pub async fn signup<B: Serialize + ?Sized>(&self, account: &B) -> ApiResult<Value> {
        self.client.post("/signup/", account).await
    }

    /// Profile of the authenticated user
    ///
    /// GET /profile/
    pub async fn profile(&self) -> ApiResult<Value> {
        self.client.get("/profile/").await
    }

    /// Partially update the authenticated user's profile
    ///
    /// PATCH /profile/
    pub async fn update_profile<B: Serialize + ?Sized>(&self, changes: &B) -> ApiResult<Value> {
        self.client.patch("/profile/", changes).await
    }

    /// Obtain a new access token from a refresh token
    ///
    /// POST /token/refresh/. Never called implicitly; an expired access token
    /// simply yields the server's 401.
    pub async fn refresh_token<B: Serialize + ?Sized>(&self, refresh: &B) -> ApiResult<Value> {
        self.client.post("/token/refresh/", refresh).await
    }
}

/// Body for [`AuthApi::login`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Registered phone number
    pub phone_number: String,
    /// Account password
    pub password: String,
}

/// Body for [`AuthApi::signup`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupRequest {
    /// Display name
    pub name: String,
    /// Phone number used to log in
    pub phone_number: String,
    /// Contact email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Gender as the backend spells it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    /// Code of the user who referred this account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    /// Account password
    pub password: String,
}

/// Body for [`AuthApi::refresh_token`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    /// Refresh token from a previous login
    pub refresh: String,
}

/// Successful login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Human-readable confirmation
    #[serde(default)]
    pub message: Option<String>,
    /// Bearer token for subsequent requests
    pub access: String,
    /// Token for [`AuthApi::refresh_token`]
    pub refresh: String,
}
