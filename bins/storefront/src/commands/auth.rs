//! Login, logout and profile commands
//!
//! These are the only places that write the token store; the client itself
//! just reads it before each request.

use super::parse_data;
use crate::output::{print_body, success};
use crate::OutputFormat;
use anyhow::{Context, Result};
use storefront_api_client::credentials::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use storefront_api_client::endpoints::{LoginRequest, LoginResponse, RefreshTokenRequest};
use storefront_api_client::{FileTokenStore, StorefrontClient, TokenStore};
use tracing::info;

pub async fn login(
    client: &StorefrontClient,
    store: &FileTokenStore,
    phone_number: String,
    password: String,
    format: OutputFormat,
) -> Result<()> {
    let body = client
        .auth()
        .login(&LoginRequest {
            phone_number,
            password,
        })
        .await?;
    let tokens: LoginResponse =
        serde_json::from_value(body).context("Login response did not contain tokens")?;

    store.set(ACCESS_TOKEN_KEY, &tokens.access)?;
    store.set(REFRESH_TOKEN_KEY, &tokens.refresh)?;
    info!(path = %store.path().display(), "Stored tokens");

    let message = tokens.message.unwrap_or_else(|| "Logged in".to_string());
    success(&message, format)
}

pub fn logout(store: &FileTokenStore, format: OutputFormat) -> Result<()> {
    let had_access = store.remove(ACCESS_TOKEN_KEY)?;
    let had_refresh = store.remove(REFRESH_TOKEN_KEY)?;

    if had_access || had_refresh {
        success("Logged out", format)
    } else {
        success("Not logged in", format)
    }
}

pub async fn signup(client: &StorefrontClient, data: &str, format: OutputFormat) -> Result<()> {
    let account = parse_data(data)?;
    let body = client.auth().signup(&account).await?;
    print_body("Account created", &body, format)
}

pub async fn profile(client: &StorefrontClient, format: OutputFormat) -> Result<()> {
    let body = client.auth().profile().await?;
    print_body("Profile", &body, format)
}

pub async fn update_profile(
    client: &StorefrontClient,
    data: &str,
    format: OutputFormat,
) -> Result<()> {
    let changes = parse_data(data)?;
    let body = client.auth().update_profile(&changes).await?;
    print_body("Profile updated", &body, format)
}

pub async fn refresh(
    client: &StorefrontClient,
    store: &FileTokenStore,
    format: OutputFormat,
) -> Result<()> {
    let refresh = store
        .get(REFRESH_TOKEN_KEY)?
        .context("No refresh token stored; run `storefront login` first")?;

    let body = client
        .auth()
        .refresh_token(&RefreshTokenRequest { refresh })
        .await?;

    let access = body
        .get("access")
        .and_then(|v| v.as_str())
        .context("Refresh response did not contain an access token")?;
    store.set(ACCESS_TOKEN_KEY, access)?;

    // Rotated refresh tokens replace the old one
    if let Some(rotated) = body.get("refresh").and_then(|v| v.as_str()) {
        store.set(REFRESH_TOKEN_KEY, rotated)?;
    }

    success("Access token refreshed", format)
}
