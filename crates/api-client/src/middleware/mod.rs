//! Pre-send request interceptors
//!
//! An interceptor is a plain function from request to request, composed in
//! front of the transport's send step. The client runs [`BearerAuth`] on every
//! request it builds.

use crate::credentials::{CredentialProvider, NoCredentials};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::RequestBuilder;
use std::fmt;
use std::sync::Arc;
use tracing::{trace, warn};

/// Hook applied to a request right before it is sent
pub trait RequestInterceptor: Send + Sync {
    /// Return the (possibly modified) request; must not fail
    fn intercept(&self, request: RequestBuilder) -> RequestBuilder;
}

/// Attaches `Authorization: Bearer <token>` when the provider has a token
#[derive(Clone)]
pub struct BearerAuth {
    provider: Arc<dyn CredentialProvider>,
}

impl BearerAuth {
    /// Interceptor reading tokens from `provider`
    pub fn new(provider: Arc<dyn CredentialProvider>) -> Self {
        Self { provider }
    }

    /// Interceptor that never authenticates
    #[must_use]
    pub fn anonymous() -> Self {
        Self::new(Arc::new(NoCredentials))
    }

    /// Header value for the current token, if one is stored and encodable
    #[must_use]
    pub fn header_value(&self) -> Option<HeaderValue> {
        let token = self.provider.access_token()?;
        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(mut value) => {
                value.set_sensitive(true);
                Some(value)
            }
            Err(_) => {
                warn!("Stored access token is not a valid header value, skipping Authorization");
                None
            }
        }
    }
}

impl Default for BearerAuth {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerAuth").finish_non_exhaustive()
    }
}

impl RequestInterceptor for BearerAuth {
    fn intercept(&self, request: RequestBuilder) -> RequestBuilder {
        match self.header_value() {
            Some(value) => {
                trace!("Attaching bearer token");
                request.header(AUTHORIZATION, value)
            }
            None => request,
        }
    }
}

impl<F> RequestInterceptor for F
where
    F: Fn(RequestBuilder) -> RequestBuilder + Send + Sync,
{
    fn intercept(&self, request: RequestBuilder) -> RequestBuilder {
        self(request)
    }
}
