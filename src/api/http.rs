//! reqwest-backed [`ProductApi`] implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{ApiError, ProductApi};
use crate::config::ApiConfig;
use crate::models::{ApiErrorBody, ErrorCode, NewProduct, Product, ProductPage, ProductQuery};

const USER_AGENT: &str = concat!("storefront/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the products API.
pub struct HttpProductClient {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl std::fmt::Debug for HttpProductClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpProductClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpProductClient {
    /// Build a client from the API section of the configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(config.base_url.clone()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            token: config.token.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        debug!(url = %response.url(), status, "response received");

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("failed to read body: {e}")))?;

        if (200..300).contains(&status) {
            serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            Err(error_for_status(status, &text))
        }
    }
}

/// Map a non-2xx answer to an [`ApiError`].
///
/// Bodies that are not an [`ApiErrorBody`] are wrapped in one carrying the
/// canonical code for the status.
pub(crate) fn error_for_status(status: u16, text: &str) -> ApiError {
    let body = serde_json::from_str::<ApiErrorBody>(text).unwrap_or_else(|_| {
        let raw = text.trim();
        let message = if raw.is_empty() { "<no body>" } else { raw };
        ApiErrorBody::new(ErrorCode::for_status(status), message)
    });

    match status {
        400 => ApiError::Validation(body),
        401 => ApiError::Unauthorized(body),
        404 => ApiError::NotFound(body),
        _ => ApiError::Status { status, body },
    }
}

#[async_trait]
impl ProductApi for HttpProductClient {
    async fn list_products(&self, query: &ProductQuery) -> Result<ProductPage, ApiError> {
        let url = self.endpoint(&["products"])?;
        let pairs = query.to_pairs();
        debug!(method = "GET", %url, params = pairs.len(), "listing products");

        let mut request = self.client.get(url);
        if !pairs.is_empty() {
            request = request.query(&pairs);
        }
        self.send(request).await
    }

    async fn create_product(&self, product: &NewProduct) -> Result<Product, ApiError> {
        let url = self.endpoint(&["products"])?;
        debug!(method = "POST", %url, authenticated = self.token.is_some(), "creating product");

        let mut request = self.client.post(url).json(product);
        match self.token {
            Some(ref token) => request = request.bearer_auth(token),
            None => warn!("no API token configured; create_product will be unauthenticated"),
        }
        self.send(request).await
    }

    async fn get_product(&self, id: &str) -> Result<Product, ApiError> {
        let url = self.endpoint(&["products", id])?;
        debug!(method = "GET", %url, "fetching product");
        self.send(self.client.get(url)).await
    }
}
