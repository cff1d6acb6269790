//! HTTP client for the CHIP gateway
//!
//! [`ChipClient`] exposes one method per gateway operation. Every
//! method performs exactly one request/response exchange (no retries,
//! no caching, no state beyond the configuration captured at build
//! time) and returns a freshly mapped entity.

use crate::error::{ChipError, Result};
use crate::map;
use crate::types::{ClientDetails, PaymentMethods, Purchase};
use reqwest::Method;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Production endpoint of the CHIP gateway
pub const DEFAULT_BASE_URL: &str = "https://gate.chip-in.asia/api/v1/";

/// Client for the CHIP gateway HTTP API
///
/// Cheap to clone and safe to share across tasks: all configuration is
/// immutable after construction and the underlying `reqwest::Client`
/// pools connections internally.
#[derive(Debug, Clone)]
pub struct ChipClient {
    brand_id: String,
    api_key: Option<String>,
    base_url: Url,
    http: reqwest::Client,
}

/// Builder for [`ChipClient`]
#[derive(Debug)]
pub struct ChipClientBuilder {
    brand_id: String,
    api_key: Option<String>,
    base_url: String,
    timeout: Option<Duration>,
    http: Option<reqwest::Client>,
}

impl ChipClientBuilder {
    /// Set the API key sent as `Authorization: Bearer <key>`.
    ///
    /// Without a key the header is omitted entirely.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the gateway base URL (e.g. a staging endpoint).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a request timeout on the HTTP client built by default.
    ///
    /// Ignored when a custom client is supplied via
    /// [`with_http_client`](Self::with_http_client).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the underlying `reqwest::Client`. Timeouts, proxies and
    /// TLS settings configured on it are passed through untouched.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ChipClient> {
        let mut base = self.base_url;
        // Url::join drops the last segment of a base without a
        // trailing slash.
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|e| ChipError::config(format!("invalid base URL {base:?}: {e}")))?;

        let http = match self.http {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder
                    .build()
                    .map_err(|e| ChipError::config(format!("failed to create HTTP client: {e}")))?
            }
        };

        Ok(ChipClient {
            brand_id: self.brand_id,
            api_key: self.api_key,
            base_url,
            http,
        })
    }
}

impl ChipClient {
    /// Create a client for the production gateway.
    pub fn new(brand_id: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::builder(brand_id).with_api_key(api_key).build()
    }

    /// Start building a client for `brand_id`.
    pub fn builder(brand_id: impl Into<String>) -> ChipClientBuilder {
        ChipClientBuilder {
            brand_id: brand_id.into(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            http: None,
        }
    }

    /// Create a client from `CHIP_BRAND_ID`, `CHIP_API_KEY` and,
    /// when set, `CHIP_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let brand_id = std::env::var("CHIP_BRAND_ID")
            .map_err(|_| ChipError::config("CHIP_BRAND_ID must be set"))?;

        let mut builder = Self::builder(brand_id);
        if let Ok(api_key) = std::env::var("CHIP_API_KEY") {
            builder = builder.with_api_key(api_key);
        }
        if let Ok(base_url) = std::env::var("CHIP_BASE_URL") {
            builder = builder.with_base_url(base_url);
        }
        builder.build()
    }

    /// Brand this client issues requests for
    pub fn brand_id(&self) -> &str {
        &self.brand_id
    }

    /// Configured gateway base URL
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Fetch the payment methods available for `currency`.
    pub async fn payment_methods(&self, currency: &str) -> Result<PaymentMethods> {
        let query = [
            ("brand_id", self.brand_id.as_str()),
            ("currency", currency),
        ];
        let value = self
            .request(Method::GET, "payment_methods/", Some(&query), None)
            .await?;
        map::from_value(value)
    }

    /// Create a purchase.
    ///
    /// The returned purchase carries the server-assigned id, status and
    /// checkout URL.
    pub async fn create_purchase(&self, purchase: &Purchase) -> Result<Purchase> {
        let body = serde_json::to_value(purchase)?;
        let value = self
            .request(Method::POST, "purchases/", None, Some(body))
            .await?;
        map::from_value(value)
    }

    /// Fetch the current state of a purchase.
    pub async fn get_purchase(&self, purchase_id: &str) -> Result<Purchase> {
        let path = format!("purchases/{purchase_id}/");
        let value = self.request(Method::GET, &path, None, None).await?;
        map::from_value(value)
    }

    /// Cancel a purchase that has not been paid yet.
    pub async fn cancel_purchase(&self, purchase_id: &str) -> Result<Purchase> {
        self.purchase_action(purchase_id, "cancel", None).await
    }

    /// Release the funds held by a preauthorized purchase.
    pub async fn release_purchase(&self, purchase_id: &str) -> Result<Purchase> {
        self.purchase_action(purchase_id, "release", None).await
    }

    /// Capture a preauthorized purchase.
    ///
    /// `None` captures the full amount: the request then carries no
    /// body at all, since the gateway reads `{"amount": null}` as
    /// something else than an omitted amount. `Some(amount)` captures
    /// that amount in minor units.
    pub async fn capture_purchase(
        &self,
        purchase_id: &str,
        amount: Option<i64>,
    ) -> Result<Purchase> {
        let body = amount.map(|amount| json!({ "amount": amount }));
        self.purchase_action(purchase_id, "capture", body).await
    }

    /// Charge a purchase using a stored recurring token.
    pub async fn charge_purchase(
        &self,
        purchase_id: &str,
        recurring_token: &str,
    ) -> Result<Purchase> {
        let body = json!({ "recurring_token": recurring_token });
        self.purchase_action(purchase_id, "charge", Some(body)).await
    }

    /// Refund a settled purchase.
    ///
    /// `None` refunds the full amount; the omit-versus-null rule of
    /// [`capture_purchase`](Self::capture_purchase) applies here too.
    pub async fn refund_purchase(
        &self,
        purchase_id: &str,
        amount: Option<i64>,
    ) -> Result<Purchase> {
        let body = amount.map(|amount| json!({ "amount": amount }));
        self.purchase_action(purchase_id, "refund", body).await
    }

    /// Delete the recurring token attached to a purchase.
    pub async fn delete_recurring_token(&self, purchase_id: &str) -> Result<Purchase> {
        self.purchase_action(purchase_id, "delete_recurring_token", None)
            .await
    }

    /// Create a client record.
    pub async fn create_client(&self, client: &ClientDetails) -> Result<ClientDetails> {
        let body = serde_json::to_value(client)?;
        let value = self
            .request(Method::POST, "clients/", None, Some(body))
            .await?;
        map::from_value(value)
    }

    /// POST to a purchase sub-endpoint and map the resulting purchase.
    async fn purchase_action(
        &self,
        purchase_id: &str,
        action: &str,
        body: Option<Value>,
    ) -> Result<Purchase> {
        let path = format!("purchases/{purchase_id}/{action}/");
        let value = self.request(Method::POST, &path, None, body).await?;
        map::from_value(value)
    }

    /// Perform one request against the gateway and decode the response
    /// body as JSON.
    ///
    /// Exactly one attempt. A `None` body sends an empty request body,
    /// never `null`.
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, &str)]>,
        body: Option<Value>,
    ) -> Result<Value> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| ChipError::config(format!("invalid endpoint path {path:?}: {e}")))?;

        debug!(%url, %method, "sending gateway request");

        let mut request = self.http.request(method, url);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        debug!(status = status.as_u16(), "gateway response");

        if !status.is_success() {
            return Err(ChipError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(source) => Err(ChipError::InvalidJson { source, body: text }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_production_endpoint() {
        let client = ChipClient::builder("brand-1").build().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.brand_id(), "brand-1");
    }

    #[test]
    fn builder_appends_trailing_slash_to_base_url() {
        let client = ChipClient::builder("brand-1")
            .with_base_url("https://staging.example.com/api/v1")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://staging.example.com/api/v1/");
    }

    #[test]
    fn builder_rejects_invalid_base_url() {
        let result = ChipClient::builder("brand-1")
            .with_base_url("not a url")
            .build();
        assert!(matches!(result, Err(ChipError::Config { .. })));
    }
}
