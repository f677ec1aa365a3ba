use crate::api::error::{ApiError, ApiResult};
use crate::api::types::{ApiEnvelope, HealthStatus, Quote};
use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

/// Number of quotes requested for the history view
pub const DEFAULT_HISTORY_LIMIT: u32 = 20;

/// Largest `limit` the recent-quotes endpoint honours
pub const MAX_RECENT_LIMIT: u32 = 50;

/// Read-only client for the daily quote service
#[derive(Debug, Clone)]
pub struct QuoteClient {
    http: Client,
    base_url: Url,
    request_timeout: Duration,
}

impl QuoteClient {
    /// Create a client for the service at `base_url`
    pub fn new(base_url: Url, request_timeout: Duration) -> ApiResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("daily-quote/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::network(e.to_string()))?;

        Ok(Self::with_http_client(http, base_url, request_timeout))
    }

    /// Create a client on top of a preconfigured `reqwest::Client`
    pub fn with_http_client(http: Client, base_url: Url, request_timeout: Duration) -> Self {
        Self {
            http,
            base_url: with_trailing_slash(base_url),
            request_timeout,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET `/api/quote`
    pub async fn fetch_today_quote(&self) -> ApiResult<Quote> {
        let url = self.endpoint("api/quote")?;
        self.get_envelope(url).await
    }

    /// GET `/api/quotes/recent?limit=N`, in the order the service returns them
    pub async fn fetch_recent_quotes(&self, limit: u32) -> ApiResult<Vec<Quote>> {
        let limit = limit.clamp(1, MAX_RECENT_LIMIT);
        let mut url = self.endpoint("api/quotes/recent")?;
        url.query_pairs_mut().append_pair("limit", &limit.to_string());
        self.get_envelope(url).await
    }

    /// GET `/api/quote/{date}`
    pub async fn fetch_quote_by_date(&self, date: NaiveDate) -> ApiResult<Quote> {
        let url = self.endpoint(&format!("api/quote/{}", date.format("%Y-%m-%d")))?;
        self.get_envelope(url).await
    }

    /// GET `/health`; the body is not an envelope
    pub async fn health(&self) -> ApiResult<HealthStatus> {
        let url = self.endpoint("health")?;
        let body = self.get_text(url).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::invalid_response(e.to_string()))
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn get_envelope<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        let body = self.get_text(url).await?;

        let envelope: ApiEnvelope<T> = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("Quote API returned an unreadable body: {}", e);
            ApiError::invalid_response(e.to_string())
        })?;

        match envelope {
            ApiEnvelope {
                success: true,
                data: Some(data),
                ..
            } => Ok(data),
            ApiEnvelope { message, .. } => {
                tracing::info!("Quote API reported failure: {:?}", message);
                Err(ApiError::application(message))
            }
        }
    }

    async fn get_text(&self, url: Url) -> ApiResult<String> {
        tracing::debug!("GET {}", url);

        let request = async {
            let response = self.http.get(url.clone()).send().await?;
            let status = response.status();
            if !status.is_success() {
                tracing::debug!("GET {} returned status {}", url, status);
            }
            let body = response.text().await?;
            Ok::<_, reqwest::Error>(body)
        };

        match timeout(self.request_timeout, request).await {
            Ok(Ok(body)) => Ok(body),
            Ok(Err(e)) => {
                tracing::warn!("Request to quote API failed: {}", e);
                Err(ApiError::network(e.to_string()))
            }
            Err(_) => {
                tracing::warn!("Request to quote API timed out after {:?}", self.request_timeout);
                Err(ApiError::Timeout {
                    timeout: self.request_timeout,
                })
            }
        }
    }
}

/// `Url::join` replaces the last path segment unless the base ends with `/`
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
