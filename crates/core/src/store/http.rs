use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;
use tracing::{debug, warn};

use super::traits::TradeStore;
use crate::config::ApiConfig;
use crate::errors::JournalError;
use crate::models::stats::StatsSummary;
use crate::models::trade::{Trade, TradeCreate, TradeUpdate};

const NAME: &str = "HTTP";

/// Trade store backed by the journal REST API.
///
/// - **Paths**: `/trades/`, `/trades/{id}`, `/trades/stats/summary`, `/health`
///   relative to the configured base URL (normally ending in `/api`).
/// - **Errors**: any non-2xx status is a failure; error bodies are ignored.
pub struct HttpTradeStore {
    client: Client,
    base_url: String,
}

impl HttpTradeStore {
    pub fn new(config: &ApiConfig) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Store with default settings pointed at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let config = ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        };
        Self::new(&config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a request and check the status, without reading the body.
    async fn execute(
        &self,
        request: RequestBuilder,
        operation: &str,
    ) -> Result<reqwest::Response, JournalError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(operation, status = status.as_u16(), "trade store rejected request");
            return Err(JournalError::Api {
                operation: operation.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        operation: &str,
    ) -> Result<T, JournalError> {
        self.execute(request, operation)
            .await?
            .json()
            .await
            .map_err(|e| {
                JournalError::Deserialization(format!(
                    "Failed to parse response for {operation}: {e}"
                ))
            })
    }
}

// ── API response types ──────────────────────────────────────────────

#[derive(Deserialize)]
struct HealthResponse {
    status: String,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl TradeStore for HttpTradeStore {
    fn name(&self) -> &str {
        NAME
    }

    async fn list_trades(&self) -> Result<Vec<Trade>, JournalError> {
        let url = self.url("/trades/");
        debug!(%url, "GET trades");
        self.fetch(self.client.get(&url), "list trades").await
    }

    async fn get_trade(&self, id: i64) -> Result<Trade, JournalError> {
        let url = self.url(&format!("/trades/{id}"));
        debug!(%url, "GET trade");
        self.fetch(self.client.get(&url), "get trade").await
    }

    async fn create_trade(&self, trade: &TradeCreate) -> Result<Trade, JournalError> {
        let url = self.url("/trades/");
        debug!(%url, symbol = %trade.symbol, "POST trade");
        self.fetch(self.client.post(&url).json(trade), "create trade")
            .await
    }

    async fn update_trade(&self, id: i64, update: &TradeUpdate) -> Result<Trade, JournalError> {
        let url = self.url(&format!("/trades/{id}"));
        debug!(%url, "PUT trade");
        self.fetch(self.client.put(&url).json(update), "update trade")
            .await
    }

    async fn delete_trade(&self, id: i64) -> Result<(), JournalError> {
        let url = self.url(&format!("/trades/{id}"));
        debug!(%url, "DELETE trade");
        self.execute(self.client.delete(&url), "delete trade").await?;
        Ok(())
    }

    async fn stats_summary(&self) -> Result<StatsSummary, JournalError> {
        let url = self.url("/trades/stats/summary");
        debug!(%url, "GET stats summary");
        self.fetch(self.client.get(&url), "stats summary").await
    }

    async fn health(&self) -> Result<(), JournalError> {
        let url = self.url("/health");
        let resp: HealthResponse = self.fetch(self.client.get(&url), "health").await?;
        if resp.status == "ok" {
            Ok(())
        } else {
            Err(JournalError::Network(format!(
                "Trade store reported status '{}'",
                resp.status
            )))
        }
    }
}
