use crate::core::{ConfigProvider, ShipmentProvider, ShipmentRequest};
use crate::domain::model::ShipItResponse;
use crate::utils::error::{Result, ShipError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// reqwest-backed client for the ShipIt `POST /ship` endpoint.
#[derive(Debug, Clone)]
pub struct ShipItClient {
    client: Client,
    ship_url: String,
}

impl ShipItClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            ship_url: format!("{}/ship", base_url.trim_end_matches('/')),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.provider_base_url(), config.request_timeout())
    }

    pub fn ship_url(&self) -> &str {
        &self.ship_url
    }
}

#[async_trait]
impl ShipmentProvider for ShipItClient {
    async fn ship_product(&self, request: &ShipmentRequest) -> Result<u64> {
        tracing::debug!("Making API request to: {}", self.ship_url);
        let response = self.client.post(&self.ship_url).json(request).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(ShipError::ProviderStatusError {
                status: status.as_u16(),
            });
        }

        // 先讀成 bytes，解析失敗時才能分辨是格式問題
        let bytes = response.bytes().await?;
        let parsed: ShipItResponse =
            serde_json::from_slice(&bytes).map_err(|e| ShipError::ProviderResponseError {
                message: e.to_string(),
            })?;

        tracing::debug!(
            recipient = parsed.receipt.name.as_deref().unwrap_or("-"),
            zip = parsed.receipt.zip.as_deref().unwrap_or("-"),
            "Received ShipIt receipt"
        );

        Ok(parsed.receipt.ship_id)
    }
}
