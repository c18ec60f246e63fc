use crate::domain::model::ShipmentRequest;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn bind_addr(&self) -> &str;
    fn provider_base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}

/// 外部出貨服務；每次呼叫最多送出一個請求
#[async_trait]
pub trait ShipmentProvider: Send + Sync {
    async fn ship_product(&self, request: &ShipmentRequest) -> Result<u64>;
}
