use crate::core::validator::validate_shipment;
use crate::domain::model::{ShipmentRequest, ShipmentResult};
use crate::domain::ports::ShipmentProvider;
use crate::utils::error::{Result, ShipError};
use serde_json::Value;
use std::sync::Arc;

/// Validates an inbound shipment body and forwards it to the provider.
#[derive(Clone)]
pub struct ShipmentService {
    provider: Arc<dyn ShipmentProvider>,
}

impl ShipmentService {
    pub fn new(provider: Arc<dyn ShipmentProvider>) -> Self {
        Self { provider }
    }

    /// 解析原始 body；空白、非 JSON 或 `null` 都視為沒有 body
    pub fn parse_body(body: &[u8]) -> Result<Value> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ShipError::MalformedRequest);
        }

        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Null) => Err(ShipError::MalformedRequest),
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::debug!("Request body is not valid JSON: {}", e);
                Err(ShipError::MalformedRequest)
            }
        }
    }

    pub fn validate(instance: &Value) -> Result<ShipmentRequest> {
        validate_shipment(instance).map_err(ShipError::ValidationFailure)
    }

    pub async fn ship(&self, body: &[u8]) -> Result<ShipmentResult> {
        let instance = Self::parse_body(body)?;
        let request = match Self::validate(&instance) {
            Ok(request) => request,
            Err(e) => {
                tracing::info!("Rejected shipment request: {}", e);
                return Err(e);
            }
        };

        tracing::debug!(
            product_id = request.product_id,
            "Forwarding shipment to provider"
        );

        match self.provider.ship_product(&request).await {
            Ok(ship_id) => {
                tracing::info!(product_id = request.product_id, ship_id, "📦 Shipment created");
                Ok(ShipmentResult { shipped: ship_id })
            }
            Err(e) => {
                tracing::error!(product_id = request.product_id, "❌ Shipment failed: {}", e);
                Err(e)
            }
        }
    }
}
