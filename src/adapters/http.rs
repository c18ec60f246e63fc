//! HTTP boundary: routes, handlers and the JSON error envelope.
//!
//! Every error leaves the service as
//! `{ "error": { "message": <string | [string]>, "status": <code> } }`.

use crate::core::shipment::ShipmentService;
use crate::domain::model::ShipmentResult;
use crate::utils::error::ShipError;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub shipments: ShipmentService,
}

/// 驗證錯誤一律用陣列，其他錯誤用字串
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Text(String),
    List(Vec<String>),
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub message: ErrorMessage,
    pub status: u16,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

impl From<&ShipError> for ErrorResponse {
    fn from(err: &ShipError) -> Self {
        let message = match err {
            ShipError::ValidationFailure(violations) => ErrorMessage::List(violations.clone()),
            other => ErrorMessage::Text(other.public_message()),
        };
        Self {
            error: ErrorDetail {
                message,
                status: err.status(),
            },
        }
    }
}

impl IntoResponse for ShipError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `POST /shipments`
///
/// The body is taken as raw bytes so a missing or non-JSON payload maps to
/// `"Bad Request"` instead of the extractor's own rejection. A body the
/// extractor refuses (over the size limit) keeps the extractor's status but
/// still goes out in the JSON envelope.
pub async fn create_shipment(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ShipmentResult>, ShipError> {
    let body = body.map_err(|rejection| {
        tracing::info!("Rejected request body: {}", rejection.body_text());
        ShipError::RequestBodyError {
            status: rejection.status().as_u16(),
            message: rejection.body_text(),
        }
    })?;
    let result = state.shipments.ship(&body).await?;
    Ok(Json(result))
}

pub async fn not_found() -> ShipError {
    ShipError::NotFound
}

/// 未知路徑與不支援的 method 都回 404 JSON
pub fn router(shipments: ShipmentService) -> Router {
    Router::new()
        .route("/health", get(health).fallback(not_found))
        .route("/shipments", post(create_shipment).fallback(not_found))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { shipments })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validation_failure_renders_list_even_for_one() {
        let err = ShipError::ValidationFailure(vec![
            "instance.zip does not meet minimum length of 5".to_string()
        ]);
        let body = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(
            body,
            json!({
                "error": {
                    "message": ["instance.zip does not meet minimum length of 5"],
                    "status": 400
                }
            })
        );
    }

    #[test]
    fn test_malformed_request_renders_string() {
        let body = serde_json::to_value(ErrorResponse::from(&ShipError::MalformedRequest)).unwrap();
        assert_eq!(
            body,
            json!({ "error": { "message": "Bad Request", "status": 400 } })
        );
    }

    #[test]
    fn test_provider_failure_is_500() {
        let err = ShipError::ProviderStatusError { status: 503 };
        let body = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(body["error"]["status"], 500);
        assert_eq!(
            body["error"]["message"],
            "Shipping provider responded with status 503"
        );
    }
}
