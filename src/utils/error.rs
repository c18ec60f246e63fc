use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShipError {
    /// 請求沒有可用的 body（空白、非 JSON、或 `null`）
    #[error("Bad Request")]
    MalformedRequest,

    #[error("Shipment request failed validation: {}", .0.join("; "))]
    ValidationFailure(Vec<String>),

    #[error("Not Found")]
    NotFound,

    /// body 讀取失敗（例如超過大小上限）
    #[error("Request body rejected: {message}")]
    RequestBodyError { status: u16, message: String },

    #[error("Shipping provider request failed: {0}")]
    ProviderRequestError(#[from] reqwest::Error),

    #[error("Shipping provider responded with status {status}")]
    ProviderStatusError { status: u16 },

    #[error("Shipping provider response was malformed: {message}")]
    ProviderResponseError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ShipError {
    /// HTTP 狀態碼；未指定時為 500
    pub fn status(&self) -> u16 {
        match self {
            ShipError::MalformedRequest | ShipError::ValidationFailure(_) => 400,
            ShipError::NotFound => 404,
            ShipError::RequestBodyError { status, .. } => *status,
            _ => 500,
        }
    }

    /// 對外顯示的訊息，不包含 provider 回傳的內容
    pub fn public_message(&self) -> String {
        match self {
            ShipError::ProviderRequestError(e) if e.is_timeout() => {
                "Shipping provider timed out".to_string()
            }
            ShipError::ProviderRequestError(_) => "Shipping provider unavailable".to_string(),
            ShipError::ProviderStatusError { status } => {
                format!("Shipping provider responded with status {}", status)
            }
            ShipError::ProviderResponseError { .. } => {
                "Shipping provider returned an unexpected response".to_string()
            }
            ShipError::ValidationFailure(violations) => violations.join("; "),
            ShipError::RequestBodyError { message, .. } => message.clone(),
            ShipError::MalformedRequest | ShipError::NotFound => self.to_string(),
            _ => "Internal Server Error".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShipError>;
