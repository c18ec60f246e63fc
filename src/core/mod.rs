pub mod shipment;
pub mod validator;

pub use crate::domain::model::{ShipmentReceipt, ShipmentRequest, ShipmentResult};
pub use crate::domain::ports::{ConfigProvider, ShipmentProvider};
pub use crate::utils::error::Result;
