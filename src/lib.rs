pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::http::router;
pub use crate::adapters::shipit::ShipItClient;
pub use crate::config::{CliConfig, Settings};
pub use crate::core::shipment::ShipmentService;
pub use crate::utils::error::{Result, ShipError};
