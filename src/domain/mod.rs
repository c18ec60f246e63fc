// Domain layer: shipment models and ports. No HTTP types here.

pub mod model;
pub mod ports;
