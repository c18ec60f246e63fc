// Adapters layer: concrete implementations for external systems (inbound http, ShipIt client).

pub mod http;
pub mod shipit;
