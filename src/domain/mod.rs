// Domain layer: wire DTOs and the ports the bridge talks through.

pub mod model;
pub mod ports;
