// Domain layer: chart description types and the rendering port.

pub mod model;
pub mod ports;
