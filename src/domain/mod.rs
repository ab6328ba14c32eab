// Domain layer: value types, reference tables and the container outline port.

pub mod catalog;
pub mod model;
pub mod ports;
