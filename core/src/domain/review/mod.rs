pub mod aggregator;
pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
