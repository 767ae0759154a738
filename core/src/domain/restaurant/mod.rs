pub mod entities;
pub mod ports;
pub mod recommender;
pub mod selector;
pub mod services;
pub mod value_objects;
