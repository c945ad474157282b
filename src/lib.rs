pub mod core;
pub mod configs;
pub mod loggers;
pub mod registry;
pub mod retrieve;
pub mod services;

pub use crate::core::error::NasaError;
pub use retrieve::{Dispatcher, ResponseEnvelope};
