pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod web;

pub use config::ServeConfig;
pub use core::{dataset, loader, Forest};
pub use domain::passenger::Passenger;
pub use domain::ports::Classifier;
pub use utils::error::{Result, ServeError};
