pub mod dataset;
pub mod forest;
pub mod loader;

pub use forest::{Forest, Tree};
