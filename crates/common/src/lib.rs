pub mod config;
pub mod error;
pub mod stats;

pub use config::*;
pub use error::*;
pub use stats::StdDevEstimator;
