pub mod core;
pub mod error;
pub mod export;
pub mod loader;
pub mod pipeline;
pub mod recognize;

pub use crate::core::model::{Observation, TextCandidate};
pub use crate::error::ScanError;
