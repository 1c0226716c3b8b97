pub mod cli;
pub mod dataset;
pub mod error;
pub mod models;
pub mod render;
pub mod utils;
pub mod writers;

pub use error::{AtlasError, Result};
