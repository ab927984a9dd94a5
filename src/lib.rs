pub mod collector;
pub mod command;
pub mod config;
pub mod error;
pub mod executor;
pub mod ui;

pub use config::{Config, CropMode};
pub use error::{AppError, Result};
