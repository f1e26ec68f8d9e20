pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{OutputFormat, TourSettings};
pub use crate::core::tour::{DemoReport, TourEngine, TourReport};
pub use crate::domain::model::{City, Person};
pub use crate::utils::error::{Result, TourError};
