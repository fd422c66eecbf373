pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::FilterConfig};
pub use crate::core::{driver, filter::FilterEngine};
pub use domain::arithmetic::{add, divide, multiply, CONSTANT_VALUE};
pub use domain::greeter::Greeter;
pub use domain::processor::{DataProcessor, ProcessorStatus};
pub use utils::error::{DemoError, Result};
