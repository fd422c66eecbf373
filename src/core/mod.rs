pub mod driver;
pub mod filter;

pub use crate::domain::model::{DataSource, FilterReport, OutputFormat};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
