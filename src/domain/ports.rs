use crate::domain::model::{DataSource, OutputFormat};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

pub trait ConfigProvider {
    fn name(&self) -> &str;
    fn threshold(&self) -> Result<f64>;
    fn data_source(&self) -> Result<DataSource<'_>>;
    fn output_format(&self) -> OutputFormat;
}
