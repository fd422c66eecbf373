pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
mod args {
    use crate::core::{ConfigProvider, DataSource, OutputFormat};
    use crate::utils::error::{DemoError, Result};
    use crate::utils::validation::{self, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "data-filter")]
    #[command(about = "Count how many values exceed a threshold")]
    pub struct CliConfig {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        /// Inline values, comma separated
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        pub values: Vec<f64>,

        /// Count values strictly greater than this
        #[arg(short, long, allow_hyphen_values = true)]
        pub threshold: Option<f64>,

        #[arg(long, value_enum)]
        pub format: Option<OutputFormat>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub log_json: bool,
    }

    impl CliConfig {
        /// `None` when no `--values` were given, so a config file keeps its own source.
        pub fn values_override(&self) -> Option<Vec<f64>> {
            if self.values.is_empty() {
                None
            } else {
                Some(self.values.clone())
            }
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if self.config.is_none() && self.values.is_empty() {
                return Err(DemoError::MissingConfigError {
                    field: "--values or --config".to_string(),
                });
            }
            if let Some(path) = &self.config {
                validation::validate_path("--config", path)?;
            }
            if self.config.is_none() {
                let threshold = validation::validate_required_field("--threshold", &self.threshold)?;
                validation::validate_finite("--threshold", *threshold)?;
            }
            validation::validate_all_finite("--values", &self.values)
        }
    }

    impl ConfigProvider for CliConfig {
        fn name(&self) -> &str {
            "cli"
        }

        fn threshold(&self) -> Result<f64> {
            validation::validate_required_field("--threshold", &self.threshold).copied()
        }

        fn data_source(&self) -> Result<DataSource<'_>> {
            Ok(DataSource::Inline(&self.values))
        }

        fn output_format(&self) -> OutputFormat {
            self.format.unwrap_or_default()
        }
    }

}

#[cfg(feature = "cli")]
pub use args::CliConfig;
