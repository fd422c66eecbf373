use crate::core::{ConfigProvider, DataSource, OutputFormat};
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    pub processor: ProcessorConfig,
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorConfig {
    #[serde(default = "default_name")]
    pub name: String,
    pub threshold: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub values: Option<Vec<f64>>,
    pub csv_path: Option<String>,
    pub csv_column: Option<String>,
    pub has_headers: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_name() -> String {
    "data-filter".to_string()
}

impl FilterConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DemoError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${THRESHOLD})，未定義的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DemoError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Command-line values win over the file. Inline values replace any CSV source.
    pub fn apply_overrides(
        &mut self,
        threshold: Option<f64>,
        values: Option<Vec<f64>>,
        format: Option<OutputFormat>,
    ) {
        if let Some(threshold) = threshold {
            tracing::info!("🔧 Threshold overridden to: {}", threshold);
            self.processor.threshold = Some(threshold);
        }
        if let Some(values) = values {
            tracing::info!("🔧 Data overridden with {} inline values", values.len());
            self.source = SourceConfig {
                values: Some(values),
                ..SourceConfig::default()
            };
        }
        if let Some(format) = format {
            self.output.format = format;
        }
    }

    pub fn has_headers(&self) -> bool {
        self.source.has_headers.unwrap_or(true)
    }
}

impl Validate for FilterConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("processor.name", &self.processor.name)?;

        let threshold =
            validation::validate_required_field("processor.threshold", &self.processor.threshold)?;
        validation::validate_finite("processor.threshold", *threshold)?;

        match (&self.source.values, &self.source.csv_path) {
            (Some(values), None) => validation::validate_all_finite("source.values", values)?,
            (None, Some(path)) => {
                validation::validate_path("source.csv_path", path)?;
                if let Some(column) = &self.source.csv_column {
                    validation::validate_non_empty_string("source.csv_column", column)?;
                    if !self.has_headers() {
                        return Err(DemoError::ConfigValidationError {
                            field: "source.csv_column".to_string(),
                            message: "a named column requires has_headers = true".to_string(),
                        });
                    }
                }
            }
            (Some(_), Some(_)) => {
                return Err(DemoError::ConfigValidationError {
                    field: "source".to_string(),
                    message: "set either 'values' or 'csv_path', not both".to_string(),
                })
            }
            (None, None) => {
                return Err(DemoError::MissingConfigError {
                    field: "source.values or source.csv_path".to_string(),
                })
            }
        }

        Ok(())
    }
}

impl ConfigProvider for FilterConfig {
    fn name(&self) -> &str {
        &self.processor.name
    }

    fn threshold(&self) -> Result<f64> {
        validation::validate_required_field("processor.threshold", &self.processor.threshold)
            .copied()
    }

    fn data_source(&self) -> Result<DataSource<'_>> {
        match (&self.source.values, &self.source.csv_path) {
            (Some(values), None) => Ok(DataSource::Inline(values)),
            (None, Some(path)) => Ok(DataSource::Csv {
                path: path.as_str(),
                column: self.source.csv_column.as_deref(),
                has_headers: self.has_headers(),
            }),
            _ => Err(DemoError::ConfigValidationError {
                field: "source".to_string(),
                message: "exactly one of 'values' or 'csv_path' is required".to_string(),
            }),
        }
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format
    }
}
