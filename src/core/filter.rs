use crate::core::{ConfigProvider, DataSource, FilterReport, OutputFormat, Storage};
use crate::domain::processor::DataProcessor;
use crate::utils::error::{DemoError, Result};

pub struct FilterEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> FilterEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn load_values(&self) -> Result<Vec<f64>> {
        match self.config.data_source()? {
            DataSource::Inline(values) => {
                tracing::debug!("Using {} inline values", values.len());
                Ok(values.to_vec())
            }
            DataSource::Csv {
                path,
                column,
                has_headers,
            } => {
                tracing::debug!("Reading CSV data from: {}", path);
                let bytes = self.storage.read_file(path)?;
                parse_csv_values(&bytes, column, has_headers)
            }
        }
    }

    pub fn run(&self) -> Result<FilterReport> {
        let threshold = self.config.threshold()?;
        let values = self.load_values()?;
        tracing::info!("Loaded {} values", values.len());

        let processor = DataProcessor::new(values);
        let above = processor.process(threshold);
        tracing::info!("{} values exceed threshold {}", above, threshold);

        Ok(FilterReport {
            name: self.config.name().to_string(),
            status: processor.status(),
            threshold,
            total: processor.len(),
            above,
            below_or_equal: processor.len() - above,
        })
    }

    pub fn render(&self, report: &FilterReport) -> Result<String> {
        match self.config.output_format() {
            OutputFormat::Text => Ok(report.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        }
    }
}

/// Reads one numeric column. A named column requires a header row; otherwise the first column is used.
pub fn parse_csv_values(data: &[u8], column: Option<&str>, has_headers: bool) -> Result<Vec<f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .trim(csv::Trim::All)
        .from_reader(data);

    let index = match column {
        Some(name) => {
            if !has_headers {
                return Err(DemoError::ConfigValidationError {
                    field: "source.csv_column".to_string(),
                    message: "a named column requires has_headers = true".to_string(),
                });
            }
            reader
                .headers()?
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| DemoError::ProcessingError {
                    message: format!("column '{}' not found in CSV header", name),
                })?
        }
        None => 0,
    };

    let mut values = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|pos| pos.line())
            .unwrap_or(row as u64 + 1);

        let field = record.get(index).unwrap_or("");
        if field.is_empty() {
            return Err(DemoError::ProcessingError {
                message: format!("blank value on line {}", line),
            });
        }

        let value: f64 = field.parse().map_err(|e| DemoError::ProcessingError {
            message: format!("invalid number '{}' on line {}: {}", field, line, e),
        })?;
        if !value.is_finite() {
            return Err(DemoError::ProcessingError {
                message: format!("non-finite value '{}' on line {}", field, line),
            });
        }
        values.push(value);
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MockStorage {
        files: HashMap<String, Vec<u8>>,
    }

    impl MockStorage {
        fn with_file(path: &str, data: &str) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), data.as_bytes().to_vec());
            Self { files }
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.get(path).cloned().ok_or_else(|| {
                DemoError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }
    }

    struct MockConfig {
        values: Vec<f64>,
        csv_path: Option<String>,
        column: Option<String>,
        threshold: f64,
        format: OutputFormat,
    }

    impl MockConfig {
        fn inline(values: Vec<f64>, threshold: f64) -> Self {
            Self {
                values,
                csv_path: None,
                column: None,
                threshold,
                format: OutputFormat::Text,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn name(&self) -> &str {
            "mock"
        }

        fn threshold(&self) -> Result<f64> {
            Ok(self.threshold)
        }

        fn data_source(&self) -> Result<DataSource<'_>> {
            Ok(match &self.csv_path {
                Some(path) => DataSource::Csv {
                    path: path.as_str(),
                    column: self.column.as_deref(),
                    has_headers: true,
                },
                None => DataSource::Inline(&self.values),
            })
        }

        fn output_format(&self) -> OutputFormat {
            self.format
        }
    }

    #[test]
    fn test_run_inline_values() {
        let engine = FilterEngine::new(
            MockStorage::with_file("unused.csv", ""),
            MockConfig::inline(vec![1.0, 2.0, 3.0, 4.0, 5.0], 2.0),
        );

        let report = engine.run().unwrap();
        assert_eq!(report.total, 5);
        assert_eq!(report.above, 3);
        assert_eq!(report.below_or_equal, 2);
        assert_eq!(report.status.as_str(), "initialized");
        assert_eq!(engine.render(&report).unwrap(), "mock: 3 of 5 values exceed 2");
    }

    #[test]
    fn test_run_empty_inline_values() {
        let engine = FilterEngine::new(
            MockStorage::with_file("unused.csv", ""),
            MockConfig::inline(vec![], 0.0),
        );
        let report = engine.run().unwrap();
        assert_eq!(report.total, 0);
        assert_eq!(report.above, 0);
    }

    #[test]
    fn test_run_csv_named_column() {
        let storage = MockStorage::with_file("data.csv", "id,value\n1,10\n2,0.5\n3,7\n");
        let mut config = MockConfig::inline(vec![], 1.0);
        config.csv_path = Some("data.csv".to_string());
        config.column = Some("value".to_string());
        config.format = OutputFormat::Json;

        let engine = FilterEngine::new(storage, config);
        let report = engine.run().unwrap();
        assert_eq!(report.total, 3);
        assert_eq!(report.above, 2);

        let rendered: serde_json::Value =
            serde_json::from_str(&engine.render(&report).unwrap()).unwrap();
        assert_eq!(rendered["above"], 2);
        assert_eq!(rendered["status"], "initialized");
    }

    #[test]
    fn test_run_missing_csv_file() {
        let mut config = MockConfig::inline(vec![], 1.0);
        config.csv_path = Some("missing.csv".to_string());
        let engine = FilterEngine::new(MockStorage::with_file("data.csv", "value\n1\n"), config);
        assert!(matches!(engine.run(), Err(DemoError::IoError(_))));
    }

    #[test]
    fn test_parse_csv_first_column_without_headers() {
        let values = parse_csv_values(b"1, a\n 2.5 ,b\n-3,c\n", None, false).unwrap();
        assert_eq!(values, vec![1.0, 2.5, -3.0]);
    }

    #[test]
    fn test_parse_csv_rejects_bad_values() {
        let err = parse_csv_values(b"value\n1\nabc\n", None, true).unwrap_err();
        assert!(err.to_string().contains("abc"));

        let err = parse_csv_values(b"a,value\n1,\n", Some("value"), true).unwrap_err();
        assert!(err.to_string().contains("blank value"));

        assert!(parse_csv_values(b"value\nNaN\n", None, true).is_err());
    }

    #[test]
    fn test_parse_csv_unknown_column() {
        let err = parse_csv_values(b"a,b\n1,2\n", Some("value"), true).unwrap_err();
        assert!(matches!(err, DemoError::ProcessingError { .. }));
        assert!(parse_csv_values(b"1\n", Some("value"), false).is_err());
    }
}
