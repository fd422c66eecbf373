use crate::domain::processor::ProcessorStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DataSource<'a> {
    Inline(&'a [f64]),
    Csv {
        path: &'a str,
        column: Option<&'a str>,
        has_headers: bool,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterReport {
    pub name: String,
    pub status: ProcessorStatus,
    pub threshold: f64,
    pub total: usize,
    pub above: usize,
    pub below_or_equal: usize,
}

impl fmt::Display for FilterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} values exceed {}",
            self.name, self.above, self.total, self.threshold
        )
    }
}
