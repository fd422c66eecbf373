use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessorStatus {
    Initialized,
}

impl ProcessorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessorStatus::Initialized => "initialized",
        }
    }
}

impl fmt::Display for ProcessorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts values above a threshold.
#[derive(Debug, Clone)]
pub struct DataProcessor<T> {
    data: Vec<T>,
    status: ProcessorStatus,
}

impl<T: PartialOrd> DataProcessor<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data,
            status: ProcessorStatus::Initialized,
        }
    }

    /// Number of elements strictly greater than `threshold`.
    pub fn process(&self, threshold: T) -> usize {
        self.data.iter().filter(|x| **x > threshold).count()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn status(&self) -> ProcessorStatus {
        self.status
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
