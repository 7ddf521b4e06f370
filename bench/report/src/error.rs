use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Cannot open benchmark file {path}")]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Benchmark file {path} has no '{column}' column")]
    Schema { path: PathBuf, column: &'static str },
    #[error("Malformed row in benchmark file {path}")]
    MalformedRow {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Benchmark file {path} line {line}: invalid '{column}' value {value}")]
    InvalidValue {
        path: PathBuf,
        line: usize,
        column: &'static str,
        value: f64,
    },
    #[error("Cannot compute {statistic} over an empty benchmark table")]
    EmptyInput { statistic: &'static str },
    #[error("No benchmark row with file size {size_bytes} bytes")]
    NotFound { size_bytes: u64 },
    #[error("File size {size_bytes} bytes matches {matches} benchmark rows")]
    AmbiguousFileSize { size_bytes: u64, matches: usize },
    #[error("Cannot compute improvement against a zero throughput baseline")]
    DivisionByZero,
    #[error("Benchmark file {path} has a '{column}' column but no chunk size values")]
    NoChunkSizes { path: PathBuf, column: &'static str },
    #[error("Fastest run in benchmark file {path} ({file_size_bytes} bytes) has no chunk size")]
    MissingChunkSize { path: PathBuf, file_size_bytes: u64 },
    #[error("Best chunk size needs more than one distinct chunk size, found {distinct}")]
    SingleChunkSize { distinct: usize },
    #[error("Cannot render chart: {0}")]
    Render(String),
    #[error("Cannot serialize summary")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error")]
    Io(#[from] std::io::Error),
}
