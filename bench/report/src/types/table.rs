use super::row::BenchmarkRow;
use crate::error::ReportError;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const FILE_SIZE_COLUMN: &str = "file_size_bytes";
pub const THROUGHPUT_COLUMN: &str = "throughput_mbps";
pub const DURATION_COLUMN: &str = "duration_ms";
pub const CHUNK_SIZE_COLUMN: &str = "chunk_size_bytes";

const REQUIRED_COLUMNS: [&str; 3] = [FILE_SIZE_COLUMN, THROUGHPUT_COLUMN, DURATION_COLUMN];

/// Rows of a single benchmark run, in file order. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkTable {
    path: PathBuf,
    label: Option<String>,
    rows: Vec<BenchmarkRow>,
    has_chunk_column: bool,
}

impl BenchmarkTable {
    pub fn new(path: impl Into<PathBuf>, rows: Vec<BenchmarkRow>, has_chunk_column: bool) -> Self {
        Self {
            path: path.into(),
            label: None,
            rows,
            has_chunk_column,
        }
    }

    /// Load a comma separated benchmark file with a header row.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ReportError::MissingFile {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(file, path)?;
        info!(
            "Loaded {} benchmark rows from {} (chunk size column: {})",
            table.len(),
            path.display(),
            table.has_chunk_column
        );
        Ok(table)
    }

    /// Parse benchmark rows from any reader, `path` is only used for diagnostics.
    pub fn from_reader<R: Read>(reader: R, path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let malformed = |source| ReportError::MalformedRow {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = reader.headers().map_err(malformed)?.clone();
        debug!("Benchmark file {} header: {:?}", path.display(), headers);

        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                return Err(ReportError::Schema {
                    path: path.to_path_buf(),
                    column,
                });
            }
        }
        let has_chunk_column = headers.iter().any(|header| header == CHUNK_SIZE_COLUMN);

        let rows = reader
            .deserialize::<BenchmarkRow>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(malformed)?;
        for (index, row) in rows.iter().enumerate() {
            if let Some((column, value)) = invalid_value(row) {
                return Err(ReportError::InvalidValue {
                    path: path.to_path_buf(),
                    line: index + 2,
                    column,
                    value,
                });
            }
        }

        Ok(Self::new(path, rows, has_chunk_column))
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn rows(&self) -> &[BenchmarkRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Run label if present, otherwise the file name.
    pub fn display_name(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => self
                .path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.path.display().to_string()),
        }
    }

    pub fn has_chunk_column(&self) -> bool {
        self.has_chunk_column
    }

    pub fn require_chunk_column(&self) -> Result<(), ReportError> {
        if self.has_chunk_column {
            Ok(())
        } else {
            Err(ReportError::Schema {
                path: self.path.clone(),
                column: CHUNK_SIZE_COLUMN,
            })
        }
    }

    /// Distinct chunk sizes in bytes, ascending. Rows with an empty chunk cell are skipped.
    pub fn distinct_chunk_sizes(&self) -> Vec<u64> {
        self.rows
            .iter()
            .filter_map(|row| row.chunk_size_bytes)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// First measurement a report cannot use. Zero throughput is a valid, if failed, run.
fn invalid_value(row: &BenchmarkRow) -> Option<(&'static str, f64)> {
    if !row.throughput_mbps.is_finite() || row.throughput_mbps < 0.0 {
        return Some((THROUGHPUT_COLUMN, row.throughput_mbps));
    }
    if !row.duration_ms.is_finite() || row.duration_ms <= 0.0 {
        return Some((DURATION_COLUMN, row.duration_ms));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn parse(csv: &str) -> Result<BenchmarkTable, ReportError> {
        BenchmarkTable::from_reader(csv.as_bytes(), "test.csv")
    }

    #[test]
    fn should_load_rows_without_chunk_column() {
        let table = parse(
            "file_size_bytes,throughput_mbps,duration_ms\n\
             1048576,100.5,83.4\n\
             10485760,250.0,335.5\n",
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert!(!table.has_chunk_column());
        assert_eq!(table.rows()[0], BenchmarkRow::new(1048576, 100.5, 83.4, None));
        assert_eq!(table.display_name(), "test");
    }

    #[test]
    fn should_load_rows_with_chunk_column_in_any_order() {
        let table = parse(
            "chunk_size_bytes,duration_ms,file_size_bytes,throughput_mbps\n\
             8192,83.4,1048576,100.5\n",
        )
        .unwrap();

        assert!(table.has_chunk_column());
        assert_eq!(
            table.rows()[0],
            BenchmarkRow::new(1048576, 100.5, 83.4, Some(8192))
        );
        assert!(table.require_chunk_column().is_ok());
    }

    #[test]
    fn should_fail_when_required_column_is_missing() {
        let error = parse("file_size_bytes,duration_ms\n1048576,83.4\n").unwrap_err();
        assert!(matches!(
            error,
            ReportError::Schema {
                column: THROUGHPUT_COLUMN,
                ..
            }
        ));
    }

    #[test]
    fn should_fail_on_malformed_row() {
        let error = parse(
            "file_size_bytes,throughput_mbps,duration_ms\n\
             1048576,fast,83.4\n",
        )
        .unwrap_err();
        assert!(matches!(error, ReportError::MalformedRow { .. }));
    }

    #[test_case("NaN", "1.0", THROUGHPUT_COLUMN; "nan throughput")]
    #[test_case("inf", "1.0", THROUGHPUT_COLUMN; "infinite throughput")]
    #[test_case("-5.0", "1.0", THROUGHPUT_COLUMN; "negative throughput")]
    #[test_case("10.0", "0.0", DURATION_COLUMN; "zero duration")]
    #[test_case("10.0", "-inf", DURATION_COLUMN; "negative infinite duration")]
    #[test_case("10.0", "NaN", DURATION_COLUMN; "nan duration")]
    fn should_reject_unusable_measurements(throughput: &str, duration: &str, expected: &str) {
        let error = parse(&format!(
            "file_size_bytes,throughput_mbps,duration_ms\n\
             1024,1.0,1.0\n\
             1048576,{throughput},{duration}\n"
        ))
        .unwrap_err();
        match error {
            ReportError::InvalidValue { line, column, .. } => {
                assert_eq!(line, 3);
                assert_eq!(column, expected);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn should_load_zero_throughput() {
        let table = parse("file_size_bytes,throughput_mbps,duration_ms\n1048576,0.0,1.0\n").unwrap();
        assert_eq!(table.rows()[0].throughput_mbps, 0.0);
    }

    #[test]
    fn header_only_file_should_load_as_empty_table() {
        let table = parse("file_size_bytes,throughput_mbps,duration_ms\n").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn should_fail_on_missing_file() {
        let error = BenchmarkTable::from_path("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(error, ReportError::MissingFile { .. }));
    }

    #[test]
    fn should_load_from_path_and_keep_label() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("v0241_results.csv");
        std::fs::write(
            &path,
            "file_size_bytes,throughput_mbps,duration_ms\n1048576,100.0,80.0\n",
        )
        .unwrap();

        let table = BenchmarkTable::from_path(&path).unwrap().with_label("v0.24.1");
        assert_eq!(table.len(), 1);
        assert_eq!(table.label(), Some("v0.24.1"));
        assert_eq!(table.display_name(), "v0.24.1");
        assert_eq!(table.path(), path.as_path());
    }

    #[test]
    fn require_chunk_column_should_fail_without_column() {
        let table = BenchmarkTable::new("results.csv", vec![], false);
        assert!(matches!(
            table.require_chunk_column(),
            Err(ReportError::Schema {
                column: CHUNK_SIZE_COLUMN,
                ..
            })
        ));
    }

    #[test]
    fn distinct_chunk_sizes_should_be_sorted_and_unique() {
        let table = BenchmarkTable::new(
            "chunks.csv",
            vec![
                BenchmarkRow::new(1, 1.0, 1.0, Some(16384)),
                BenchmarkRow::new(2, 1.0, 1.0, Some(4096)),
                BenchmarkRow::new(3, 1.0, 1.0, Some(16384)),
                BenchmarkRow::new(4, 1.0, 1.0, None),
            ],
            true,
        );
        assert_eq!(table.distinct_chunk_sizes(), vec![4096, 16384]);
    }
}
