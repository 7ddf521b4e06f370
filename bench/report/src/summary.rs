use crate::error::ReportError;
use crate::types::chunk_profile::ChunkProfile;
use crate::types::row::{BenchmarkRow, BYTES_PER_KB};
use crate::types::table::{BenchmarkTable, CHUNK_SIZE_COLUMN};
use crate::utils::{max, min, round_float};
use serde::{Deserialize, Serialize};

fn non_empty<'a>(
    table: &'a BenchmarkTable,
    statistic: &'static str,
) -> Result<&'a [BenchmarkRow], ReportError> {
    if table.is_empty() {
        return Err(ReportError::EmptyInput { statistic });
    }
    Ok(table.rows())
}

pub fn max_throughput(table: &BenchmarkTable) -> Result<f64, ReportError> {
    let rows = non_empty(table, "max throughput")?;
    max(rows.iter().map(|row| row.throughput_mbps))
        .ok_or(ReportError::EmptyInput { statistic: "max throughput" })
}

pub fn min_throughput(table: &BenchmarkTable) -> Result<f64, ReportError> {
    let rows = non_empty(table, "min throughput")?;
    min(rows.iter().map(|row| row.throughput_mbps))
        .ok_or(ReportError::EmptyInput { statistic: "min throughput" })
}

pub fn mean_throughput(table: &BenchmarkTable) -> Result<f64, ReportError> {
    let rows = non_empty(table, "mean throughput")?;
    let mean = rows.iter().map(|row| row.throughput_mbps).sum::<f64>() / rows.len() as f64;
    // Summation error must not push the mean outside the observed range.
    Ok(mean.max(min_throughput(table)?).min(max_throughput(table)?))
}

/// Smallest and largest payload in MB.
pub fn file_size_range_mb(table: &BenchmarkTable) -> Result<(f64, f64), ReportError> {
    let rows = non_empty(table, "file size range")?;
    let sizes = || rows.iter().map(BenchmarkRow::file_size_mb);
    match (min(sizes()), max(sizes())) {
        (Some(min), Some(max)) => Ok((min, max)),
        _ => Err(ReportError::EmptyInput {
            statistic: "file size range",
        }),
    }
}

/// First row holding the maximum throughput.
pub fn fastest_row(table: &BenchmarkTable) -> Result<&BenchmarkRow, ReportError> {
    let rows = non_empty(table, "fastest run")?;
    let mut fastest = &rows[0];
    for row in &rows[1..] {
        if row.throughput_mbps > fastest.throughput_mbps {
            fastest = row;
        }
    }
    Ok(fastest)
}

/// Chunk size in whole KB of the fastest run.
pub fn best_chunk_size(table: &BenchmarkTable) -> Result<u64, ReportError> {
    table.require_chunk_column()?;
    let fastest = fastest_row(table)?;
    let distinct = table.distinct_chunk_sizes().len();
    if distinct < 2 {
        return Err(ReportError::SingleChunkSize { distinct });
    }

    fastest
        .chunk_size_bytes
        .map(|bytes| bytes / BYTES_PER_KB)
        .ok_or_else(|| ReportError::MissingChunkSize {
            path: table.path().to_path_buf(),
            file_size_bytes: fastest.file_size_bytes,
        })
}

pub fn chunk_profile(table: &BenchmarkTable) -> Result<ChunkProfile, ReportError> {
    table.require_chunk_column()?;
    non_empty(table, "chunk sizes")?;
    let distinct = table.distinct_chunk_sizes();
    match distinct.as_slice() {
        [] => Err(ReportError::NoChunkSizes {
            path: table.path().to_path_buf(),
            column: CHUNK_SIZE_COLUMN,
        }),
        [single] => Ok(ChunkProfile::Single {
            chunk_size_kb: single / BYTES_PER_KB,
        }),
        _ => Ok(ChunkProfile::Multiple {
            tested_kb: distinct.iter().map(|bytes| bytes / BYTES_PER_KB).collect(),
            best_kb: best_chunk_size(table)?,
        }),
    }
}

pub fn percent_improvement(old: &BenchmarkRow, new: &BenchmarkRow) -> Result<f64, ReportError> {
    improvement_pct(old.throughput_mbps, new.throughput_mbps)
}

/// Relative change from `old` to `new` in percent.
pub fn improvement_pct(old: f64, new: f64) -> Result<f64, ReportError> {
    if old == 0.0 {
        return Err(ReportError::DivisionByZero);
    }
    Ok((new - old) / old * 100.0)
}

/// The only row with the given payload size. Several matches are rejected
/// because the caller cannot tell which run it is comparing.
pub fn lookup_by_file_size(
    table: &BenchmarkTable,
    size_bytes: u64,
) -> Result<&BenchmarkRow, ReportError> {
    let mut matches = table
        .rows()
        .iter()
        .filter(|row| row.file_size_bytes == size_bytes);
    let first = matches.next().ok_or(ReportError::NotFound { size_bytes })?;
    let others = matches.count();
    if others > 0 {
        return Err(ReportError::AmbiguousFileSize {
            size_bytes,
            matches: others + 1,
        });
    }
    Ok(first)
}

/// Scalar report values of a single table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSummary {
    pub source: String,
    pub rows: usize,
    #[serde(serialize_with = "round_float")]
    pub max_throughput_mbps: f64,
    #[serde(serialize_with = "round_float")]
    pub min_throughput_mbps: f64,
    #[serde(serialize_with = "round_float")]
    pub avg_throughput_mbps: f64,
    #[serde(serialize_with = "round_float")]
    pub min_file_size_mb: f64,
    #[serde(serialize_with = "round_float")]
    pub max_file_size_mb: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_profile: Option<ChunkProfile>,
}

impl TableSummary {
    /// Throughput and file size statistics. Chunk sizes are ignored even when present.
    pub fn from_table(table: &BenchmarkTable) -> Result<Self, ReportError> {
        let (min_file_size_mb, max_file_size_mb) = file_size_range_mb(table)?;
        Ok(Self {
            source: table.display_name(),
            rows: table.len(),
            max_throughput_mbps: max_throughput(table)?,
            min_throughput_mbps: min_throughput(table)?,
            avg_throughput_mbps: mean_throughput(table)?,
            min_file_size_mb,
            max_file_size_mb,
            chunk_profile: None,
        })
    }

    /// Like `from_table`, plus the tested chunk sizes and the best one.
    pub fn from_chunk_study(table: &BenchmarkTable) -> Result<Self, ReportError> {
        let profile = chunk_profile(table)?;
        Ok(Self {
            chunk_profile: Some(profile),
            ..Self::from_table(table)?
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::row::BYTES_PER_MB;

    fn table(rows: Vec<BenchmarkRow>) -> BenchmarkTable {
        let has_chunk_column = rows.iter().any(|row| row.chunk_size_bytes.is_some());
        BenchmarkTable::new("bench.csv", rows, has_chunk_column)
    }

    fn results() -> BenchmarkTable {
        table(vec![
            BenchmarkRow::new(1024, 12.5, 0.6, None),
            BenchmarkRow::new(BYTES_PER_MB, 410.0, 20.4, None),
            BenchmarkRow::new(100 * BYTES_PER_MB, 930.0, 902.1, None),
            BenchmarkRow::new(1024 * BYTES_PER_MB, 880.5, 9754.0, None),
        ])
    }

    fn chunk_study() -> BenchmarkTable {
        table(vec![
            BenchmarkRow::new(BYTES_PER_MB, 10.0, 800.0, Some(4096)),
            BenchmarkRow::new(BYTES_PER_MB, 30.0, 270.0, Some(8192)),
            BenchmarkRow::new(BYTES_PER_MB, 20.0, 400.0, Some(16384)),
        ])
    }

    #[test]
    fn should_compute_throughput_aggregates() {
        let table = results();
        assert_eq!(max_throughput(&table).unwrap(), 930.0);
        assert_eq!(min_throughput(&table).unwrap(), 12.5);
        assert!((mean_throughput(&table).unwrap() - 558.25).abs() < 1e-9);
    }

    #[test]
    fn mean_should_lie_between_min_and_max() {
        let tables = [
            results(),
            chunk_study(),
            table(vec![BenchmarkRow::new(1, 0.1, 1.0, None); 3]),
            table(vec![BenchmarkRow::new(1, 7.0, 1.0, None)]),
        ];
        for table in &tables {
            let min = min_throughput(table).unwrap();
            let mean = mean_throughput(table).unwrap();
            let max = max_throughput(table).unwrap();
            assert!(min <= mean && mean <= max, "{min} <= {mean} <= {max}");
        }
    }

    #[test]
    fn aggregates_should_fail_on_empty_table() {
        let empty = table(vec![]);
        assert!(matches!(
            mean_throughput(&empty),
            Err(ReportError::EmptyInput { .. })
        ));
        assert!(matches!(
            max_throughput(&empty),
            Err(ReportError::EmptyInput { .. })
        ));
        assert!(matches!(
            min_throughput(&empty),
            Err(ReportError::EmptyInput { .. })
        ));
        assert!(matches!(
            file_size_range_mb(&empty),
            Err(ReportError::EmptyInput { .. })
        ));
    }

    #[test]
    fn file_size_range_should_be_in_megabytes() {
        let (min, max) = file_size_range_mb(&results()).unwrap();
        assert!((min - 1024.0 / (1024.0 * 1024.0)).abs() < 1e-12);
        assert!((max - 1024.0).abs() < 1e-12);
    }

    #[test]
    fn best_chunk_size_should_follow_fastest_run() {
        assert_eq!(best_chunk_size(&chunk_study()).unwrap(), 8);
    }

    #[test]
    fn best_chunk_size_should_take_first_run_on_ties() {
        let table = table(vec![
            BenchmarkRow::new(BYTES_PER_MB, 30.0, 1.0, Some(65536)),
            BenchmarkRow::new(BYTES_PER_MB, 30.0, 1.0, Some(4096)),
        ]);
        assert_eq!(best_chunk_size(&table).unwrap(), 64);
    }

    #[test]
    fn best_chunk_size_should_require_chunk_column() {
        assert!(matches!(
            best_chunk_size(&results()),
            Err(ReportError::Schema { .. })
        ));
    }

    #[test]
    fn best_chunk_size_should_require_several_chunk_sizes() {
        let table = table(vec![
            BenchmarkRow::new(BYTES_PER_MB, 10.0, 1.0, Some(8192)),
            BenchmarkRow::new(10 * BYTES_PER_MB, 20.0, 1.0, Some(8192)),
        ]);
        assert!(matches!(
            best_chunk_size(&table),
            Err(ReportError::SingleChunkSize { distinct: 1 })
        ));
    }

    #[test]
    fn chunk_profile_should_distinguish_single_and_multiple() {
        assert_eq!(
            chunk_profile(&chunk_study()).unwrap(),
            ChunkProfile::Multiple {
                tested_kb: vec![4, 8, 16],
                best_kb: 8
            }
        );

        let single = table(vec![BenchmarkRow::new(BYTES_PER_MB, 10.0, 1.0, Some(8192))]);
        assert_eq!(
            chunk_profile(&single).unwrap(),
            ChunkProfile::Single { chunk_size_kb: 8 }
        );
    }

    #[test]
    fn should_compute_percent_improvement() {
        let old = BenchmarkRow::new(BYTES_PER_MB, 100.0, 1.0, None);
        let new = BenchmarkRow::new(BYTES_PER_MB, 150.0, 1.0, None);
        assert_eq!(percent_improvement(&old, &new).unwrap(), 50.0);
        assert!(percent_improvement(&new, &old).unwrap() < 0.0);
        assert_eq!(percent_improvement(&old, &old).unwrap(), 0.0);
    }

    #[test]
    fn percent_improvement_should_reject_zero_baseline() {
        let old = BenchmarkRow::new(BYTES_PER_MB, 0.0, 1.0, None);
        let new = BenchmarkRow::new(BYTES_PER_MB, 150.0, 1.0, None);
        assert!(matches!(
            percent_improvement(&old, &new),
            Err(ReportError::DivisionByZero)
        ));
    }

    #[test]
    fn should_lookup_row_by_file_size() {
        let table = results();
        let row = lookup_by_file_size(&table, 1_048_576).unwrap();
        assert_eq!(row.throughput_mbps, 410.0);

        assert!(matches!(
            lookup_by_file_size(&table, 10 * BYTES_PER_MB),
            Err(ReportError::NotFound {
                size_bytes: 10_485_760
            })
        ));
    }

    #[test]
    fn lookup_should_reject_duplicate_file_sizes() {
        assert!(matches!(
            lookup_by_file_size(&chunk_study(), BYTES_PER_MB),
            Err(ReportError::AmbiguousFileSize { matches: 3, .. })
        ));
    }

    #[test]
    fn summary_should_include_chunk_profile_only_for_chunk_study() {
        let summary = TableSummary::from_table(&results()).unwrap();
        assert_eq!(summary.rows, 4);
        assert_eq!(summary.max_throughput_mbps, 930.0);
        assert_eq!(summary.chunk_profile, None);

        assert_eq!(TableSummary::from_table(&chunk_study()).unwrap().chunk_profile, None);
        let summary = TableSummary::from_chunk_study(&chunk_study()).unwrap();
        assert_eq!(summary.rows, 3);
        assert!(summary.chunk_profile.unwrap().is_multiple());

        assert!(matches!(
            TableSummary::from_chunk_study(&results()),
            Err(ReportError::Schema { .. })
        ));
    }

    #[test]
    fn results_summary_should_ignore_empty_chunk_cells() {
        let partly_empty = BenchmarkTable::new(
            "results.csv",
            vec![
                BenchmarkRow::new(BYTES_PER_MB, 10.0, 1.0, Some(4096)),
                BenchmarkRow::new(BYTES_PER_MB, 90.0, 1.0, None),
                BenchmarkRow::new(BYTES_PER_MB, 20.0, 1.0, Some(8192)),
            ],
            true,
        );
        let all_empty = BenchmarkTable::new(
            "results.csv",
            vec![BenchmarkRow::new(BYTES_PER_MB, 10.0, 1.0, None)],
            true,
        );
        assert_eq!(TableSummary::from_table(&partly_empty).unwrap().max_throughput_mbps, 90.0);
        assert_eq!(TableSummary::from_table(&all_empty).unwrap().rows, 1);

        assert!(matches!(
            best_chunk_size(&partly_empty),
            Err(ReportError::MissingChunkSize {
                file_size_bytes: BYTES_PER_MB,
                ..
            })
        ));
        assert!(matches!(
            chunk_profile(&all_empty),
            Err(ReportError::NoChunkSizes { .. })
        ));
        assert!(matches!(
            chunk_profile(&BenchmarkTable::new("empty.csv", vec![], true)),
            Err(ReportError::EmptyInput { .. })
        ));
    }

    #[test]
    fn mean_should_not_panic_on_nan_throughput() {
        let table = table(vec![BenchmarkRow::new(1, f64::NAN, 1.0, None); 2]);
        assert!(mean_throughput(&table).unwrap().is_nan());
    }

    #[test]
    fn summary_json_should_round_floats() {
        let table = table(vec![BenchmarkRow::new(BYTES_PER_MB, 123.45678, 1.0, None)]);
        let summary = TableSummary::from_table(&table).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["max_throughput_mbps"], 123.457);
        assert_eq!(json["source"], "bench");
        assert!(json.get("chunk_profile").is_none());
    }
}
