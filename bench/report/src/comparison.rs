use crate::error::ReportError;
use crate::summary::{improvement_pct, lookup_by_file_size, mean_throughput, percent_improvement};
use crate::types::file_size::size_label;
use crate::types::table::BenchmarkTable;
use crate::utils::round_float;
use serde::Serialize;
use tracing::{debug, warn};

/// Throughput of both runs at one key file size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeComparison {
    pub size_bytes: u64,
    pub label: String,
    #[serde(serialize_with = "round_float")]
    pub baseline_mbps: f64,
    #[serde(serialize_with = "round_float")]
    pub candidate_mbps: f64,
    #[serde(serialize_with = "round_float")]
    pub improvement_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, derive_new::new)]
pub struct ImprovementPoint {
    pub file_size_mb: f64,
    #[serde(serialize_with = "round_float")]
    pub improvement_pct: f64,
}

/// Candidate run measured against a baseline run of the same benchmark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionComparison {
    pub baseline_label: String,
    pub candidate_label: String,
    pub key_sizes: Vec<SizeComparison>,
    pub improvement_series: Vec<ImprovementPoint>,
    #[serde(serialize_with = "round_float")]
    pub baseline_avg_mbps: f64,
    #[serde(serialize_with = "round_float")]
    pub candidate_avg_mbps: f64,
    #[serde(serialize_with = "round_float")]
    pub overall_improvement_pct: f64,
}

impl VersionComparison {
    pub fn new(
        baseline: &BenchmarkTable,
        candidate: &BenchmarkTable,
        key_sizes: &[u64],
    ) -> Result<Self, ReportError> {
        let key_sizes = key_sizes
            .iter()
            .map(|&size_bytes| {
                let old = lookup_by_file_size(baseline, size_bytes)?;
                let new = lookup_by_file_size(candidate, size_bytes)?;
                Ok(SizeComparison {
                    size_bytes,
                    label: size_label(size_bytes),
                    baseline_mbps: old.throughput_mbps,
                    candidate_mbps: new.throughput_mbps,
                    improvement_pct: percent_improvement(old, new)?,
                })
            })
            .collect::<Result<Vec<_>, ReportError>>()?;

        let baseline_avg_mbps = mean_throughput(baseline)?;
        let candidate_avg_mbps = mean_throughput(candidate)?;

        Ok(Self {
            baseline_label: baseline.display_name(),
            candidate_label: candidate.display_name(),
            key_sizes,
            improvement_series: improvement_series(baseline, candidate)?,
            baseline_avg_mbps,
            candidate_avg_mbps,
            overall_improvement_pct: improvement_pct(baseline_avg_mbps, candidate_avg_mbps)?,
        })
    }
}

/// Improvement of every candidate row over the baseline row with the same file size,
/// ordered by file size.
pub fn improvement_series(
    baseline: &BenchmarkTable,
    candidate: &BenchmarkTable,
) -> Result<Vec<ImprovementPoint>, ReportError> {
    let mut points = Vec::with_capacity(candidate.len());
    for new in candidate.rows() {
        let old = match lookup_by_file_size(baseline, new.file_size_bytes) {
            Ok(old) => old,
            Err(ReportError::NotFound { size_bytes }) => {
                warn!(
                    "{} has no {} bytes run, skipping it in the improvement series",
                    baseline.display_name(),
                    size_bytes
                );
                continue;
            }
            Err(error) => return Err(error),
        };
        points.push(ImprovementPoint::new(
            new.file_size_mb(),
            percent_improvement(old, new)?,
        ));
    }
    points.sort_by(|a, b| a.file_size_mb.total_cmp(&b.file_size_mb));
    debug!("Improvement series has {} points", points.len());
    Ok(points)
}
