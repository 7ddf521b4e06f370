pub const DEFAULT_RESULTS_INPUT: &str = "benchmark_results.csv";
pub const DEFAULT_CHUNKS_INPUT: &str = "chunk_study.csv";
pub const DEFAULT_BASELINE_INPUT: &str = "v0241_results.csv";
pub const DEFAULT_CANDIDATE_INPUT: &str = "v0262_results.csv";
pub const DEFAULT_BASELINE_LABEL: &str = "v0.24.1";
pub const DEFAULT_CANDIDATE_LABEL: &str = "v0.26.2";

pub const DEFAULT_REPORT_OUTPUT: &str = "tokio_rustls_benchmark.png";
pub const DEFAULT_COMPARISON_OUTPUT: &str = "tokio_rustls_version_comparison.png";

pub const DEFAULT_WIDTH: u32 = 1600;
pub const DEFAULT_HEIGHT: u32 = 1200;
pub const MIN_IMAGE_SIDE: u32 = 200;
