use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
    Default,
    PartialOrd,
    Ord,
)]
pub enum ReportKind {
    #[default]
    #[display("Benchmark Results")]
    #[serde(rename = "results")]
    Results,
    #[display("Chunk Size Study")]
    #[serde(rename = "chunk_study")]
    ChunkStudy,
    #[display("Version Comparison")]
    #[serde(rename = "version_comparison")]
    VersionComparison,
}
