use derive_more::derive::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ChartKind {
    #[display("Throughput")]
    Throughput,
    #[display("Duration")]
    Duration,
    #[display("Chunk Size")]
    ChunkSize,
    #[display("Efficiency")]
    Efficiency,
    #[display("Improvement")]
    Improvement,
    #[display("Key File Sizes")]
    KeySizes,
}

impl ChartKind {
    /// Suffix used in output file names, e.g. `report_throughput.html`.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            ChartKind::Throughput => "throughput",
            ChartKind::Duration => "duration",
            ChartKind::ChunkSize => "chunk_size",
            ChartKind::Efficiency => "efficiency",
            ChartKind::Improvement => "improvement",
            ChartKind::KeySizes => "key_sizes",
        }
    }
}
