use crate::comparison::VersionComparison;
use crate::summary::TableSummary;
use crate::types::chunk_profile::ChunkProfile;
use crate::types::row::BYTES_PER_MB;
use human_repr::HumanCount;

impl TableSummary {
    pub fn subtext(&self) -> String {
        let mut parts = vec![
            format!("{} Runs", self.rows),
            self.format_payload_range(),
            format!(
                "Throughput Avg: {:.2} Mbps, Min: {:.2} Mbps, Max: {:.2} Mbps",
                self.avg_throughput_mbps, self.min_throughput_mbps, self.max_throughput_mbps
            ),
        ];
        if let Some(chunks) = self.format_chunks() {
            parts.push(chunks);
        }
        parts.join("  •  ")
    }

    fn format_payload_range(&self) -> String {
        let to_bytes = |mb: f64| (mb * BYTES_PER_MB as f64).round() as u64;
        format!(
            "{} to {} Payload",
            to_bytes(self.min_file_size_mb).human_count_bytes(),
            to_bytes(self.max_file_size_mb).human_count_bytes(),
        )
    }

    fn format_chunks(&self) -> Option<String> {
        match self.chunk_profile.as_ref()? {
            ChunkProfile::Single { chunk_size_kb } => Some(format!("{chunk_size_kb}KB Chunks")),
            ChunkProfile::Multiple { tested_kb, best_kb } => Some(format!(
                "{} Chunk Sizes, Best: {best_kb}KB",
                tested_kb.len()
            )),
        }
    }
}

impl VersionComparison {
    pub fn subtext(&self) -> String {
        let key_sizes = self
            .key_sizes
            .iter()
            .map(|size| format!("{} {:+.1}%", size.label, size.improvement_pct))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{} Avg: {:.1} Mbps  •  {} Avg: {:.1} Mbps  •  Overall: {:+.1}%  •  {}",
            self.baseline_label,
            self.baseline_avg_mbps,
            self.candidate_label,
            self.candidate_avg_mbps,
            self.overall_improvement_pct,
            key_sizes
        )
    }
}
