use crate::comparison::VersionComparison;
use crate::summary::TableSummary;
use crate::types::chunk_profile::ChunkProfile;
use colored::{Color, ColoredString, Colorize};
use tracing::debug;

impl TableSummary {
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines = vec![
            "Benchmark Summary:".to_owned(),
            format!("Max throughput: {:.2} Mbps", self.max_throughput_mbps),
            format!("Min throughput: {:.2} Mbps", self.min_throughput_mbps),
            format!("Avg throughput: {:.2} Mbps", self.avg_throughput_mbps),
            format!(
                "File size range: {:.3} MB to {:.1} MB",
                self.min_file_size_mb, self.max_file_size_mb
            ),
        ];

        match &self.chunk_profile {
            Some(ChunkProfile::Multiple { tested_kb, best_kb }) => {
                let tested = tested_kb
                    .iter()
                    .map(|kb| format!("{kb}KB"))
                    .collect::<Vec<_>>()
                    .join(", ");
                lines.push(format!("Chunk sizes tested: {tested}"));
                lines.push(format!("Best performing chunk size: {best_kb}KB"));
            }
            Some(ChunkProfile::Single { chunk_size_kb }) => {
                lines.push(format!("Chunk size: {chunk_size_kb}KB"));
            }
            None => {}
        }
        lines
    }

    pub fn print_report(&self) {
        debug!("Printing summary of {} ({} rows)", self.source, self.rows);
        for (index, line) in self.report_lines().into_iter().enumerate() {
            if index == 0 {
                println!("{}", line.bold().blue());
            } else {
                println!("{line}");
            }
        }
    }
}

impl VersionComparison {
    pub fn title(&self) -> String {
        format!(
            "{} vs {} Performance Analysis",
            self.baseline_label, self.candidate_label
        )
    }

    pub fn key_size_lines(&self) -> Vec<ColoredString> {
        self.key_sizes
            .iter()
            .map(|size| {
                let color = if size.improvement_pct >= 0.0 {
                    Color::Green
                } else {
                    Color::Red
                };
                format!(
                    "{:>6}: {:6.1} → {:6.1} Mbps ({:+5.1}%)",
                    size.label, size.baseline_mbps, size.candidate_mbps, size.improvement_pct
                )
                .color(color)
            })
            .collect()
    }

    pub fn overall_lines(&self) -> Vec<String> {
        vec![
            format!(
                "{} avg: {:.1} Mbps",
                self.baseline_label, self.baseline_avg_mbps
            ),
            format!(
                "{} avg: {:.1} Mbps",
                self.candidate_label, self.candidate_avg_mbps
            ),
            format!("Overall improvement: {:+.1}%", self.overall_improvement_pct),
        ]
    }

    pub fn print_report(&self) {
        println!("{}", "=== TOKIO-RUSTLS VERSION COMPARISON ===".bold().blue());
        println!("{}\n", self.title());
        for line in self.key_size_lines() {
            println!("{line}");
        }
        println!("\n{}", "Overall Summary:".bold());
        for line in self.overall_lines() {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::SizeComparison;

    fn summary(chunk_profile: Option<ChunkProfile>) -> TableSummary {
        TableSummary {
            source: "chunk_study".to_owned(),
            rows: 3,
            max_throughput_mbps: 30.0,
            min_throughput_mbps: 10.0,
            avg_throughput_mbps: 20.0,
            min_file_size_mb: 1.0 / 1024.0,
            max_file_size_mb: 1024.0,
            chunk_profile,
        }
    }

    #[test]
    fn should_format_summary_lines() {
        assert_eq!(
            summary(None).report_lines(),
            [
                "Benchmark Summary:",
                "Max throughput: 30.00 Mbps",
                "Min throughput: 10.00 Mbps",
                "Avg throughput: 20.00 Mbps",
                "File size range: 0.001 MB to 1024.0 MB",
            ]
        );
    }

    #[test]
    fn should_list_tested_chunk_sizes() {
        let lines = summary(Some(ChunkProfile::Multiple {
            tested_kb: vec![4, 8, 16],
            best_kb: 8,
        }))
        .report_lines();
        assert_eq!(lines[5], "Chunk sizes tested: 4KB, 8KB, 16KB");
        assert_eq!(lines[6], "Best performing chunk size: 8KB");
    }

    #[test]
    fn should_report_single_chunk_size() {
        let lines = summary(Some(ChunkProfile::Single { chunk_size_kb: 8 })).report_lines();
        assert_eq!(lines.last().unwrap(), "Chunk size: 8KB");
    }

    #[test]
    fn should_format_comparison_lines() {
        let comparison = VersionComparison {
            baseline_label: "v0.24.1".to_owned(),
            candidate_label: "v0.26.2".to_owned(),
            key_sizes: vec![SizeComparison {
                size_bytes: 1_048_576,
                label: "1MB".to_owned(),
                baseline_mbps: 100.0,
                candidate_mbps: 150.0,
                improvement_pct: 50.0,
            }],
            improvement_series: vec![],
            baseline_avg_mbps: 275.0,
            candidate_avg_mbps: 300.0,
            overall_improvement_pct: 9.0909,
        };

        assert_eq!(comparison.title(), "v0.24.1 vs v0.26.2 Performance Analysis");
        let key_sizes = comparison.key_size_lines();
        assert_eq!(&*key_sizes[0], "   1MB:  100.0 →  150.0 Mbps (+50.0%)");
        assert_eq!(
            comparison.overall_lines(),
            [
                "v0.24.1 avg: 275.0 Mbps",
                "v0.26.2 avg: 300.0 Mbps",
                "Overall improvement: +9.1%",
            ]
        );
    }
}
