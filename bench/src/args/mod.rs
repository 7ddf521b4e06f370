pub mod defaults;
pub mod output;

use clap::{Args, Parser, Subcommand};
use defaults::*;
use output::OutputArgs;
use std::path::PathBuf;
use tls_bench_report::file_size::DEFAULT_COMPARISON_SIZES;
use tls_bench_report::report_kind::ReportKind;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct TlsBenchArgs {
    #[command(subcommand)]
    pub command: ReportCommand,

    /// Disable colored console output
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    /// Also write TRACE level logs to the given file
    #[arg(long, global = true)]
    pub debug: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum ReportCommand {
    #[command(
        about = "Throughput and duration against file size",
        visible_alias = "r"
    )]
    Results(ResultsArgs),

    #[command(
        about = "Effect of the streaming chunk size on throughput",
        long_about = "Charts a benchmark run with a chunk_size_bytes column, one series per chunk size",
        visible_alias = "c"
    )]
    Chunks(ChunksArgs),

    #[command(
        about = "Compare two benchmark runs, e.g. two library versions",
        visible_alias = "cmp"
    )]
    Compare(CompareArgs),
}

impl ReportCommand {
    pub fn kind(&self) -> ReportKind {
        match self {
            ReportCommand::Results(_) => ReportKind::Results,
            ReportCommand::Chunks(_) => ReportKind::ChunkStudy,
            ReportCommand::Compare(_) => ReportKind::VersionComparison,
        }
    }
}

#[derive(Args, Debug)]
pub struct ResultsArgs {
    /// Benchmark results in CSV format
    #[arg(long, short = 'i', default_value = DEFAULT_RESULTS_INPUT)]
    pub input: PathBuf,

    /// Path of the chart image, HTML charts are written next to it
    #[arg(long, short = 'o', default_value = DEFAULT_REPORT_OUTPUT)]
    pub output: PathBuf,

    #[command(flatten)]
    pub render: OutputArgs,
}

#[derive(Args, Debug)]
pub struct ChunksArgs {
    /// Chunk size study in CSV format, must have a chunk_size_bytes column
    #[arg(long, short = 'i', default_value = DEFAULT_CHUNKS_INPUT)]
    pub input: PathBuf,

    /// Path of the chart image, HTML charts are written next to it
    #[arg(long, short = 'o', default_value = DEFAULT_REPORT_OUTPUT)]
    pub output: PathBuf,

    #[command(flatten)]
    pub render: OutputArgs,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Results of the older run
    #[arg(long, default_value = DEFAULT_BASELINE_INPUT)]
    pub baseline: PathBuf,

    /// Legend label of the older run
    #[arg(long, default_value = DEFAULT_BASELINE_LABEL)]
    pub baseline_label: String,

    /// Results of the newer run
    #[arg(long, default_value = DEFAULT_CANDIDATE_INPUT)]
    pub candidate: PathBuf,

    /// Legend label of the newer run
    #[arg(long, default_value = DEFAULT_CANDIDATE_LABEL)]
    pub candidate_label: String,

    /// File sizes in bytes compared one by one, both runs must contain each of them
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_COMPARISON_SIZES)]
    pub sizes: Vec<u64>,

    /// Path of the chart image, HTML charts are written next to it
    #[arg(long, short = 'o', default_value = DEFAULT_COMPARISON_OUTPUT)]
    pub output: PathBuf,

    #[command(flatten)]
    pub render: OutputArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use output::OutputFormat;

    #[test]
    fn args_should_be_consistent() {
        TlsBenchArgs::command().debug_assert();
    }

    #[test]
    fn compare_should_default_to_key_sizes() {
        let args = TlsBenchArgs::parse_from(["tls-bench", "compare"]);
        let ReportCommand::Compare(compare) = args.command else {
            panic!("expected compare command");
        };
        assert_eq!(compare.sizes, DEFAULT_COMPARISON_SIZES);
        assert_eq!(compare.baseline_label, "v0.24.1");
        assert_eq!(compare.output, PathBuf::from(DEFAULT_COMPARISON_OUTPUT));
        assert_eq!(compare.render.format, OutputFormat::Png);
    }

    #[test]
    fn should_parse_comma_separated_sizes() {
        let args = TlsBenchArgs::parse_from([
            "tls-bench",
            "--no-color",
            "compare",
            "--sizes",
            "1024,2048",
            "--format",
            "both",
        ]);
        assert!(args.no_color);
        let ReportCommand::Compare(compare) = args.command else {
            panic!("expected compare command");
        };
        assert_eq!(compare.sizes, [1024, 2048]);
        assert!(compare.render.format.png() && compare.render.format.html());
    }

    #[test]
    fn should_reject_tiny_images() {
        let result = TlsBenchArgs::try_parse_from(["tls-bench", "results", "--width", "10"]);
        assert!(result.is_err());
    }
}
