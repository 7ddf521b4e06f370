use crate::args::output::OutputArgs;
use crate::args::{ChunksArgs, CompareArgs, ReportCommand, ResultsArgs};
use crate::plot;
use anyhow::Result;
use charming::Chart;
use std::path::Path;
use tls_bench_report::comparison::VersionComparison;
use tls_bench_report::error::ReportError;
use tls_bench_report::report_kind::ReportKind;
use tls_bench_report::summary::TableSummary;
use tls_bench_report::table::{BenchmarkTable, CHUNK_SIZE_COLUMN};
use tls_bench_report::{
    comparison_charts, render_chunk_study_png, render_comparison_png, render_results_png,
    table_charts, ChartKind,
};
use tracing::{debug, info};

pub fn run(command: &ReportCommand) -> Result<()> {
    match command {
        ReportCommand::Results(args) => run_results(args),
        ReportCommand::Chunks(args) => run_chunk_study(args),
        ReportCommand::Compare(args) => run_comparison(args),
    }
}

fn run_results(args: &ResultsArgs) -> Result<()> {
    let table = BenchmarkTable::from_path(&args.input)?;
    let summary = TableSummary::from_table(&table)?;

    render(
        &args.output,
        &args.render,
        |path| render_results_png(path, args.render.size(), &table),
        || table_charts(ReportKind::Results, &table, &summary, !args.render.light),
    )?;
    summary.print_report();
    finish(&args.render, &summary)
}

fn run_chunk_study(args: &ChunksArgs) -> Result<()> {
    let table = BenchmarkTable::from_path(&args.input)?;
    let summary = TableSummary::from_chunk_study(&table)?;
    let profile = summary
        .chunk_profile
        .clone()
        .ok_or(ReportError::Schema {
            path: table.path().to_path_buf(),
            column: CHUNK_SIZE_COLUMN,
        })?;
    debug!("Chunk profile of {}: {:?}", table.display_name(), profile);

    render(
        &args.output,
        &args.render,
        |path| render_chunk_study_png(path, args.render.size(), &table, &profile),
        || table_charts(ReportKind::ChunkStudy, &table, &summary, !args.render.light),
    )?;
    summary.print_report();
    finish(&args.render, &summary)
}

fn run_comparison(args: &CompareArgs) -> Result<()> {
    let baseline = BenchmarkTable::from_path(&args.baseline)?.with_label(&args.baseline_label);
    let candidate =
        BenchmarkTable::from_path(&args.candidate)?.with_label(&args.candidate_label);
    let comparison = VersionComparison::new(&baseline, &candidate, &args.sizes)?;
    info!(
        "Compared {} key file sizes, {} paired rows",
        comparison.key_sizes.len(),
        comparison.improvement_series.len()
    );

    render(
        &args.output,
        &args.render,
        |path| render_comparison_png(path, args.render.size(), &baseline, &candidate, &comparison),
        || comparison_charts(&baseline, &candidate, &comparison, !args.render.light),
    )?;
    comparison.print_report();
    finish(&args.render, &comparison)
}

fn render(
    output: &Path,
    args: &OutputArgs,
    png: impl FnOnce(&Path) -> Result<(), ReportError>,
    charts: impl FnOnce() -> Vec<(ChartKind, Chart)>,
) -> Result<()> {
    if args.format.png() {
        plot::save_png(output, png)?;
    }
    if args.format.html() {
        let saved = plot::save_html_charts(charts(), output, args)?;
        debug!("Saved {} HTML charts", saved.len());
    }
    Ok(())
}

fn finish(args: &OutputArgs, summary: &impl serde::Serialize) -> Result<()> {
    if let Some(path) = &args.summary_json {
        plot::save_summary_json(path, summary)?;
    }
    Ok(())
}
