pub mod chart;
pub mod chart_kind;
pub mod data;
pub mod png;
pub mod text;

use crate::comparison::VersionComparison;
use crate::summary::TableSummary;
use crate::types::chunk_profile::ChunkProfile;
use crate::types::report_kind::ReportKind;
use crate::types::table::BenchmarkTable;
use charming::element::Symbol;
use charming::Chart;
use chart::TlsChart;
use chart_kind::ChartKind;
use text::title::title;

const BASELINE_COLOR: &str = "#E53935";
const CANDIDATE_COLOR: &str = "#1E88E5";
const SINGLE_RUN_COLOR: &str = "#3949AB";
const IMPROVEMENT_COLOR: &str = "#43A047";
const EFFICIENCY_COLOR: &str = "#8E24AA";
const CHUNK_COLORS: [&str; 6] = [
    "#440154", "#414487", "#2A788E", "#22A884", "#7AD151", "#FDE725",
];

const FILE_SIZE_AXIS: &str = "File Size (MB)";
const THROUGHPUT_AXIS: &str = "Throughput (Mbps)";
const DURATION_AXIS: &str = "Duration (ms)";

/// Interactive charts of a single benchmark table. Chunk study tables with
/// several chunk sizes get one series per chunk size plus the chunk size and
/// efficiency charts.
pub fn table_charts(
    report: ReportKind,
    table: &BenchmarkTable,
    summary: &TableSummary,
    dark: bool,
) -> Vec<(ChartKind, Chart)> {
    let subtext = summary.subtext();
    let remark = summary.chunk_profile.as_ref().and_then(ChunkProfile::title_suffix);
    let multiple = summary
        .chunk_profile
        .as_ref()
        .is_some_and(ChunkProfile::is_multiple);
    let new_chart = |kind: ChartKind, x_axis: &str, x_log: bool, y_axis: &str, y_log: bool| {
        TlsChart::new(&title(report, kind, remark.as_deref()), &subtext, dark)
            .with_value_x_axis(x_axis, x_log)
            .with_y_axis(y_axis, y_log)
    };

    let mut throughput = new_chart(ChartKind::Throughput, FILE_SIZE_AXIS, true, THROUGHPUT_AXIS, false);
    let mut duration = new_chart(ChartKind::Duration, FILE_SIZE_AXIS, true, DURATION_AXIS, true);
    if multiple {
        let throughput_groups = data::by_chunk_size(table, |row| row.throughput_mbps);
        let duration_groups = data::by_chunk_size(table, |row| row.duration_ms);
        for (index, ((_, by_throughput), (_, by_duration))) in
            throughput_groups.iter().zip(&duration_groups).enumerate()
        {
            let color = CHUNK_COLORS[index % CHUNK_COLORS.len()];
            throughput = throughput.add_series(
                &by_throughput.name,
                by_throughput.as_charming_points(),
                Symbol::Circle,
                color,
            );
            duration = duration.add_series(
                &by_duration.name,
                by_duration.as_charming_points(),
                Symbol::Circle,
                color,
            );
        }
    } else {
        let name = table.display_name();
        throughput = throughput.add_series(
            &name,
            data::throughput_by_file_size(&name, table).as_charming_points(),
            Symbol::Circle,
            SINGLE_RUN_COLOR,
        );
        duration = duration.add_series(
            &name,
            data::duration_by_file_size(&name, table).as_charming_points(),
            Symbol::Rect,
            BASELINE_COLOR,
        );
    }

    let mut charts = vec![
        (ChartKind::Throughput, throughput.inner),
        (ChartKind::Duration, duration.inner),
    ];
    if multiple {
        let by_chunk = data::throughput_by_chunk_size("Throughput", table);
        charts.push((
            ChartKind::ChunkSize,
            new_chart(ChartKind::ChunkSize, "Chunk Size (KB)", true, THROUGHPUT_AXIS, false)
                .add_series(
                    &by_chunk.name,
                    by_chunk.as_charming_points(),
                    Symbol::Circle,
                    IMPROVEMENT_COLOR,
                )
                .inner,
        ));
        let efficiency = data::efficiency_by_file_size("Efficiency", table);
        charts.push((
            ChartKind::Efficiency,
            new_chart(
                ChartKind::Efficiency,
                FILE_SIZE_AXIS,
                true,
                "Throughput per KB chunk size",
                false,
            )
            .add_series(
                &efficiency.name,
                efficiency.as_charming_points(),
                Symbol::Diamond,
                EFFICIENCY_COLOR,
            )
            .inner,
        ));
    }
    charts
}

/// Interactive charts of a version comparison.
pub fn comparison_charts(
    baseline: &BenchmarkTable,
    candidate: &BenchmarkTable,
    comparison: &VersionComparison,
    dark: bool,
) -> Vec<(ChartKind, Chart)> {
    let report = ReportKind::VersionComparison;
    let subtext = comparison.subtext();
    let (old, new) = (&comparison.baseline_label, &comparison.candidate_label);
    let remark = format!("{old} vs {new}");
    let new_chart = |kind: ChartKind| TlsChart::new(&title(report, kind, Some(&remark)), &subtext, dark);

    let throughput = new_chart(ChartKind::Throughput)
        .with_value_x_axis(FILE_SIZE_AXIS, true)
        .with_y_axis(THROUGHPUT_AXIS, false)
        .add_series(
            old,
            data::throughput_by_file_size(old, baseline).as_charming_points(),
            Symbol::Circle,
            BASELINE_COLOR,
        )
        .add_series(
            new,
            data::throughput_by_file_size(new, candidate).as_charming_points(),
            Symbol::Rect,
            CANDIDATE_COLOR,
        );

    let improvement = data::improvement_series(comparison);
    let zero_line = match (
        improvement.xs().reduce(f64::min),
        improvement.xs().reduce(f64::max),
    ) {
        (Some(first), Some(last)) => vec![vec![first, 0.0], vec![last, 0.0]],
        _ => Vec::new(),
    };
    let improvement_chart = new_chart(ChartKind::Improvement)
        .with_value_x_axis(FILE_SIZE_AXIS, true)
        .with_y_axis("Performance Improvement (%)", false)
        .add_series(
            &improvement.name,
            improvement.as_charming_points(),
            Symbol::Triangle,
            IMPROVEMENT_COLOR,
        )
        .add_reference_line("0%", zero_line, 0.5);

    let duration = new_chart(ChartKind::Duration)
        .with_value_x_axis(FILE_SIZE_AXIS, true)
        .with_y_axis(DURATION_AXIS, true)
        .add_series(
            old,
            data::duration_by_file_size(old, baseline).as_charming_points(),
            Symbol::Circle,
            BASELINE_COLOR,
        )
        .add_series(
            new,
            data::duration_by_file_size(new, candidate).as_charming_points(),
            Symbol::Rect,
            CANDIDATE_COLOR,
        );

    let key_sizes = new_chart(ChartKind::KeySizes)
        .with_category_x_axis(
            "File Size",
            comparison.key_sizes.iter().map(|c| c.label.clone()).collect(),
        )
        .with_y_axis(THROUGHPUT_AXIS, false)
        .add_bar_series(
            old,
            comparison.key_sizes.iter().map(|c| c.baseline_mbps).collect(),
            BASELINE_COLOR,
        )
        .add_bar_series(
            new,
            comparison.key_sizes.iter().map(|c| c.candidate_mbps).collect(),
            CANDIDATE_COLOR,
        );

    vec![
        (ChartKind::Throughput, throughput.inner),
        (ChartKind::Improvement, improvement_chart.inner),
        (ChartKind::Duration, duration.inner),
        (ChartKind::KeySizes, key_sizes.inner),
    ]
}
