use super::data::{self, category_at, normalized, Scale, Series};
use crate::comparison::VersionComparison;
use crate::error::ReportError;
use crate::types::chunk_profile::ChunkProfile;
use crate::types::table::BenchmarkTable;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const CAPTION_FONT: (&str, u32) = ("sans-serif", 22);
const AXIS_FONT: (&str, u32) = ("sans-serif", 15);
const PURPLE: RGBColor = RGBColor(128, 0, 128);
const FILE_SIZE_DESC: &str = "File Size (MB)";
const THROUGHPUT_DESC: &str = "Throughput (Mbps)";
const DURATION_DESC: &str = "Duration (ms)";

fn render_error<E: std::fmt::Display>(error: E) -> ReportError {
    ReportError::Render(error.to_string())
}

struct Layer {
    series: Series,
    color: RGBAColor,
    line: bool,
}

impl Layer {
    fn line(series: Series, color: RGBColor) -> Self {
        Self {
            series,
            color: color.to_rgba(),
            line: true,
        }
    }

    fn points(series: Series, color: RGBAColor) -> Self {
        Self {
            series,
            color,
            line: false,
        }
    }
}

struct Panel {
    title: String,
    x_desc: &'static str,
    y_desc: &'static str,
    x: Scale,
    y: Scale,
    layers: Vec<Layer>,
    reference_y: Option<f64>,
    legend: bool,
}

impl Panel {
    fn new(title: String, x_desc: &'static str, y_desc: &'static str, x: Scale, y: Scale) -> Self {
        Self {
            title,
            x_desc,
            y_desc,
            x,
            y,
            layers: Vec::new(),
            reference_y: None,
            legend: false,
        }
    }

    fn layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    fn reference_line(mut self, y: f64) -> Self {
        self.reference_y = Some(y);
        self
    }

    fn with_legend(mut self) -> Self {
        self.legend = true;
        self
    }
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
) -> Result<(), ReportError> {
    let (x_scale, y_scale) = (panel.x, panel.y);
    let x_range = x_scale.range(panel.layers.iter().flat_map(|layer| layer.series.xs()));
    let y_range = y_scale.range(
        panel
            .layers
            .iter()
            .flat_map(|layer| layer.series.ys())
            .chain(panel.reference_y),
    );

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, CAPTION_FONT)
        .margin(12)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range.clone(), y_range)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .x_desc(panel.x_desc)
        .y_desc(panel.y_desc)
        .axis_desc_style(AXIS_FONT)
        .x_label_formatter(&|v| x_scale.label(*v))
        .y_label_formatter(&|v| y_scale.label(*v))
        .draw()
        .map_err(render_error)?;

    if let Some(y) = panel.reference_y.and_then(|y| y_scale.project(y)) {
        chart
            .draw_series(LineSeries::new(
                vec![(x_range.start, y), (x_range.end, y)],
                BLACK.mix(0.5).stroke_width(1),
            ))
            .map_err(render_error)?;
    }

    for layer in &panel.layers {
        let points = layer.series.project(x_scale, y_scale);
        let color = layer.color;
        if layer.line {
            chart
                .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
                .map_err(render_error)?;
        }
        chart
            .draw_series(
                points
                    .iter()
                    .map(|&point| Circle::new(point, 4, color.filled())),
            )
            .map_err(render_error)?
            .label(layer.series.name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3)));
    }

    if panel.legend {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .position(SeriesLabelPosition::UpperLeft)
            .draw()
            .map_err(render_error)?;
    }
    Ok(())
}

fn draw_bar_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    categories: &[String],
    groups: &[(String, Vec<f64>, RGBColor)],
) -> Result<(), ReportError> {
    let count = categories.len().max(1);
    let x_range = -0.5..count as f64 - 0.5;
    let y_range = Scale::Linear.range(groups.iter().flat_map(|(_, values, _)| values.iter().copied()));
    let width = 0.8 / groups.len().max(1) as f64;

    let mut chart = ChartBuilder::on(area)
        .caption(title, CAPTION_FONT)
        .margin(12)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(count * 2 + 1)
        .x_desc("File Size")
        .y_desc(THROUGHPUT_DESC)
        .axis_desc_style(AXIS_FONT)
        .x_label_formatter(&|v| category_at(categories, *v))
        .draw()
        .map_err(render_error)?;

    for (group, (name, values, color)) in groups.iter().enumerate() {
        let style = color.mix(0.7).filled();
        chart
            .draw_series(values.iter().enumerate().map(|(index, &value)| {
                let left = index as f64 - 0.4 + group as f64 * width;
                Rectangle::new([(left, 0.0), (left + width, value)], style)
            }))
            .map_err(render_error)?
            .label(name.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], style));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_error)?;
    Ok(())
}

/// Color of a chunk size on a purple to yellow scale, spaced by powers of two.
fn chunk_color(chunk_size_kb: u64, min_kb: u64, max_kb: u64) -> RGBAColor {
    let log2 = |kb: u64| (kb.max(1) as f64).log2();
    let t = normalized(log2(chunk_size_kb), log2(min_kb), log2(max_kb));
    HSLColor(0.75 - 0.6 * t, 0.7, 0.45).to_rgba()
}

fn chunk_layers(groups: Vec<(u64, Series)>) -> Vec<Layer> {
    let min_kb = groups.first().map(|(kb, _)| *kb).unwrap_or_default();
    let max_kb = groups.last().map(|(kb, _)| *kb).unwrap_or_default();
    groups
        .into_iter()
        .map(|(kb, series)| Layer::points(series, chunk_color(kb, min_kb, max_kb)))
        .collect()
}

fn draw_results<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    table: &BenchmarkTable,
    title_suffix: Option<String>,
) -> Result<(), ReportError> {
    root.fill(&WHITE).map_err(render_error)?;
    let areas = root.split_evenly((2, 1));
    let title = |what: &str| match &title_suffix {
        Some(suffix) => format!("TLS Performance - {what} vs File Size ({suffix})"),
        None => format!("TLS File Transfer Performance - {what} vs File Size"),
    };
    let name = table.display_name();

    draw_panel(
        &areas[0],
        &Panel::new(title("Throughput"), FILE_SIZE_DESC, THROUGHPUT_DESC, Scale::Log, Scale::Linear)
            .layer(Layer::line(data::throughput_by_file_size(&name, table), BLUE)),
    )?;
    draw_panel(
        &areas[1],
        &Panel::new(title("Duration"), FILE_SIZE_DESC, DURATION_DESC, Scale::Log, Scale::Log)
            .layer(Layer::line(data::duration_by_file_size(&name, table), RED)),
    )
}

fn draw_chunk_study<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    table: &BenchmarkTable,
) -> Result<(), ReportError> {
    root.fill(&WHITE).map_err(render_error)?;
    let areas = root.split_evenly((2, 2));

    let mut throughput = Panel::new(
        "Throughput vs File Size (colored by chunk size)".to_owned(),
        FILE_SIZE_DESC,
        THROUGHPUT_DESC,
        Scale::Log,
        Scale::Linear,
    )
    .with_legend();
    throughput.layers = chunk_layers(data::by_chunk_size(table, |row| row.throughput_mbps));
    draw_panel(&areas[0], &throughput)?;

    draw_panel(
        &areas[1],
        &Panel::new(
            "Throughput vs Chunk Size".to_owned(),
            "Chunk Size (KB)",
            THROUGHPUT_DESC,
            Scale::Log,
            Scale::Linear,
        )
        .layer(Layer::line(data::throughput_by_chunk_size("Throughput", table), GREEN)),
    )?;

    let mut duration = Panel::new(
        "Duration vs File Size (colored by chunk size)".to_owned(),
        FILE_SIZE_DESC,
        DURATION_DESC,
        Scale::Log,
        Scale::Log,
    )
    .with_legend();
    duration.layers = chunk_layers(data::by_chunk_size(table, |row| row.duration_ms));
    draw_panel(&areas[2], &duration)?;

    draw_panel(
        &areas[3],
        &Panel::new(
            "Efficiency vs File Size".to_owned(),
            FILE_SIZE_DESC,
            "Throughput per KB chunk size",
            Scale::Log,
            Scale::Linear,
        )
        .layer(Layer::line(data::efficiency_by_file_size("Efficiency", table), PURPLE)),
    )
}

fn draw_comparison<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    baseline: &BenchmarkTable,
    candidate: &BenchmarkTable,
    comparison: &VersionComparison,
) -> Result<(), ReportError> {
    root.fill(&WHITE).map_err(render_error)?;
    let areas = root.split_evenly((2, 2));
    let (old, new) = (&comparison.baseline_label, &comparison.candidate_label);

    draw_panel(
        &areas[0],
        &Panel::new(
            format!("Throughput Comparison: {old} vs {new}"),
            FILE_SIZE_DESC,
            THROUGHPUT_DESC,
            Scale::Log,
            Scale::Linear,
        )
        .layer(Layer::line(data::throughput_by_file_size(old, baseline), RED))
        .layer(Layer::line(data::throughput_by_file_size(new, candidate), BLUE))
        .with_legend(),
    )?;

    draw_panel(
        &areas[1],
        &Panel::new(
            format!("Performance Improvement: {new} vs {old}"),
            FILE_SIZE_DESC,
            "Performance Improvement (%)",
            Scale::Log,
            Scale::Linear,
        )
        .layer(Layer::line(data::improvement_series(comparison), GREEN))
        .reference_line(0.0),
    )?;

    draw_panel(
        &areas[2],
        &Panel::new(
            format!("Duration Comparison: {old} vs {new}"),
            FILE_SIZE_DESC,
            DURATION_DESC,
            Scale::Log,
            Scale::Log,
        )
        .layer(Layer::line(data::duration_by_file_size(old, baseline), RED))
        .layer(Layer::line(data::duration_by_file_size(new, candidate), BLUE))
        .with_legend(),
    )?;

    let categories: Vec<String> = comparison.key_sizes.iter().map(|c| c.label.clone()).collect();
    let baseline_values = comparison.key_sizes.iter().map(|c| c.baseline_mbps).collect();
    let candidate_values = comparison.key_sizes.iter().map(|c| c.candidate_mbps).collect();
    draw_bar_panel(
        &areas[3],
        "Key File Size Comparisons",
        &categories,
        &[
            (old.clone(), baseline_values, RED),
            (new.clone(), candidate_values, BLUE),
        ],
    )
}

fn render_bitmap(
    path: &Path,
    size: (u32, u32),
    draw: impl FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> Result<(), ReportError>,
) -> Result<(), ReportError> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    draw(&root)?;
    root.present().map_err(render_error)
}

/// Throughput and duration against file size.
pub fn render_results_png(
    path: &Path,
    size: (u32, u32),
    table: &BenchmarkTable,
) -> Result<(), ReportError> {
    render_bitmap(path, size, |root| draw_results(root, table, None))
}

/// Chunk study charts: faceted by chunk size when several were tested,
/// otherwise the results layout titled with the single chunk size.
pub fn render_chunk_study_png(
    path: &Path,
    size: (u32, u32),
    table: &BenchmarkTable,
    profile: &ChunkProfile,
) -> Result<(), ReportError> {
    render_bitmap(path, size, |root| match profile {
        ChunkProfile::Multiple { .. } => draw_chunk_study(root, table),
        ChunkProfile::Single { .. } => draw_results(root, table, profile.title_suffix()),
    })
}

pub fn render_comparison_png(
    path: &Path,
    size: (u32, u32),
    baseline: &BenchmarkTable,
    candidate: &BenchmarkTable,
    comparison: &VersionComparison,
) -> Result<(), ReportError> {
    render_bitmap(path, size, |root| {
        draw_comparison(root, baseline, candidate, comparison)
    })
}
