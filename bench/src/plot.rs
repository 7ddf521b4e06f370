use crate::args::output::OutputArgs;
use anyhow::{Context, Result};
use charming::theme::Theme;
use charming::{Chart, HtmlRenderer};
use human_repr::HumanCount;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tls_bench_report::error::ReportError;
use tls_bench_report::ChartKind;
use tracing::{debug, info};

const FALLBACK_STEM: &str = "tls_bench";

/// Render the static chart image through `render`, creating missing directories first.
pub fn save_png(
    path: &Path,
    render: impl FnOnce(&Path) -> Result<(), ReportError>,
) -> Result<()> {
    create_parent_dir(path)?;
    let render_start = Instant::now();
    render(path).with_context(|| format!("Failed to render {}", path.display()))?;
    let render_time = render_start.elapsed();

    info!(
        "Generated chart image at: {} ({}, render: {:.2?})",
        path.display(),
        file_size(path),
        render_time
    );
    Ok(())
}

/// Save every chart as `<stem>_<chart>.html` next to `output`.
pub fn save_html_charts(
    charts: Vec<(ChartKind, Chart)>,
    output: &Path,
    args: &OutputArgs,
) -> Result<Vec<PathBuf>> {
    create_parent_dir(output)?;
    let mut saved = Vec::with_capacity(charts.len());
    for (kind, chart) in charts {
        let chart_path = html_chart_path(output, kind);
        let render_start = Instant::now();
        let mut renderer =
            HtmlRenderer::new(kind.file_suffix(), args.width as u64, args.height as u64)
                .theme(if args.light { Theme::Default } else { Theme::Dark });
        renderer.save(&chart, &chart_path).map_err(|e| {
            anyhow::anyhow!("Failed to save HTML plot {}: {}", chart_path.display(), e)
        })?;

        info!(
            "Generated {} plot at: {} (render: {:.2?})",
            kind,
            chart_path.display(),
            render_start.elapsed()
        );
        saved.push(chart_path);
    }
    Ok(saved)
}

pub fn html_chart_path(output: &Path, kind: ChartKind) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_STEM.to_owned());
    output.with_file_name(format!("{stem}_{}.html", kind.file_suffix()))
}

pub fn save_summary_json(path: &Path, summary: &impl Serialize) -> Result<()> {
    create_parent_dir(path)?;
    let json = serde_json::to_string_pretty(summary).map_err(ReportError::from)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write summary to {}", path.display()))?;
    info!("Saved summary at: {} ({})", path.display(), file_size(path));
    Ok(())
}

fn create_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            debug!("Creating output directory {}", parent.display());
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))
        }
        _ => Ok(()),
    }
}

fn file_size(path: &Path) -> String {
    std::fs::metadata(path)
        .map(|metadata| metadata.len().human_count_bytes().to_string())
        .unwrap_or_else(|_| "unknown size".to_owned())
}
