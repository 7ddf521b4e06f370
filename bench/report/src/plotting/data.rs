use crate::comparison::VersionComparison;
use crate::types::row::BenchmarkRow;
use crate::types::table::BenchmarkTable;
use std::collections::BTreeMap;
use std::ops::Range;

/// Axis scale. Log axes are plotted in log10 space and labelled with the raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Linear,
    Log,
}

impl Scale {
    /// Position of `value` on the axis, `None` when a log axis cannot show it.
    pub fn project(self, value: f64) -> Option<f64> {
        match self {
            Scale::Linear => value.is_finite().then_some(value),
            Scale::Log => (value.is_finite() && value > 0.0).then(|| value.log10()),
        }
    }

    pub fn label(self, position: f64) -> String {
        let value = match self {
            Scale::Linear => position,
            Scale::Log => 10f64.powf(position),
        };
        format_axis_value(value)
    }

    /// Padded axis range covering every projected value.
    pub fn range(self, values: impl IntoIterator<Item = f64>) -> Range<f64> {
        let projected: Vec<f64> = values.into_iter().filter_map(|v| self.project(v)).collect();
        let (Some(lo), Some(hi)) = (
            projected.iter().copied().reduce(f64::min),
            projected.iter().copied().reduce(f64::max),
        ) else {
            return match self {
                Scale::Linear => 0.0..1.0,
                Scale::Log => -1.0..1.0,
            };
        };

        match self {
            Scale::Linear => {
                let lo = lo.min(0.0);
                let hi = hi.max(0.0);
                let pad = if hi > lo { (hi - lo) * 0.1 } else { 1.0 };
                let lo = if lo < 0.0 { lo - pad } else { lo };
                lo..hi + pad
            }
            Scale::Log => {
                let pad = if hi > lo { (hi - lo) * 0.05 } else { 0.5 };
                lo - pad..hi + pad
            }
        }
    }
}

fn format_axis_value(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude == 0.0 {
        "0".to_owned()
    } else if magnitude >= 100.0 {
        format!("{value:.0}")
    } else if magnitude >= 1.0 {
        let text = format!("{value:.1}");
        text.strip_suffix(".0").map(str::to_owned).unwrap_or(text)
    } else {
        format!("{value:.3}")
    }
}

/// Named points of one series, in raw (unprojected) units.
#[derive(Debug, Clone, PartialEq, derive_new::new)]
pub struct Series {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(x, _)| *x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(_, y)| *y)
    }

    /// Points in axis space, dropping values the scales cannot show.
    pub fn project(&self, x: Scale, y: Scale) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .filter_map(|&(px, py)| Some((x.project(px)?, y.project(py)?)))
            .collect()
    }

    pub fn as_charming_points(&self) -> Vec<Vec<f64>> {
        self.points.iter().map(|&(x, y)| vec![x, y]).collect()
    }
}

fn sorted_by_x(mut points: Vec<(f64, f64)>) -> Vec<(f64, f64)> {
    points.sort_by(|a, b| a.0.total_cmp(&b.0));
    points
}

fn series_by_file_size(
    name: &str,
    table: &BenchmarkTable,
    value: impl Fn(&BenchmarkRow) -> Option<f64>,
) -> Series {
    let points = table
        .rows()
        .iter()
        .filter_map(|row| Some((row.file_size_mb(), value(row)?)))
        .collect();
    Series::new(name.to_owned(), sorted_by_x(points))
}

pub fn throughput_by_file_size(name: &str, table: &BenchmarkTable) -> Series {
    series_by_file_size(name, table, |row| Some(row.throughput_mbps))
}

pub fn duration_by_file_size(name: &str, table: &BenchmarkTable) -> Series {
    series_by_file_size(name, table, |row| Some(row.duration_ms))
}

pub fn efficiency_by_file_size(name: &str, table: &BenchmarkTable) -> Series {
    series_by_file_size(name, table, BenchmarkRow::efficiency)
}

pub fn throughput_by_chunk_size(name: &str, table: &BenchmarkTable) -> Series {
    let points = table
        .rows()
        .iter()
        .filter_map(|row| Some((row.chunk_size_kb()?, row.throughput_mbps)))
        .collect();
    Series::new(name.to_owned(), sorted_by_x(points))
}

/// Per chunk size series of `value` against file size, keyed by chunk size in KB.
pub fn by_chunk_size(
    table: &BenchmarkTable,
    value: impl Fn(&BenchmarkRow) -> f64,
) -> Vec<(u64, Series)> {
    let mut groups: BTreeMap<u64, Vec<(f64, f64)>> = BTreeMap::new();
    for row in table.rows() {
        if let Some(bytes) = row.chunk_size_bytes {
            groups
                .entry(bytes)
                .or_default()
                .push((row.file_size_mb(), value(row)));
        }
    }
    groups
        .into_iter()
        .map(|(bytes, points)| {
            let kb = bytes / 1024;
            (kb, Series::new(format!("{kb}KB chunks"), sorted_by_x(points)))
        })
        .collect()
}

pub fn improvement_series(comparison: &VersionComparison) -> Series {
    Series::new(
        "Improvement".to_owned(),
        comparison
            .improvement_series
            .iter()
            .map(|point| (point.file_size_mb, point.improvement_pct))
            .collect(),
    )
}

/// Position of `value` in `[min, max]`, 0.0 for a degenerate range.
pub fn normalized(value: f64, min: f64, max: f64) -> f64 {
    if max > min {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Category name at an axis position, empty between categories.
pub fn category_at(categories: &[String], position: f64) -> String {
    let index = position.round();
    if (position - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    categories
        .get(index as usize)
        .cloned()
        .unwrap_or_default()
}
