use super::defaults::*;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Static image rendered with plotters
    Png,
    /// One interactive HTML chart per panel
    Html,
    /// Both of the above
    Both,
}

impl OutputFormat {
    pub fn png(self) -> bool {
        matches!(self, OutputFormat::Png | OutputFormat::Both)
    }

    pub fn html(self) -> bool {
        matches!(self, OutputFormat::Html | OutputFormat::Both)
    }
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Chart output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// Chart width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u32).range(MIN_IMAGE_SIDE as i64..))]
    pub width: u32,

    /// Chart height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(u32).range(MIN_IMAGE_SIDE as i64..))]
    pub height: u32,

    /// Write the computed summary as JSON to this path
    #[arg(long)]
    pub summary_json: Option<PathBuf>,

    /// Use the light theme for HTML charts
    #[arg(long, default_value_t = false)]
    pub light: bool,
}

impl OutputArgs {
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
