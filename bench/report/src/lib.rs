pub mod comparison;
pub mod error;
pub mod plotting;
pub mod prints;
pub mod summary;
pub mod types;
mod utils;

pub use types::*;

pub use plotting::chart_kind::ChartKind;
pub use plotting::png::{render_chunk_study_png, render_comparison_png, render_results_png};
pub use plotting::{comparison_charts, table_charts};
