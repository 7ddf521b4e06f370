use crate::plotting::chart_kind::ChartKind;
use crate::types::report_kind::ReportKind;

/// Returns a title for a TLS benchmark chart
pub fn title(report: ReportKind, chart: ChartKind, remark: Option<&str>) -> String {
    if let Some(remark) = remark {
        format!("TLS {} - {} ({})", report, chart, remark)
    } else {
        format!("TLS {} - {}", report, chart)
    }
}
