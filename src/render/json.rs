//! JSON rendering of a scan report

use crate::domain::ScanReport;

/// Encode `report` as a single JSON object followed by a newline.
///
/// The whole document is built in memory so a failure never leaves partial
/// output behind.
pub fn render_report(report: &ScanReport, pretty: bool) -> serde_json::Result<String> {
    let mut out =
        if pretty { serde_json::to_string_pretty(report)? } else { serde_json::to_string(report)? };
    out.push('\n');
    Ok(out)
}
