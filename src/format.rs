use crate::Report;

/// Renders a report as plain text.
///
/// The output is a header for the project and line count followed by one
/// `- ` entry per filtered line. Lines are joined with `\n` and there is no
/// trailing newline.
#[must_use]
pub fn format_report(report: &Report) -> String {
    let mut lines = vec![
        format!("Project: {}", report.project_name),
        format!("Lines: {}", report.line_count),
        "Filtered:".to_string(),
    ];
    lines.extend(report.filtered_lines.iter().map(|line| format!("- {line}")));

    lines.join("\n")
}

/// Renders a report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if the report cannot be serialized.
pub fn format_report_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
