use serde::Serialize;

/// A summary of a line sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// The project the report was built for.
    pub project_name: String,

    /// The number of lines before filtering.
    pub line_count: usize,

    /// The lines that meet the minimum length, in their original order.
    pub filtered_lines: Vec<String>,
}

impl Report {
    /// Builds a report over `lines`.
    ///
    /// A line is kept when its length in characters is at least
    /// `min_line_length`. The line count always covers the full input.
    #[must_use]
    pub fn build(project_name: String, lines: &[String], min_line_length: usize) -> Self {
        let filtered_lines = lines
            .iter()
            .filter(|line| line.chars().count() >= min_line_length)
            .cloned()
            .collect();

        Self {
            project_name,
            line_count: lines.len(),
            filtered_lines,
        }
    }
}

/// Builds a [`Report`] for `project_name` over `lines`.
///
/// See [`Report::build`].
#[must_use]
pub fn build_report(project_name: String, lines: &[String], min_line_length: usize) -> Report {
    Report::build(project_name, lines, min_line_length)
}
