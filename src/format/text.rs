//! Text formatting functions for `wsn`.
//!
//! Provides plain text (non-ANSI) formatting for terminal output:
//! - Single-line record summaries
//! - The aligned two-section table for `wsn data`

use unicode_width::UnicodeWidthStr;

use watsan_lib::{DataSnapshot, IssueRecord, SurveyRecord};

/// Format a single-line survey summary.
///
/// Format: `#{id} {name}: {usage} L/day (submitted {timestamp})`
#[must_use]
pub fn format_survey_line(record: &SurveyRecord) -> String {
    format!(
        "#{} {}: {} L/day (submitted {})",
        record.id, record.name, record.usage, record.timestamp,
    )
}

/// Format a single-line issue summary.
///
/// Format: `#{id} {location}: {problem} (reported {timestamp})`
#[must_use]
pub fn format_issue_line(record: &IssueRecord) -> String {
    format!(
        "#{} {}: {} (reported {})",
        record.id, record.location, record.problem, record.timestamp,
    )
}

/// Render the full dual-collection listing as two aligned tables.
#[must_use]
pub fn format_data_table(snapshot: &DataSnapshot) -> String {
    let mut out = String::new();

    out.push_str(&format!("Surveys ({})\n", snapshot.total_surveys));
    if snapshot.surveys.is_empty() {
        out.push_str("  (none)\n");
    } else {
        let rows: Vec<Vec<String>> = snapshot
            .surveys
            .iter()
            .map(|s| {
                vec![
                    format!("#{}", s.id),
                    s.name.clone(),
                    s.usage.to_string(),
                    s.timestamp.clone(),
                ]
            })
            .collect();
        out.push_str(&render_table(
            &["ID", "NAME", "L/DAY", "SUBMITTED"],
            &rows,
        ));
    }

    out.push('\n');
    out.push_str(&format!("Issues ({})\n", snapshot.total_issues));
    if snapshot.issues.is_empty() {
        out.push_str("  (none)\n");
    } else {
        let rows: Vec<Vec<String>> = snapshot
            .issues
            .iter()
            .map(|i| {
                vec![
                    format!("#{}", i.id),
                    i.location.clone(),
                    i.problem.clone(),
                    i.timestamp.clone(),
                ]
            })
            .collect();
        out.push_str(&render_table(
            &["ID", "LOCATION", "PROBLEM", "REPORTED"],
            &rows,
        ));
    }

    out.push('\n');
    out.push_str(&format!("Snapshot taken {}\n", snapshot.timestamp));
    out
}

/// Render a header plus rows with columns padded to display width.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let mut out = String::new();
    out.push_str("  ");
    for (i, header) in headers.iter().enumerate() {
        out.push_str(&pad(header, widths[i]));
        if i + 1 < headers.len() {
            out.push_str("  ");
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');

    for row in rows {
        out.push_str("  ");
        for (i, cell) in row.iter().enumerate() {
            out.push_str(&pad(cell, widths[i]));
            if i + 1 < row.len() {
                out.push_str("  ");
            }
        }
        // No trailing spaces on short final cells
        while out.ends_with(' ') {
            out.pop();
        }
        out.push('\n');
    }
    out
}

fn pad(cell: &str, width: usize) -> String {
    let cell_width = UnicodeWidthStr::width(cell);
    format!("{}{}", cell, " ".repeat(width.saturating_sub(cell_width)))
}
