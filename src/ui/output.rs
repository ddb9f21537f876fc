use serde::Serialize;

use crate::core::constants::{display, output_formats};
use crate::core::types::CheckableRow;

/// Aggregate counts over a finished sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SweepSummary {
    pub total: usize,
    pub online: usize,
    pub offline: usize,
    pub skipped: usize,
}

impl SweepSummary {
    pub fn of(rows: &[CheckableRow]) -> Self {
        let total = rows.len();
        let skipped = rows.iter().filter(|row| !row.is_checkable()).count();
        let online = rows.iter().filter(|row| row.is_online()).count();
        Self {
            total,
            online,
            offline: total - skipped - online,
            skipped,
        }
    }

    pub fn all_online(&self) -> bool {
        self.offline == 0
    }
}

/// Render finished rows in the requested output format
pub fn render(rows: &[CheckableRow], format: &str) -> String {
    match format {
        output_formats::JSON => render_json(rows),
        output_formats::MINIMAL => render_minimal(rows),
        _ => render_table(rows),
    }
}

/// Union of extension field names across all rows, sorted for stable columns
fn extra_columns(rows: &[CheckableRow]) -> Vec<String> {
    let mut columns: Vec<String> = rows
        .iter()
        .flat_map(|row| row.extra.keys().cloned())
        .collect();
    columns.sort();
    columns.dedup();
    columns
}

fn status_marker(row: &CheckableRow) -> &'static str {
    if !row.is_checkable() {
        display::SKIPPED_MARKER
    } else if row.is_online() {
        display::ONLINE_MARKER
    } else {
        display::OFFLINE_MARKER
    }
}

fn latency_cell(row: &CheckableRow) -> String {
    if row.is_online() {
        format!("{:.3}", row.latency)
    } else {
        display::EMPTY_CELL.to_string()
    }
}

/// Aligned table: fixed columns plus one column per metadata field
fn render_table(rows: &[CheckableRow]) -> String {
    let extras = extra_columns(rows);

    let mut header: Vec<String> = vec![
        "KEY".to_string(),
        "STATUS".to_string(),
        "LATENCY (S)".to_string(),
        "URL".to_string(),
    ];
    header.extend(extras.iter().map(|name| name.to_uppercase()));

    let mut table: Vec<Vec<String>> = vec![header];
    for row in rows {
        let mut cells = vec![
            row.key.clone(),
            format!("{} {}", status_marker(row), row.status_label),
            latency_cell(row),
            row.url.clone(),
        ];
        for column in &extras {
            let value = row.extra.get(column).map(String::as_str).unwrap_or("");
            cells.push(if value.is_empty() {
                display::EMPTY_CELL.to_string()
            } else {
                value.to_string()
            });
        }
        table.push(cells);
    }

    let column_count = table[0].len();
    let mut widths = vec![0usize; column_count];
    for cells in &table {
        for (i, cell) in cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for (line, cells) in table.iter().enumerate() {
        let rendered: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        out.push_str(rendered.join("  ").trim_end());
        out.push('\n');
        if line == 0 {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            out.push_str(&rule.join("  "));
            out.push('\n');
        }
    }

    let summary = SweepSummary::of(rows);
    out.push_str(&format!(
        "\n{} {}/{} rows online ({} offline, {} skipped)\n",
        if summary.all_online() {
            display::ONLINE_MARKER
        } else {
            display::OFFLINE_MARKER
        },
        summary.online,
        summary.total,
        summary.offline,
        summary.skipped,
    ));
    out
}

/// Structured output for automation: rows plus summary and timestamp
fn render_json(rows: &[CheckableRow]) -> String {
    #[derive(Serialize)]
    struct Report<'a> {
        summary: SweepSummary,
        timestamp: String,
        rows: &'a [CheckableRow],
    }

    let report = Report {
        summary: SweepSummary::of(rows),
        timestamp: chrono::Utc::now()
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
        rows,
    };

    serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
}

/// One line per row, nothing else
fn render_minimal(rows: &[CheckableRow]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&format!("{} {}\n", row.status_label, row.url));
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::core::types::RowColor;

    fn sample_rows() -> Vec<CheckableRow> {
        let mut online = CheckableRow::new("wikidata", "https://query.wikidata.org")
            .with_extra("version", "0.3");
        online.status_label = "OK (200)".to_string();
        online.color = RowColor::Success;
        online.latency = 0.123;

        let mut offline = CheckableRow::new("qlever", "https://qlever.example");
        offline.mark_failed("Error 404");

        let skipped = CheckableRow::new("placeholder", "");

        vec![online, offline, skipped]
    }

    #[test]
    fn test_sweep_summary_counts() {
        let summary = SweepSummary::of(&sample_rows());

        assert_eq!(summary.total, 3);
        assert_eq!(summary.online, 1);
        assert_eq!(summary.offline, 1);
        assert_eq!(summary.skipped, 1);
        assert!(!summary.all_online());
    }

    #[test]
    fn test_sweep_summary_all_online_when_no_offline_rows() {
        let mut rows = sample_rows();
        rows.remove(1);
        assert!(SweepSummary::of(&rows).all_online());
    }

    #[test]
    fn test_render_table_contains_rows_and_summary() {
        let out = render(&sample_rows(), "text");

        assert!(out.contains("KEY"));
        assert!(out.contains("VERSION"));
        assert!(out.contains("✓ OK (200)"));
        assert!(out.contains("0.123"));
        assert!(out.contains("✗ Error 404"));
        assert!(out.contains("1/3 rows online (1 offline, 1 skipped)"));
    }

    #[test]
    fn test_render_json_round_trips() {
        let out = render(&sample_rows(), "json");
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["summary"]["total"], 3);
        assert_eq!(value["summary"]["online"], 1);
        assert_eq!(value["rows"][0]["status_label"], "OK (200)");
        assert_eq!(value["rows"][0]["color"], "success");
        assert!(value["timestamp"].as_str().unwrap().ends_with("UTC"));
    }

    #[test]
    fn test_render_minimal_one_line_per_row() {
        let out = render(&sample_rows(), "minimal");
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "OK (200) https://query.wikidata.org");
        assert_eq!(lines[1], "Error 404 https://qlever.example");
    }

    #[test]
    fn test_render_table_empty_row_set() {
        let out = render(&[], "text");
        assert!(out.contains("0/0 rows online"));
    }
}
