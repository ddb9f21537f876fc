use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::core::error::{Result, UpwatchError};
use crate::core::types::CheckableRow;

/// Sheet cell names that may carry the checkable URL, in lookup order
const LINK_FIELDS: [&str; 2] = ["link", "url"];

/// Loader for tabular sheet exports.
///
/// The expected shape is a JSON array of objects, one object per sheet row,
/// with cells that may be missing or null. Cells normalize to strings
/// before use; rows without an absolute http(s) link are dropped, matching
/// how the dashboards treat section headers and half-filled sheet rows.
#[derive(Debug, Default)]
pub struct SheetSource;

impl SheetSource {
    /// Parse rows from JSON text
    pub fn from_json(content: &str) -> Result<Vec<CheckableRow>> {
        let value: Value = serde_json::from_str(content)?;
        let records = value
            .as_array()
            .ok_or_else(|| UpwatchError::Source("Sheet export must be a JSON array".to_string()))?;

        let mut rows = Vec::with_capacity(records.len());
        for record in records {
            let Some(object) = record.as_object() else {
                continue;
            };

            let link = LINK_FIELDS
                .iter()
                .find_map(|field| object.get(*field))
                .map(normalize_cell)
                .unwrap_or_default();
            if !link.starts_with("http") {
                continue;
            }

            // The link doubles as row key: sheets carry no other stable id
            let mut row = CheckableRow::new(&link, &link);
            for (field, cell) in object {
                if LINK_FIELDS.contains(&field.as_str()) {
                    continue;
                }
                row.extra.insert(field.clone(), normalize_cell(cell));
            }
            rows.push(row);
        }

        Ok(rows)
    }

    /// Load rows from a local JSON export
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<CheckableRow>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UpwatchError::Source(format!(
                "Could not read sheet export '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
            .map_err(|e| UpwatchError::Source(format!("Invalid sheet export '{}': {}", path.display(), e)))
    }

    /// Fetch rows from a published sheet export URL
    pub async fn fetch(url: &str) -> Result<Vec<CheckableRow>> {
        let response = reqwest::get(url).await?;
        let content = response.error_for_status()?.text().await?;
        Self::from_json(&content)
            .map_err(|e| UpwatchError::Source(format!("Invalid sheet export '{url}': {e}")))
    }
}

/// Normalize one sheet cell to a plain string.
/// Missing and null cells become the empty string.
fn normalize_cell(cell: &Value) -> String {
    match cell {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
