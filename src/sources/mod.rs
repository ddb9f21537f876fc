//! Row sources
//!
//! This module loads the initial row set from either an endpoint catalog
//! (TOML, key -> url + metadata) or a tabular sheet export (JSON array of
//! objects with possibly missing cells). The probing core only consumes
//! the resulting rows; it never loads sources itself.

pub mod endpoints;
pub mod sheet;

use crate::core::error::{Result, UpwatchError};
use crate::core::types::CheckableRow;

pub use endpoints::{EndpointCatalog, EndpointEntry};
pub use sheet::SheetSource;

/// Load rows from one source argument.
///
/// Sources starting with `http(s)://` are fetched as sheet exports;
/// local `.toml` files load as endpoint catalogs; everything else is
/// treated as a local sheet export.
pub async fn load_rows(source: &str) -> Result<Vec<CheckableRow>> {
    if source.starts_with("http://") || source.starts_with("https://") {
        return SheetSource::fetch(source).await;
    }
    if source.ends_with(".toml") {
        return Ok(EndpointCatalog::load_from_file(source)?.to_rows());
    }
    if source.ends_with(".json") {
        return SheetSource::load_from_file(source);
    }
    Err(UpwatchError::Source(format!(
        "Cannot tell what kind of source '{source}' is. Expected a .toml endpoint catalog, a .json sheet export, or an http(s) URL."
    )))
}
