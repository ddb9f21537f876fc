use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::core::error::{Result, UpwatchError};
use crate::core::types::CheckableRow;

/// One monitored endpoint as declared in the catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointEntry {
    /// Base URL to probe
    pub url: String,
    /// SPARQL endpoint URL, if the service exposes one
    pub sparql: Option<String>,
    /// Reported software version
    pub version: Option<String>,
    /// Triple count of the backing store
    pub triples: Option<u64>,
    /// Last-update timestamp as published by the service
    pub updated: Option<String>,
    /// Free-form note
    pub comment: Option<String>,
}

/// Catalog of endpoints keyed by a short unique name.
///
/// ```toml
/// [endpoints.wikidata]
/// url = "https://query.wikidata.org"
/// sparql = "https://query.wikidata.org/sparql"
/// version = "wdqs 0.3"
/// ```
///
/// The BTreeMap keeps row order stable across reloads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointCatalog {
    #[serde(default)]
    pub endpoints: BTreeMap<String, EndpointEntry>,
}

impl EndpointCatalog {
    /// Parse a catalog from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let catalog: EndpointCatalog = toml::from_str(content)?;
        Ok(catalog)
    }

    /// Load a catalog from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UpwatchError::Source(format!(
                "Could not read endpoint catalog '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content).map_err(|e| {
            UpwatchError::Source(format!(
                "Invalid endpoint catalog '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Materialize the catalog as checkable rows in key order.
    /// Metadata columns land in the extension map; absent values are
    /// simply not inserted.
    pub fn to_rows(&self) -> Vec<CheckableRow> {
        self.endpoints
            .iter()
            .map(|(key, entry)| {
                let mut row = CheckableRow::new(key, &entry.url);
                if let Some(ref sparql) = entry.sparql {
                    row.extra.insert("sparql".to_string(), sparql.clone());
                }
                if let Some(ref version) = entry.version {
                    row.extra.insert("version".to_string(), version.clone());
                }
                if let Some(triples) = entry.triples {
                    row.extra.insert("triples".to_string(), triples.to_string());
                }
                if let Some(ref updated) = entry.updated {
                    row.extra.insert("updated".to_string(), updated.clone());
                }
                if let Some(ref comment) = entry.comment {
                    row.extra.insert("comment".to_string(), comment.clone());
                }
                row
            })
            .collect()
    }
}
