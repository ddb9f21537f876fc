use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::constants::{colors, http_status, status_labels};

/// Outcome of a single HTTP probe against one URL.
///
/// A probe never fails with an error: timeouts and transport failures are
/// encoded in the value itself, so callers deal with exactly one shape
/// regardless of what happened on the wire. One instance per attempt,
/// immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeResult {
    /// The URL that was probed
    pub url: String,
    /// HTTP status code of the final response, 0 when no response arrived
    pub status_code: u16,
    /// Wall-clock latency from dispatch to response headers, in seconds,
    /// rounded to millisecond precision. 0.0 for failed probes.
    pub latency_seconds: f64,
    /// Short description of a timeout or transport failure
    pub error: Option<String>,
}

impl ProbeResult {
    /// Create a result for a received HTTP response.
    ///
    /// 4xx/5xx responses land here too: receiving an error status is not a
    /// failure of the probe mechanism itself.
    pub fn response(url: &str, status_code: u16, latency_seconds: f64) -> Self {
        Self {
            url: url.to_string(),
            status_code,
            latency_seconds: round_to_millis(latency_seconds),
            error: None,
        }
    }

    /// Create a result for a probe that produced no HTTP response.
    pub fn failure(url: &str, error: &str) -> Self {
        Self {
            url: url.to_string(),
            status_code: http_status::UNREACHABLE,
            latency_seconds: 0.0,
            error: Some(error.to_string()),
        }
    }

    /// 2xx success and 3xx redirects count as online, everything else
    /// (including 4xx/5xx and the unreachable sentinel 0) does not.
    pub fn is_online(&self) -> bool {
        (http_status::ONLINE_MIN..http_status::ONLINE_MAX).contains(&self.status_code)
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error {
            Some(error) => write!(f, "{} - {}", &self.url, error),
            None => write!(f, "{} - {}", self.status_code, &self.url),
        }
    }
}

/// Round a latency in seconds to millisecond precision
pub fn round_to_millis(seconds: f64) -> f64 {
    (seconds * 1000.0).round() / 1000.0
}

/// Display state of a row, mapped to a background color by UIs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowColor {
    /// Not yet checked in this sweep
    Pending,
    /// Probe in flight
    Checking,
    /// Probe received an online status code
    Success,
    /// Probe timed out, failed or received an offline status code
    Error,
}

impl RowColor {
    /// Hex color used by grid-style presentation layers
    pub fn as_hex(&self) -> &'static str {
        match self {
            RowColor::Pending => colors::PENDING,
            RowColor::Checking => colors::CHECKING,
            RowColor::Success => colors::SUCCESS,
            RowColor::Error => colors::ERROR,
        }
    }
}

/// One monitored entity with its display state.
///
/// Rows are created by a row source when configuration loads, mutated in
/// place by the scheduler during a sweep, and replaced wholesale on reload.
/// `key` uniquely identifies a row for the lifetime of one row set; the
/// scheduler only reads `url` and writes the status surface back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckableRow {
    /// Unique row key, assigned by the row source
    pub key: String,
    /// URL to probe; rows with an empty URL are skipped by the scheduler
    pub url: String,
    /// Human-readable status, e.g. "OK (200)", "Error 404", "Timeout"
    pub status_label: String,
    /// Display state backing the status label
    pub color: RowColor,
    /// Latency of the latest successful probe in seconds, 0.0 otherwise
    pub latency: f64,
    /// Open extension map for source-specific columns
    /// (version, sparql, triples, updated, comment, ...)
    pub extra: FxHashMap<String, String>,
}

impl CheckableRow {
    pub fn new(key: &str, url: &str) -> Self {
        Self {
            key: key.to_string(),
            url: url.to_string(),
            status_label: status_labels::PENDING.to_string(),
            color: RowColor::Pending,
            latency: 0.0,
            extra: FxHashMap::default(),
        }
    }

    /// Attach a source-specific column value
    pub fn with_extra(mut self, field: &str, value: &str) -> Self {
        self.extra.insert(field.to_string(), value.to_string());
        self
    }

    /// Mark the row as having a probe in flight
    pub fn mark_checking(&mut self) {
        self.status_label = status_labels::CHECKING.to_string();
        self.color = RowColor::Checking;
    }

    /// Mark the row as failed with an arbitrary error text.
    /// Latency is reset so a stale value from a previous sweep never shows.
    pub fn mark_failed(&mut self, message: &str) {
        self.status_label = message.to_string();
        self.color = RowColor::Error;
        self.latency = 0.0;
    }

    /// Whether the latest sweep found this row online
    pub fn is_online(&self) -> bool {
        self.color == RowColor::Success
    }

    /// Whether this row participates in sweeps at all
    pub fn is_checkable(&self) -> bool {
        !self.url.is_empty()
    }
}
