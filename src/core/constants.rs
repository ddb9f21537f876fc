/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the literal values shared across the probing
/// engine, the configuration layer and the terminal output.
/// Output format constants
pub mod output_formats {
    /// Text output format - aligned table with status markers
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// Minimal output format - one line per row, no decoration
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// HTTP status code constants
pub mod http_status {
    /// Lowest status code counted as online (inclusive)
    pub const ONLINE_MIN: u16 = 200;
    /// Lowest status code counted as offline again (exclusive upper bound).
    /// 3xx redirects are common for shortlinks and count as online.
    pub const ONLINE_MAX: u16 = 400;
    /// HTTP 200 OK - successful response
    pub const OK: u16 = 200;
    /// HTTP 301 Moved Permanently - permanent redirect
    pub const MOVED_PERMANENTLY: u16 = 301;
    /// HTTP 404 Not Found - resource not found
    pub const NOT_FOUND: u16 = 404;
    /// HTTP 500 Internal Server Error - server error
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
    /// Sentinel for "no HTTP response received at all"
    pub const UNREACHABLE: u16 = 0;
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default per-probe timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: f64 = 5.0;
    /// Smallest timeout worth offering in a UI
    pub const MIN_TIMEOUT_SECONDS: f64 = 0.5;
    /// Largest timeout worth offering in a UI
    pub const MAX_TIMEOUT_SECONDS: f64 = 60.0;
    /// Hard upper bound before a timeout is rejected as a config error
    pub const REJECT_TIMEOUT_SECONDS: f64 = 3600.0;
}

/// Batch / sweep constants
pub mod batches {
    /// Default number of probes in flight per chunk
    pub const DEFAULT_BATCH_SIZE: usize = 5;
    /// Hard upper bound before a batch size is rejected as a config error
    pub const MAX_BATCH_SIZE: usize = 100;
}

/// Status labels written into rows by the scheduler
pub mod status_labels {
    /// Initial state of a freshly loaded row
    pub const PENDING: &str = "Pending";
    /// Intermediate state while a probe for the row is in flight
    pub const CHECKING: &str = "Checking...";
}

/// Row background colors, kept as hex strings for presentation layers
pub mod colors {
    /// White - row not yet checked
    pub const PENDING: &str = "#ffffff";
    /// Light gray - probe in flight
    pub const CHECKING: &str = "#f0f0f0";
    /// Light green - endpoint online
    pub const SUCCESS: &str = "#d1fae5";
    /// Light red - endpoint offline or unreachable
    pub const ERROR: &str = "#fee2e2";
}

/// Error message constants
pub mod error_messages {
    /// Error recorded when a probe exceeds its timeout
    pub const TIMEOUT: &str = "Timeout";
    /// Unknown error fallback
    pub const UNKNOWN_ERROR: &str = "Unknown error";
}

/// Display and formatting constants
pub mod display {
    /// Marker for online rows
    pub const ONLINE_MARKER: &str = "✓";
    /// Marker for offline rows
    pub const OFFLINE_MARKER: &str = "✗";
    /// Marker for rows that were never probed
    pub const SKIPPED_MARKER: &str = "-";
    /// Placeholder for missing metadata cells
    pub const EMPTY_CELL: &str = "-";
}
