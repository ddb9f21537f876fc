//! upwatch - concurrent availability monitor for catalogued endpoints
//!
//! The crate probes a set of rows (endpoint catalogs or sheet exports)
//! over HTTP in bounded concurrent batches and classifies every row as
//! online or offline. The probing core is presentation-agnostic: status
//! changes flow through a [`StatusSink`] so terminal output, progress
//! bars and tests all observe the same event stream.

pub mod config;
pub mod core;
pub mod monitor;
pub mod reporting;
pub mod sources;
pub mod ui;

// Re-export the primary API surface
pub use config::{CliConfig, Config};
pub use core::error::{Result, UpwatchError};
pub use core::types::{CheckableRow, ProbeResult, RowColor};
pub use monitor::{
    BatchScheduler, HttpProber, NullSink, Probe, StatusSink, SweepOptions, default_classification,
};
