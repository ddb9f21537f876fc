//! The concurrent health-check engine
//!
//! This module pairs a single-probe HTTP checker with a batch scheduler
//! that sweeps a row set with bounded concurrency and incremental
//! progress reporting.

pub mod prober;
pub mod scheduler;

// Re-export commonly used items
pub use prober::{HttpProber, Probe};
pub use scheduler::{BatchScheduler, NullSink, StatusSink, SweepOptions, default_classification};
