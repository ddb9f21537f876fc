use crate::config::Config;
use crate::core::types::CheckableRow;
use log::{debug, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let timeout = config.timeout.unwrap_or(5.0);
    let batch_size = config.batch_size_or_default();
    let use_head_requests = config.use_head_requests.unwrap_or(false);
    let skip_ssl_verification = config.skip_ssl_verification.unwrap_or(false);

    info!("Configuration: batch_size={batch_size}, timeout={timeout}s");
    info!("HTTP: head_requests={use_head_requests}, skip_ssl={skip_ssl_verification}");
}

/// Log source loading information
pub fn log_source_info(source: &str, row_count: usize) {
    info!("Loaded {row_count} row(s) from {source}");
}

/// Log sweep start
pub fn log_sweep_start(row_count: usize, batch_size: usize) {
    info!("Starting sweep of {row_count} rows in chunks of {batch_size}");
}

/// Log one finished row at debug level
pub fn log_row_status(row: &CheckableRow) {
    debug!(
        "  {} -> {} (latency {:.3}s)",
        row.url, row.status_label, row.latency
    );
}

/// Log sweep completion
pub fn log_sweep_complete(online: usize, total: usize, duration_ms: u128) {
    if online == total {
        info!("✅ Sweep complete: {online}/{total} rows online ({duration_ms}ms)");
    } else {
        warn!(
            "❌ Sweep complete: {}/{} rows online, {} offline ({}ms)",
            online,
            total,
            total - online,
            duration_ms
        );
    }
}
