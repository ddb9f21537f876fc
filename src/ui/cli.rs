// Command-line interface definitions and parsing for upwatch

use crate::config::CliConfig;
use crate::core::constants::{output_formats, timeouts};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Row sources: endpoint catalogs (.toml), sheet exports (.json) or http(s) URLs
    pub sources: Vec<String>,

    // Core Options
    /// Per-probe timeout in seconds (default: 5.0)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        help_heading = "Core Options"
    )]
    pub timeout: Option<f64>,

    /// Probes in flight per chunk (default: 5)
    #[arg(long, value_name = "COUNT", help_heading = "Core Options")]
    pub batch_size: Option<usize>,

    /// Probe with HEAD requests instead of GET
    #[arg(long, help_heading = "Core Options")]
    pub head: bool,

    // Output & Verbosity
    /// Suppress progress output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, default_value = output_formats::DEFAULT, help_heading = "Output & Verbosity")]
    pub format: String,

    /// Disable progress bars
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Network & Security
    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network & Security")]
    pub user_agent: Option<String>,

    /// HTTP/HTTPS proxy URL
    #[arg(long, value_name = "URL", help_heading = "Network & Security")]
    pub proxy: Option<String>,

    /// Skip SSL certificate verification
    #[arg(long, help_heading = "Network & Security")]
    pub insecure: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert derive-based CLI arguments directly to CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    let mut cli_config = CliConfig::default();

    // Core options
    if let Some(timeout) = cli.timeout {
        if timeout <= 0.0 {
            eprintln!(
                "Error: Timeout must be positive. Expected a number of seconds, e.g. 5.0."
            );
            std::process::exit(1);
        }
        if timeout > timeouts::MAX_TIMEOUT_SECONDS {
            eprintln!(
                "Warning: Timeout of {timeout} seconds is quite large. Consider using a smaller value for faster sweeps."
            );
        }
        cli_config.timeout = Some(timeout);
    }

    if let Some(batch_size) = cli.batch_size {
        if batch_size == 0 {
            eprintln!(
                "Error: Batch size cannot be 0. Expected a positive integer representing probes per chunk."
            );
            std::process::exit(1);
        }
        cli_config.batch_size = Some(batch_size);
    }

    cli_config.use_head_requests = cli.head;

    // Output & format
    cli_config.quiet = cli.quiet;
    cli_config.verbose = cli.verbose;
    cli_config.no_progress = cli.no_progress;
    cli_config.output_format = Some(cli.format.clone());

    // Network & security
    cli_config.user_agent = cli.user_agent.clone();
    cli_config.proxy = cli.proxy.clone();
    cli_config.skip_ssl_verification = cli.insecure;

    // Configuration
    cli_config.config_file = cli.config.clone();
    cli_config.no_config = cli.no_config;

    cli_config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::output_formats;

    fn create_default_cli() -> Cli {
        Cli {
            command: None,
            sources: vec![],
            timeout: None,
            batch_size: None,
            head: false,
            quiet: false,
            verbose: false,
            format: output_formats::DEFAULT.to_string(),
            no_progress: false,
            user_agent: None,
            proxy: None,
            insecure: false,
            config: None,
            no_config: false,
        }
    }

    #[test]
    fn test_cli_to_config_default() {
        let cli = create_default_cli();

        let config = cli_to_config(&cli);

        assert_eq!(config.timeout, None);
        assert_eq!(config.batch_size, None);
        assert!(!config.use_head_requests);
        assert!(!config.quiet);
        assert!(!config.verbose);
        assert!(!config.no_progress);
        assert_eq!(
            config.output_format,
            Some(output_formats::DEFAULT.to_string())
        );
        assert_eq!(config.user_agent, None);
        assert_eq!(config.proxy, None);
        assert!(!config.skip_ssl_verification);
        assert_eq!(config.config_file, None);
        assert!(!config.no_config);
    }

    #[test]
    fn test_cli_to_config_all_options() {
        let mut cli = create_default_cli();
        cli.sources = vec!["endpoints.toml".to_string()];
        cli.timeout = Some(2.5);
        cli.batch_size = Some(10);
        cli.head = true;
        cli.quiet = true;
        cli.verbose = true;
        cli.format = output_formats::JSON.to_string();
        cli.no_progress = true;
        cli.user_agent = Some("CustomAgent/1.0".to_string());
        cli.proxy = Some("http://proxy:8080".to_string());
        cli.insecure = true;
        cli.config = Some("config.toml".to_string());
        cli.no_config = true;

        let config = cli_to_config(&cli);

        assert_eq!(config.timeout, Some(2.5));
        assert_eq!(config.batch_size, Some(10));
        assert!(config.use_head_requests);
        assert!(config.quiet);
        assert!(config.verbose);
        assert!(config.no_progress);
        assert_eq!(config.output_format, Some(output_formats::JSON.to_string()));
        assert_eq!(config.user_agent, Some("CustomAgent/1.0".to_string()));
        assert_eq!(config.proxy, Some("http://proxy:8080".to_string()));
        assert!(config.skip_ssl_verification);
        assert_eq!(config.config_file, Some("config.toml".to_string()));
        assert!(config.no_config);
    }

    #[test]
    fn test_cli_to_config_boundary_values() {
        let mut cli = create_default_cli();
        cli.timeout = Some(0.5);
        cli.batch_size = Some(1);

        let config = cli_to_config(&cli);

        assert_eq!(config.timeout, Some(0.5));
        assert_eq!(config.batch_size, Some(1));
    }

    #[test]
    fn test_cli_to_config_large_timeout_only_warns() {
        let mut cli = create_default_cli();
        cli.timeout = Some(120.0);

        let config = cli_to_config(&cli);
        assert_eq!(config.timeout, Some(120.0));
    }
}
