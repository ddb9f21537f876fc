use clap::{CommandFactory, Parser};
use upwatch::config::{CliConfig, Config};
use upwatch::core::constants::output_formats;
use upwatch::core::types::CheckableRow;
use upwatch::monitor::{BatchScheduler, HttpProber, StatusSink};
use upwatch::reporting::logging;
use upwatch::sources;
use upwatch::ui::completion::print_completions;
use upwatch::ui::{Cli, Commands, ProgressReporter, SweepSummary, cli_to_config, render};

use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    // Validate that sources are provided when not using completions
    if cli.sources.is_empty() {
        eprintln!("Error: No sources provided");
        eprintln!("\nFor more information, try '--help'.");
        std::process::exit(1);
    }

    // Run the main sweep logic
    match run_upwatch_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if one was processed
fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        None => None,
    }
}

/// Main sweep logic extracted from main() for testing
async fn run_upwatch_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    // Load and merge configuration
    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(
        config.verbose.unwrap_or(false) || cli_config.verbose,
        cli_config.quiet,
    );
    logging::log_config_info(&config);

    // Load rows from every source, in argument order
    let mut rows: Vec<CheckableRow> = Vec::new();
    for source in &cli.sources {
        let loaded = sources::load_rows(source).await?;
        logging::log_source_info(source, loaded.len());
        rows.extend(loaded);
    }

    if rows.is_empty() {
        println!("No rows to check.");
        return Ok(0);
    }

    let format = config
        .output_format
        .clone()
        .unwrap_or_else(|| output_formats::DEFAULT.to_string());

    // Progress bars only make sense on an interactive terminal and when
    // the table output is not about to be machine-parsed
    let show_progress = !cli_config.quiet
        && !cli_config.no_progress
        && format == output_formats::TEXT
        && atty::is(atty::Stream::Stderr);

    let options = config.sweep_options();
    logging::log_sweep_start(rows.len(), options.batch_size);

    let mut reporter = ProgressReporter::new(show_progress);
    reporter.start_sweep(rows.len());

    let prober = HttpProber::from_config(&config)?;
    let scheduler = BatchScheduler::new(prober);

    let mut sink = ConsoleSink {
        reporter: &reporter,
    };

    let started = Instant::now();
    scheduler.run(&mut rows, &options, &mut sink).await;

    let summary = SweepSummary::of(&rows);
    logging::log_sweep_complete(
        summary.online,
        summary.total - summary.skipped,
        started.elapsed().as_millis(),
    );
    reporter.finish_and_clear();

    print!("{}", render(&rows, &format));

    Ok(if summary.all_online() { 0 } else { 1 })
}

/// Sink wiring scheduler events to the progress bar and debug log
struct ConsoleSink<'a> {
    reporter: &'a ProgressReporter,
}

impl StatusSink for ConsoleSink<'_> {
    fn on_row_update(&mut self, row: &CheckableRow) {
        logging::log_row_status(row);
    }

    fn on_progress(&mut self, completed: usize) {
        self.reporter.advance(completed);
    }
}

/// Resolve the effective configuration from files and CLI flags
fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()
    };

    config.merge_with_cli(cli_config);
    config.validate()?;

    Ok(config)
}
