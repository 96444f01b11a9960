//! Fieldcheck CLI - Command-line interface for rule-based field validation
//!
//! This is the main entry point for the fieldcheck binary, providing commands
//! for checking single values, tax IDs, and whole form definitions.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Load configuration; logging settings come from it
    let config = match Config::load_with_file(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(&e, !cli.no_color),
    };

    // Set up colored output
    let use_color = cli.use_color(config.output.color);
    control::set_override(use_color);

    // Initialize logging
    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Run the application
    match run(cli, &config, use_color) {
        Ok(()) => process::exit(0),
        Err(e) => exit_with(&e, use_color),
    }
}

fn exit_with(e: &error::Error, use_color: bool) -> ! {
    // Failed validations already printed their report
    if !matches!(e, error::Error::ValidationFailed { .. }) {
        eprintln!("{}", error::format_error(e, use_color));

        if e.should_show_help() {
            eprintln!("\nFor more information, try '--help'");
        }
    }

    process::exit(e.exit_code());
}

/// Main application logic
#[instrument(skip_all, fields(command = cli.command.name()))]
fn run(cli: Cli, config: &Config, use_color: bool) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let format = cli.output_format(config.output.format);
    let mut output = OutputWriter::new(format, use_color, cli.quiet);

    tracing::info!(
        verbosity = cli.verbosity_level(),
        session = logging::current_session_id().unwrap_or_default(),
        "Executing command"
    );

    // Handle the subcommand
    match cli.command {
        Commands::Check(args) => handlers::handle_check(args, config, &mut output),
        Commands::Form(args) => handlers::handle_form(args, config, &mut output),
        Commands::TaxId(args) => handlers::handle_tax_id(args, &mut output),
        Commands::Rules => handlers::handle_rules(&mut output),
        Commands::Config(args) => handlers::handle_config(args, config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    // Verbosity first, then the config file, then the environment
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());
    logging_config.merge_with_file(&config.logging, cli.verbosity_level());
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
    }

    logging::init_logging(logging_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Log sink shared between the subscriber and the assertions
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn run_with_captured_logs(args: &[&str]) -> (Result<()>, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let cli = Cli::parse_from(args);
        let result = tracing::subscriber::with_default(subscriber, || {
            run(cli, &Config::default(), false)
        });
        (result, logs.contents())
    }

    #[test]
    fn test_field_values_stay_out_of_logs() {
        let (result, logs) = run_with_captured_logs(&["fieldcheck", "tax-id", "111.444.777-35"]);
        assert!(result.is_ok());
        assert!(logs.contains("command=\"tax-id\"") || logs.contains("command=tax-id"));
        assert!(!logs.contains("111.444.777-35"));
        assert!(!logs.contains("11144477735"));
        assert!(logs.contains("***.***.***-35"));

        let (result, logs) = run_with_captured_logs(&["fieldcheck", "check", "11144477735", "-r", "taxId"]);
        assert!(result.is_ok());
        assert!(!logs.is_empty());
        assert!(!logs.contains("11144477735"));

        let (result, logs) =
            run_with_captured_logs(&["fieldcheck", "check", "ana.silva@example.com", "-r", "email|maxLength:5"]);
        assert!(matches!(result, Err(error::Error::ValidationFailed { failures: 1 })));
        assert!(!logs.contains("ana.silva@example.com"));
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["fieldcheck", "rules"]);
        assert_eq!(cli.verbosity_level(), 0);

        // Test verbose flag
        let cli = Cli::parse_from(["fieldcheck", "-vv", "check", "abc", "-r", "required"]);
        assert_eq!(cli.verbosity_level(), 2);

        // Test quiet flag
        let cli = Cli::parse_from(["fieldcheck", "--quiet", "tax-id", "111.444.777-35"]);
        assert_eq!(cli.verbosity_level(), 0);
        assert!(matches!(cli.command, Commands::TaxId(_)));
    }

    #[test]
    fn test_configured_level_applies_without_verbose_flag() {
        let cli = Cli::parse_from(["fieldcheck", "rules"]);
        let mut config = Config::default();
        config.logging.level = Some("debug".to_string());

        let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());
        logging_config.merge_with_file(&config.logging, cli.verbosity_level());
        assert_eq!(logging_config.level, "debug");

        let cli = Cli::parse_from(["fieldcheck", "-v", "rules"]);
        let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());
        logging_config.merge_with_file(&config.logging, cli.verbosity_level());
        assert_eq!(logging_config.level, "info");
    }
}
