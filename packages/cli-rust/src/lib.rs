//! prod-env CLI - Materialize production secrets from an env template
//!
//! This module contains the CLI implementation used by the binary.

mod commands;
mod constants;
mod output;

use crate::constants::{EXIT_FAILURE, EXIT_USAGE};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser, Subcommand};
use std::ffi::OsString;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Generate the production secrets env file
#[derive(Parser, Debug)]
#[command(name = "prod-env")]
#[command(version = prod_env_core::get_version())]
#[command(about = "Generate the production secrets env file from the .prod.env template", long_about = None)]
#[command(after_help = get_after_help())]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replace CHANGE_ME placeholders with generated secrets and write the secrets file
    Init(commands::InitArgs),
}

/// Usage examples shown after the help text
fn get_after_help() -> &'static str {
    "Examples:
  prod-env init
  prod-env init --llm-key sk-...
  prod-env init --force --out /srv/lightrag/.prod.secrets.env

Then start the stack with:
  docker compose --env-file .prod.secrets.env up -d"
}

/// How a failed parse should end the process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseFailure {
    /// --help or --version: print to stdout, exit 0
    Informational,
    /// Missing or unknown command: print usage, exit 2
    Usage,
    /// Malformed flags or values: print ERROR, exit 1
    Invalid,
}

fn classify_parse_error(err: &clap::Error, args: &[OsString]) -> ParseFailure {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ParseFailure::Informational,
        ErrorKind::InvalidSubcommand
        | ErrorKind::MissingSubcommand
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ParseFailure::Usage,
        ErrorKind::UnknownArgument if unknown_before_command(err, args) => ParseFailure::Usage,
        _ => ParseFailure::Invalid,
    }
}

/// Whether the rejected argument sits where the command name belongs
fn unknown_before_command(err: &clap::Error, args: &[OsString]) -> bool {
    let Some(ContextValue::String(invalid)) = err.get(ContextKind::InvalidArg) else {
        return false;
    };
    args.iter()
        .skip(1)
        .take_while(|arg| arg.as_os_str() != "init")
        .any(|arg| arg.to_str() == Some(invalid.as_str()))
}

/// First line of a clap error, without clap's own `error:` prefix
fn clap_error_summary(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

fn print_usage() {
    eprintln!("{}", Cli::command().render_help());
}

fn handle_parse_error(err: &clap::Error, args: &[OsString]) -> ExitCode {
    match classify_parse_error(err, args) {
        ParseFailure::Informational => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        ParseFailure::Usage => {
            eprintln!("{}", clap_error_summary(err));
            eprintln!();
            print_usage();
            ExitCode::from(EXIT_USAGE)
        }
        ParseFailure::Invalid => {
            output::print_error(&anyhow::anyhow!("{}", clap_error_summary(err)));
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Map -v count to a default filter level
fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8, no_color: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));
    // Ignore the error when a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .try_init();
}

/// Run the CLI with the process arguments
pub fn run() -> ExitCode {
    run_from(std::env::args_os())
}

/// Run the CLI with explicit arguments (first item is the program name)
pub fn run_from<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) => return handle_parse_error(&err, &args),
    };

    // Configure color output
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    init_tracing(cli.verbose, cli.no_color);

    let Some(command) = cli.command else {
        print_usage();
        return ExitCode::from(EXIT_USAGE);
    };

    let result = match command {
        Commands::Init(args) => commands::cmd_init(&args, cli.quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn classify(args: &[&str]) -> ParseFailure {
        let args: Vec<OsString> = args.iter().map(OsString::from).collect();
        let err = Cli::try_parse_from(&args).unwrap_err();
        classify_parse_error(&err, &args)
    }

    fn parse_err(args: &[&str]) -> clap::Error {
        Cli::try_parse_from(args).unwrap_err()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn init_parses_all_flags() {
        let cli = Cli::try_parse_from([
            "prod-env",
            "init",
            "--force",
            "--out",
            "out.env",
            "--llm-key",
            "abc123",
        ])
        .expect("parse");

        let Some(Commands::Init(args)) = cli.command else {
            panic!("expected init command");
        };
        assert!(args.force);
        assert_eq!(args.out, Some(PathBuf::from("out.env")));
        assert_eq!(args.llm_key.as_deref(), Some("abc123"));
        assert_eq!(args.template, None);
    }

    #[test]
    fn init_defaults() {
        let cli = Cli::try_parse_from(["prod-env", "init"]).expect("parse");
        let Some(Commands::Init(args)) = cli.command else {
            panic!("expected init command");
        };
        assert!(!args.force);
        assert_eq!(args.out, None);
        assert_eq!(args.llm_key, None);
    }

    #[test]
    fn no_command_parses_to_none() {
        let cli = Cli::try_parse_from(["prod-env"]).expect("parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn help_is_informational() {
        for flag in ["-h", "--help"] {
            assert_eq!(classify(&["prod-env", flag]), ParseFailure::Informational);
        }
    }

    #[test]
    fn unknown_command_is_usage_failure() {
        assert_eq!(classify(&["prod-env", "deploy"]), ParseFailure::Usage);
    }

    #[test]
    fn unknown_flag_in_command_position_is_usage_failure() {
        assert_eq!(classify(&["prod-env", "--bogus"]), ParseFailure::Usage);
        assert_eq!(classify(&["prod-env", "-q", "--bogus"]), ParseFailure::Usage);
        assert_eq!(
            classify(&["prod-env", "--bogus", "init"]),
            ParseFailure::Usage
        );
    }

    #[test]
    fn unknown_flag_is_invalid() {
        assert_eq!(
            classify(&["prod-env", "init", "--bogus"]),
            ParseFailure::Invalid
        );
        let err = parse_err(&["prod-env", "init", "--bogus"]);
        assert!(clap_error_summary(&err).contains("--bogus"));
        assert!(!clap_error_summary(&err).starts_with("error:"));
    }

    #[test]
    fn missing_flag_value_is_invalid() {
        for flag in ["--out", "--llm-key"] {
            assert_eq!(classify(&["prod-env", "init", flag]), ParseFailure::Invalid);
        }
    }

    #[test]
    fn llm_key_may_start_with_hyphen() {
        let cli = Cli::try_parse_from(["prod-env", "init", "--llm-key", "-abc"]).expect("parse");
        let Some(Commands::Init(args)) = cli.command else {
            panic!("expected init command");
        };
        assert_eq!(args.llm_key.as_deref(), Some("-abc"));
    }

    #[test]
    fn version_comes_from_core() {
        assert_eq!(
            Cli::command().get_version(),
            Some(prod_env_core::get_version())
        );
    }

    #[test]
    fn log_level_follows_verbosity() {
        assert_eq!(default_log_level(0), "warn");
        assert_eq!(default_log_level(1), "info");
        assert_eq!(default_log_level(2), "debug");
        assert_eq!(default_log_level(5), "trace");
    }

    #[test]
    fn run_from_without_command_exits_with_usage_status() {
        assert_eq!(run_from(["prod-env"]), ExitCode::from(EXIT_USAGE));
    }
}
