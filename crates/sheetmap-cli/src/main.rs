//! Sheetmap CLI.

use clap::Parser;
use sheetmap_cli::logging::{LogConfig, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod report;

use crate::cli::{Cli, Command, LogLevelArg, OutputFormatArg};
use crate::commands::{run_infer, run_propose, run_suggest};
use crate::report::{print_infer_report, print_suggest_report};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Suggest(args) => match run_suggest(args) {
            Ok(suggest_report) => {
                if args.format == OutputFormatArg::Json {
                    print_json(&suggest_report)
                } else {
                    print_suggest_report(&suggest_report);
                    0
                }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Propose(args) => match run_propose(args) {
            Ok(proposals) => print_json(&proposals),
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Infer(args) => match run_infer(args) {
            Ok(infer_report) => {
                if args.format == OutputFormatArg::Json {
                    print_json(&infer_report)
                } else {
                    print_infer_report(&infer_report);
                    0
                }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn print_json<T: serde::Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            0
        }
        Err(error) => {
            eprintln!("error: failed to serialize report: {error}");
            1
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        json: cli.log_json,
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config
}
