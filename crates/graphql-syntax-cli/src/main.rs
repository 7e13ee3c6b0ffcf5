mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// Targets whose events honor the chosen level. Everything else (tokio,
/// walkdir) is held at `WARN`.
const LOGGED_TARGETS: [&str; 2] = ["graphql_syntax", "graphql_syntax_cli"];

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    let Some(command) = cli.cmd.take() else {
        return match cli.print_default_help() {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                std::process::ExitCode::FAILURE
            },
        };
    };

    let result = command.run(&cli).await;
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}");
    }
    result.exit_code
}

/// Maps a `LOG_LEVEL` value onto a tracing level. `verbose` is an alias for
/// `debug`.
fn parse_log_level(value: &str) -> Option<tracing::Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(tracing::Level::TRACE),
        "debug" | "verbose" => Some(tracing::Level::DEBUG),
        "info" => Some(tracing::Level::INFO),
        "warn" => Some(tracing::Level::WARN),
        _ => None,
    }
}

fn setup_logger(cli: &Cli) {
    let mut invalid_env_value = None;
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        match std::env::var("LOG_LEVEL") {
            Ok(value) => parse_log_level(&value).unwrap_or_else(|| {
                invalid_env_value = Some(value);
                DEFAULT_LOG_LEVEL
            }),
            Err(_) => DEFAULT_LOG_LEVEL,
        }
    };

    let targets = LOGGED_TARGETS
        .iter()
        .fold(Targets::new().with_default(tracing::Level::WARN), |targets, target| {
            targets.with_target(*target, log_level)
        });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(targets)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(value) = invalid_env_value {
        log::warn!("Invalid `LOG_LEVEL` environment variable value: `{value}`");
    }
}
