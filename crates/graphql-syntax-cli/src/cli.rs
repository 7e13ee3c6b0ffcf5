use clap::CommandFactory;
use crate::commands;

/// Parses GraphQL documents and reports syntax errors.
///
/// The log level comes from `--verbose` or the `LOG_LEVEL` environment
/// variable (`trace`, `debug`, `verbose`, `info` or `warn`).
#[derive(clap::Parser, Debug)]
#[command(name = "graphql-syntax", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    /// Log at `debug` level, overriding `LOG_LEVEL`.
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Run when no subcommand is given.
    pub(crate) fn print_default_help(&self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
