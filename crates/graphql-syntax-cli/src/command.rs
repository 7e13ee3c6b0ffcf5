use crate::Cli;
use crate::CommandResult;

/// A subcommand. Runs to completion and reports its output and exit code
/// through [`CommandResult`] rather than printing directly.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: &Cli) -> CommandResult;
}
