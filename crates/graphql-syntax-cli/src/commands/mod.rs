mod check;
mod file_discovery;
mod tokens;

use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use check::CheckCmd;
use tokens::TokensCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-syntax")]
pub(crate) enum CommandEnum {
    /// Parse GraphQL files and report the first syntax error in each.
    Check(Box<CheckCmd>),

    /// Print the token stream of a single GraphQL file.
    Tokens(Box<TokensCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: &Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Tokens(cmd) => cmd.run(cli).await,
        }
    }
}
