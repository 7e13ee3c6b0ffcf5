use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphql_syntax::GraphQLLexer;
use graphql_syntax::Source;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct TokensCmd {
    #[arg(
        help="Path to the GraphQL file to tokenize.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for TokensCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let text = match tokio::fs::read_to_string(&self.file_path).await {
            Ok(text) => text,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to read {}: {e}",
                output_utils::RED_X,
                self.file_path.display(),
            )),
        };

        let source = Source::with_name(text, self.file_path.display().to_string());
        let mut out = String::new();
        for token in GraphQLLexer::new(&source) {
            match token {
                Ok(token) => {
                    let location = source.location(token.span.start);
                    let _ = writeln!(
                        out,
                        "{:>5}:{:<4} {:>6}..{:<6} {token}",
                        location.line(),
                        location.column(),
                        token.span.start,
                        token.span.end,
                    );
                },
                Err(err) => {
                    return CommandResult::failure(
                        out.trim_end().to_string(),
                        err.format_detailed(&source),
                    );
                },
            }
        }

        log::debug!("Tokenized {}.", self.file_path.display());
        CommandResult::stdout(format_args!("{}", out.trim_end()))
    }
}
