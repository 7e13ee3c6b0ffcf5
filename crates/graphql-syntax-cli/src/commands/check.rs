use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::file_discovery;
use graphql_syntax::Source;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
enum ErrorFormat {
    /// `file:line:column: error: message`
    Oneline,

    /// The message followed by the offending source line and a caret.
    #[default]
    Detailed,
}

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        default_value_t,
        help="How to render syntax errors.",
        long,
        value_enum,
    )]
    error_format: ErrorFormat,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be parsed.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// What happened to one file.
#[derive(Debug)]
enum FileOutcome {
    Parsed { definitions: usize },
    SyntaxError(String),
    ReadError(String),
}

/// Totals over every file outcome, plus errors that never produced one.
#[derive(Debug, Default)]
struct Tally {
    num_definitions: usize,
    num_failures: usize,
    failures: String,
}

impl Tally {
    /// `walk_errors` come from directory traversal and `task_errors` from
    /// tasks that died before reporting an outcome. Both count as failures.
    fn collect(
        outcomes: &[(usize, PathBuf, FileOutcome)],
        walk_errors: &[String],
        task_errors: &[String],
    ) -> Self {
        let mut tally = Self::default();
        for (_, path, outcome) in outcomes {
            match outcome {
                FileOutcome::Parsed { definitions } => tally.num_definitions += definitions,
                FileOutcome::SyntaxError(rendered) => tally.fail(format_args!("{rendered}")),
                FileOutcome::ReadError(message) => {
                    tally.fail(format_args!("error: {}: {message}", path.display()))
                },
            }
        }
        for e in walk_errors {
            tally.fail(format_args!("error: {e}"));
        }
        for e in task_errors {
            tally.fail(format_args!("error: a file could not be checked: {e}"));
        }
        tally
    }

    fn fail(&mut self, message: std::fmt::Arguments<'_>) {
        self.num_failures += 1;
        let _ = writeln!(self.failures, "{message}");
    }
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let exts = file_discovery::normalize_exts(&self.graphql_file_exts);
        let discovered = file_discovery::discover(&self.file_or_dir_paths, &exts);

        let mut tasks = tokio::task::JoinSet::new();
        for (index, path) in discovered.graphql_files.iter().cloned().enumerate() {
            let error_format = self.error_format;
            tasks.spawn(async move {
                let outcome = check_file(&path, error_format).await;
                (index, path, outcome)
            });
        }

        let mut outcomes = Vec::with_capacity(discovered.graphql_files.len());
        let mut task_errors = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    log::warn!("A parse task failed to complete: {e}");
                    task_errors.push(e.to_string());
                },
            }
        }
        outcomes.sort_by_key(|(index, _, _)| *index);

        let walk_errors: Vec<String> =
            discovered.errors.iter().map(|e| e.to_string()).collect();
        let tally = Tally::collect(&outcomes, &walk_errors, &task_errors);

        let summary = format!(
            concat!(
                "  * Parsed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Found {} definitions.",
            ),
            outcomes.len(),
            discovered.num_skipped_files,
            tally.num_definitions,
        );

        if tally.num_failures == 0 {
            CommandResult::stdout(format_args!(
                "{} All GraphQL parsed successfully:\n{summary}",
                output_utils::GREEN_CHECK,
            ))
        } else {
            CommandResult::failure(
                format!(
                    "{} {} GraphQL syntax errors:\n{summary}",
                    output_utils::RED_X,
                    tally.num_failures,
                ),
                tally.failures.trim_end().to_string(),
            )
        }
    }
}

async fn check_file(path: &std::path::Path, error_format: ErrorFormat) -> FileOutcome {
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) => return FileOutcome::ReadError(e.to_string()),
    };

    let source = Source::with_name(text, path.display().to_string());
    let parsed = tokio::task::spawn_blocking(move || {
        let result = graphql_syntax::parse_source(&source);
        match result {
            Ok(doc) => FileOutcome::Parsed { definitions: doc.definitions.len() },
            Err(err) => FileOutcome::SyntaxError(match error_format {
                ErrorFormat::Oneline => err.format_oneline(&source),
                ErrorFormat::Detailed => err.format_detailed(&source),
            }),
        }
    })
    .await;

    match parsed {
        Ok(outcome) => outcome,
        Err(e) => FileOutcome::ReadError(format!("parse task failed: {e}")),
    }
}
