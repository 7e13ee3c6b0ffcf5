use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Files found under a set of input paths.
#[derive(Debug, Default)]
pub(crate) struct DiscoveredFiles {
    pub graphql_files: Vec<PathBuf>,
    pub num_skipped_files: usize,
    pub errors: Vec<walkdir::Error>,
}

/// Normalizes extensions given as `graphql` or `.graphql` to the bare form
/// returned by [`Path::extension()`].
pub(crate) fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim_start_matches('.').to_string())
        .filter(|ext| !ext.is_empty())
        .collect()
}

/// Recursively collects every file at or under `paths` whose extension is
/// in `exts`.
///
/// When exactly one path is given, it is a file, and nothing matched, that
/// file is taken anyway: the user named it explicitly.
pub(crate) fn discover(paths: &[PathBuf], exts: &HashSet<String>) -> DiscoveredFiles {
    log::debug!("Scanning {} input paths...", paths.len());
    let mut found = DiscoveredFiles::default();

    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    found.errors.push(e);
                    continue;
                },
            };

            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }
            if has_ext(entry_path, exts) {
                log::trace!("Found GraphQL file at {entry_path:#?}.");
                found.graphql_files.push(entry_path.to_path_buf());
            } else {
                found.num_skipped_files += 1;
            }
        }
    }

    if found.graphql_files.is_empty()
        && paths.len() == 1
        && let Some(first_arg_path) = paths.first()
        && first_arg_path.is_file() {
        log::warn!(
            "Proceeding to parse {first_arg_path:#?} even though it doesn't \
            match any of the --graphql-file-exts ({}).",
            exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped_files = found.num_skipped_files.saturating_sub(1);
        found.graphql_files.push(first_arg_path.clone());
    }

    log::debug!("Found {} GraphQL files to parse.", found.graphql_files.len());
    found
}

fn has_ext(path: &Path, exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| exts.contains(ext.to_string_lossy().as_ref()))
        .unwrap_or(false)
}
