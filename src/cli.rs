//! Command-line interface.
//!
//! The binary takes exactly one argument, the directory to organize. The
//! extension config and the activity log live at fixed paths relative to
//! the working directory.

use crate::config::{DEFAULT_CONFIG_PATH, load_extensions};
use crate::file_organizer::{OrganizeReport, Organizer};
use crate::output::OutputFormatter;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Sort the files of a directory into category subfolders by extension.
#[derive(Parser, Debug)]
#[command(
    name = "file-organizer",
    version,
    about = "Sort the files of a directory into category subfolders by extension",
    long_about = "Moves every file directly inside DIRECTORY into a subfolder named after its \
                  category, as mapped by extensions.json in the working directory.\n\n\
                  Activity is appended to logs/file_organizer.log."
)]
pub struct Args {
    /// Directory to organize.
    pub directory: PathBuf,
}

/// Runs one organize pass over `dir_path` and prints a summary.
///
/// Failures are logged and summarized on the console; they never turn into
/// an error for the caller.
///
/// # Examples
///
/// ```no_run
/// use file_organizer::cli::run_cli;
/// use std::path::Path;
///
/// let report = run_cli(Path::new("Downloads"), Path::new("logs/file_organizer.log"));
/// assert!(report.is_complete_success());
/// ```
pub fn run_cli(dir_path: &Path, log_path: &Path) -> OrganizeReport {
    OutputFormatter::info(&format!("Organizing contents of: {}", dir_path.display()));

    let extensions = load_extensions(DEFAULT_CONFIG_PATH);
    let report = Organizer::new(extensions).organize(dir_path);

    OutputFormatter::report(&report, log_path);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parses_single_directory() {
        let args = Args::try_parse_from(["file-organizer", "Downloads"]).expect("Should parse");
        assert_eq!(args.directory, PathBuf::from("Downloads"));
    }

    #[test]
    fn test_directory_is_required() {
        assert!(Args::try_parse_from(["file-organizer"]).is_err());
    }

    #[test]
    fn test_rejects_extra_arguments() {
        assert!(Args::try_parse_from(["file-organizer", "a", "b"]).is_err());
        assert!(Args::try_parse_from(["file-organizer", "a", "--dry-run"]).is_err());
    }
}
