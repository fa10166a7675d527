/// Moving files into their category folders.
///
/// This module implements a single organize pass over a target directory:
/// it creates one subfolder per category, then moves every top-level file
/// whose extension is known into its category folder, renaming on collision.
/// Errors never reach the caller; they end the pass and go to the activity log.
use crate::config::{DEFAULT_CONFIG_PATH, ExtensionMap, load_extensions};
use glob::Pattern;
use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Names eligible for a move: anything with a dot in it.
const CANDIDATE_PATTERN: &str = "*.*";

/// Errors that end an organize pass.
#[derive(Debug, Error)]
pub enum OrganizeError {
    /// The directory to organize does not exist.
    #[error("The folder {} does not exist.", .path.display())]
    MissingTarget { path: PathBuf },
    /// A category folder could not be created.
    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The target directory could not be listed.
    #[error("Failed to read directory {}: {source}", .path.display())]
    ReadDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The candidate name pattern failed to compile.
    #[error("Invalid candidate pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),
    /// A file could not be moved to its destination.
    #[error("Failed to move {} to {}: {source}", .from.display(), .to.display())]
    FileMoveFailure {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for file organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// A file found directly inside the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    name: OsString,
    stem: OsString,
    suffix: Option<String>,
}

impl FileEntry {
    /// Splits a path into name, stem and suffix.
    ///
    /// The suffix is the text after the final dot, kept in its original case.
    /// Names with no dot, a single leading dot (`.bashrc`) or a trailing dot
    /// have no suffix. Returns `None` for paths without a file name.
    pub fn new(path: PathBuf) -> Option<Self> {
        let name = path.file_name()?.to_os_string();
        let stem = path.file_stem().unwrap_or(&name).to_os_string();
        let suffix = path
            .extension()
            .filter(|ext| !ext.is_empty())
            .map(|ext| format!(".{}", ext.to_string_lossy()));

        Some(Self {
            path,
            name,
            stem,
            suffix,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &OsStr {
        &self.name
    }

    pub fn stem(&self) -> &OsStr {
        &self.stem
    }

    /// Returns the lowercase extension with its leading dot, e.g. `.jpg`.
    pub fn extension(&self) -> Option<String> {
        self.suffix.as_ref().map(|s| s.to_lowercase())
    }

    /// Builds the collision name `<stem>_<counter><suffix>`.
    fn numbered_name(&self, counter: u32) -> OsString {
        let mut name = self.stem.clone();
        name.push(format!("_{}", counter));
        if let Some(suffix) = &self.suffix {
            name.push(suffix);
        }
        name
    }
}

/// A file that was moved during an organize pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovedFile {
    /// Where the file was before the pass.
    pub original_path: PathBuf,
    /// Where the file ended up, possibly renamed.
    pub new_path: PathBuf,
    /// The category folder it was moved into.
    pub category: String,
}

/// Outcome of one organize pass.
#[derive(Debug)]
pub struct OrganizeReport {
    /// The directory that was organized.
    pub target: PathBuf,
    /// Files moved, in the order they were processed.
    pub moved: Vec<MovedFile>,
    /// Files left in place because their extension is not mapped.
    pub skipped: Vec<PathBuf>,
    /// The error that stopped the pass, if any.
    pub failure: Option<OrganizeError>,
}

impl OrganizeReport {
    fn new(target: &Path) -> Self {
        Self {
            target: target.to_path_buf(),
            moved: Vec::new(),
            skipped: Vec::new(),
            failure: None,
        }
    }

    pub fn total_moved(&self) -> usize {
        self.moved.len()
    }

    /// Returns true if the pass reached every candidate file.
    pub fn is_complete_success(&self) -> bool {
        self.failure.is_none()
    }

    /// Counts moved files per category folder.
    pub fn category_counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for moved in &self.moved {
            *counts.entry(moved.category.clone()).or_insert(0) += 1;
        }
        counts
    }
}

/// Organizes a directory according to an extension map.
#[derive(Debug, Clone)]
pub struct Organizer {
    extensions: ExtensionMap,
}

impl Organizer {
    pub fn new(extensions: ExtensionMap) -> Self {
        Self { extensions }
    }

    /// Runs one organize pass over `target`.
    ///
    /// This never fails. A missing target is logged as an error and leaves
    /// the filesystem untouched. Any other error is logged as unexpected and
    /// stops the pass: files already moved stay moved, the rest stay put.
    /// The returned report describes what happened.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use file_organizer::{ExtensionMap, Organizer};
    /// use std::path::Path;
    ///
    /// let report = Organizer::new(ExtensionMap::default()).organize(Path::new("Downloads"));
    /// println!("Moved {} files", report.total_moved());
    /// ```
    pub fn organize(&self, target: &Path) -> OrganizeReport {
        let mut report = OrganizeReport::new(target);

        if let Err(e) = self.run(target, &mut report) {
            match &e {
                OrganizeError::MissingTarget { .. } => tracing::error!("Error: {}", e),
                _ => tracing::error!("Unexpected error: {}", e),
            }
            report.failure = Some(e);
        }

        report
    }

    fn run(&self, target: &Path, report: &mut OrganizeReport) -> OrganizeResult<()> {
        if !target.exists() {
            return Err(OrganizeError::MissingTarget {
                path: target.to_path_buf(),
            });
        }

        for category in self.extensions.categories() {
            ensure_category_dir(&target.join(category))?;
        }

        let candidates = Pattern::new(CANDIDATE_PATTERN)?;
        for entry in scan_candidates(target, &candidates)? {
            let category = entry
                .extension()
                .and_then(|ext| self.extensions.category_for(&ext));
            let Some(category) = category else {
                Self::skip(&entry, report);
                continue;
            };

            let destination = unique_destination(&target.join(category), &entry);
            fs::rename(entry.path(), &destination).map_err(|source| {
                OrganizeError::FileMoveFailure {
                    from: entry.path().to_path_buf(),
                    to: destination.clone(),
                    source,
                }
            })?;

            tracing::info!(
                "Moved file: {} -> {}",
                entry.path().display(),
                destination.display()
            );
            report.moved.push(MovedFile {
                original_path: entry.path().to_path_buf(),
                new_path: destination,
                category: category.to_string(),
            });
        }

        Ok(())
    }

    fn skip(entry: &FileEntry, report: &mut OrganizeReport) {
        tracing::info!(
            "Skipping file: {} (Unsupported extension)",
            entry.path().display()
        );
        report.skipped.push(entry.path().to_path_buf());
    }
}

/// Organizes `target_folder` using the config at `DEFAULT_CONFIG_PATH`.
///
/// All outcomes are reported through the activity log only.
pub fn organize_files(target_folder: impl AsRef<Path>) {
    let extensions = load_extensions(DEFAULT_CONFIG_PATH);
    Organizer::new(extensions).organize(target_folder.as_ref());
}

/// Creates a category folder unless a directory already exists there.
fn ensure_category_dir(path: &Path) -> OrganizeResult<()> {
    match fs::create_dir(path) {
        Ok(()) => {
            tracing::debug!("Created category folder {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(source) => Err(OrganizeError::DirectoryCreationFailed {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Lists the move candidates directly inside `target`, sorted by name.
///
/// Only names matching `*.*` are returned. Directories, including symlinks
/// to directories, are never candidates.
fn scan_candidates(target: &Path, pattern: &Pattern) -> OrganizeResult<Vec<FileEntry>> {
    let read_dir_failed = |source: std::io::Error| OrganizeError::ReadDirFailed {
        path: target.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(target).map_err(read_dir_failed)? {
        let entry = entry.map_err(read_dir_failed)?;
        let path = entry.path();

        if path.is_dir() || !pattern.matches(&entry.file_name().to_string_lossy()) {
            continue;
        }
        if let Some(file) = FileEntry::new(path) {
            entries.push(file);
        }
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Picks a destination inside `folder` that no existing entry occupies.
///
/// The file's own name is tried first, then `stem_1`, `stem_2`, ... keeping
/// the original suffix.
fn unique_destination(folder: &Path, entry: &FileEntry) -> PathBuf {
    let mut candidate = folder.join(entry.name());
    let mut counter = 1;
    while is_occupied(&candidate) {
        candidate = folder.join(entry.numbered_name(counter));
        counter += 1;
    }
    candidate
}

/// True if anything, including a dangling symlink, exists at `path`.
fn is_occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}
