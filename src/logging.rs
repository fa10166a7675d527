//! Append-only activity log.
//!
//! Library code reports what it does through `tracing` events. The binary
//! installs a subscriber that appends one line per event to
//! `logs/file_organizer.log`:
//!
//! ```text
//! 2026-10-18 09:14:03,512 - INFO - Moved file: downloads/a.txt -> downloads/TextFiles/a.txt
//! ```

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::{Event, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Log file written by the binary, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "logs/file_organizer.log";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Errors raised while setting up the activity log.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("could not create log directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not open log file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("a global logger is already installed")]
    AlreadyInstalled(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Formats events as `<timestamp> - <LEVEL> - <message>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityFormat;

impl<S, N> FormatEvent<S, N> for ActivityFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let now = chrono::Local::now().format(TIMESTAMP_FORMAT);
        write!(writer, "{} - {} - ", now, event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Opens the log file for appending, creating it and its parent directory.
///
/// # Errors
///
/// Returns a `LogError` if the directory or file cannot be created.
pub fn open_activity_log(path: &Path) -> Result<File, LogError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| LogError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogError::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Builds a subscriber that appends formatted events to `file`.
pub fn activity_subscriber(
    file: File,
    filter: EnvFilter,
) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .event_format(ActivityFormat)
        .finish()
}

/// Installs the activity log as the process-wide subscriber.
///
/// The level defaults to `info` and can be overridden through `RUST_LOG`.
///
/// # Errors
///
/// Returns a `LogError` if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(path: &Path) -> Result<(), LogError> {
    let file = open_activity_log(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(activity_subscriber(file, filter))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_parent_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let log_path = temp_dir.path().join("logs").join("activity.log");

        open_activity_log(&log_path).expect("Failed to open log");

        assert!(log_path.parent().is_some_and(Path::is_dir));
        assert!(log_path.is_file());
    }

    #[test]
    fn test_lines_are_appended() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let log_path = temp_dir.path().join("activity.log");
        fs::write(&log_path, "earlier line\n").expect("Failed to seed log");

        let file = open_activity_log(&log_path).expect("Failed to open log");
        let subscriber = activity_subscriber(file, EnvFilter::new("info"));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("first");
            tracing::error!("second");
        });

        let content = fs::read_to_string(&log_path).expect("Failed to read log");
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "earlier line");
        assert!(lines[1].ends_with(" - INFO - first"));
        assert!(lines[2].ends_with(" - ERROR - second"));
    }

    #[test]
    fn test_line_starts_with_timestamp() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let log_path = temp_dir.path().join("activity.log");

        let file = open_activity_log(&log_path).expect("Failed to open log");
        let subscriber = activity_subscriber(file, EnvFilter::new("info"));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("stamped");
        });

        let content = fs::read_to_string(&log_path).expect("Failed to read log");
        let (stamp, rest) = content
            .trim_end()
            .split_once(" - ")
            .expect("Line should contain a separator");
        assert!(chrono::NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(rest, "INFO - stamped");
    }

    #[test]
    fn test_debug_events_filtered_at_info() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let log_path = temp_dir.path().join("activity.log");

        let file = open_activity_log(&log_path).expect("Failed to open log");
        let subscriber = activity_subscriber(file, EnvFilter::new("info"));
        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("hidden");
        });

        let content = fs::read_to_string(&log_path).expect("Failed to read log");
        assert!(content.is_empty());
    }
}
