//! file-organizer - sort a cluttered directory into category subfolders
//!
//! This library loads an extension-to-category mapping from a JSON file,
//! creates one subfolder per category inside a target directory and moves
//! each top-level file into the folder its extension maps to. Name clashes
//! are resolved with a numeric suffix and every action lands in an
//! append-only activity log.

pub mod cli;
pub mod config;
pub mod file_organizer;
pub mod logging;
pub mod output;

pub use config::{ConfigError, DEFAULT_CONFIG_PATH, ExtensionMap, load_extensions};
pub use file_organizer::{
    FileEntry, MovedFile, OrganizeError, OrganizeReport, OrganizeResult, Organizer,
    organize_files,
};

pub use cli::{Args, run_cli};
