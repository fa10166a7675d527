//! Extension-to-category configuration.
//!
//! The configuration is a flat JSON object mapping a file extension (with its
//! leading dot, lowercase) to the name of the category folder that files with
//! that extension are moved into:
//!
//! ```json
//! {
//!     ".txt": "TextFiles",
//!     ".jpg": "ImageFiles",
//!     ".pdf": "PDFFiles"
//! }
//! ```
//!
//! Loading never fails from the caller's point of view: a missing or malformed
//! file is logged and replaced by the built-in mapping above.

use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file read by every organize run, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "extensions.json";

/// Built-in mapping used whenever the config file cannot be loaded.
const DEFAULT_EXTENSIONS: [(&str, &str); 3] = [
    (".txt", "TextFiles"),
    (".jpg", "ImageFiles"),
    (".pdf", "PDFFiles"),
];

/// Errors that can occur while loading the extension configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file is absent or could not be read.
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not a flat JSON object of strings.
    #[error("invalid extensions config {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Mapping from a normalized extension (e.g. `.jpg`) to a category folder name.
///
/// Keys and values are taken exactly as written in the config file. Category
/// names are not validated, so a value containing a path separator produces a
/// nested folder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ExtensionMap(HashMap<String, String>);

impl ExtensionMap {
    /// Builds a map from `(extension, category)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use file_organizer::config::ExtensionMap;
    ///
    /// let map = ExtensionMap::from_pairs([(".png", "Images"), (".md", "Notes")]);
    /// assert_eq!(map.category_for(".png"), Some("Images"));
    /// assert_eq!(map.category_for(".gif"), None);
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(ext, category)| (ext.into(), category.into()))
                .collect(),
        )
    }

    /// Loads the mapping from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read and
    /// `ConfigError::Invalid` if it is not a JSON object of strings.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns the category folder for an already-normalized extension.
    pub fn category_for(&self, extension: &str) -> Option<&str> {
        self.0.get(extension).map(String::as_str)
    }

    /// Returns every distinct category name, sorted.
    pub fn categories(&self) -> BTreeSet<&str> {
        self.0.values().map(String::as_str).collect()
    }

    /// Iterates over `(extension, category)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(ext, cat)| (ext.as_str(), cat.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ExtensionMap {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_EXTENSIONS)
    }
}

/// Loads the extension map, falling back to the built-in defaults.
///
/// Any failure (missing file, unreadable file, malformed JSON) is logged at
/// error level with its cause. Nothing is logged on success.
pub fn load_extensions(config_path: impl AsRef<Path>) -> ExtensionMap {
    match ExtensionMap::load(config_path.as_ref()) {
        Ok(map) => map,
        Err(e) => {
            tracing::error!("Error loading extensions config: {}", e);
            ExtensionMap::default()
        }
    }
}
