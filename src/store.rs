//! Raw key/value store loaded from a flat properties file.
//!
//! The store is read fully into memory at construction and never changes
//! afterwards. Typed access lives in the [`PropReader`](crate::PropReader)
//! and [`PropBuilder`](crate::PropBuilder) layers built on top of it.
//!
//! # File format
//!
//! One `key=value` assignment per line. The first `=` splits key from value;
//! keys are trimmed of surrounding whitespace, and whitespace immediately
//! after the `=` is stripped. Trailing whitespace in a value is preserved.
//! A line with no `=` defines the whole trimmed line as a key with an empty
//! value. Blank lines and lines starting with `#` or `!` are ignored. The
//! last assignment wins on duplicate keys.

use crate::error::{LoadError, LoadResult};
use std::collections::HashMap;
use std::path::Path;

/// Name reported by stores built without a backing file.
const IN_MEMORY_SOURCE: &str = "<memory>";

/// Immutable mapping of key to raw string value, tagged with the identity
/// of the file it was loaded from for diagnostic messages.
#[derive(Debug, Clone)]
pub struct PropStore {
    entries: HashMap<String, String>,
    source: String,
}

impl PropStore {
    /// Load a store from a properties file.
    ///
    /// The whole file is read eagerly; any I/O failure is fatal and
    /// propagates to the caller. There is no retry or partial load.
    pub fn load(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let mut entries = HashMap::new();
        for line in text.lines() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if let Some((key, value)) = parse_line(line) {
                entries.insert(key, value);
            }
        }

        Ok(Self {
            entries,
            source: path.display().to_string(),
        })
    }

    /// Build a store from in-memory pairs.
    ///
    /// Useful for embedding and for hermetic tests. The source name reported
    /// in diagnostics is a fixed placeholder rather than a file path.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            source: IN_MEMORY_SOURCE.to_string(),
        }
    }

    /// Check whether a key is present.
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Get the raw value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Identity of the originating file, for diagnostic messages.
    pub fn source_name(&self) -> &str {
        &self.source
    }

    /// Number of keys in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse one line into a key/value pair, or `None` for blanks and comments.
fn parse_line(line: &str) -> Option<(String, String)> {
    let lead = line.trim_start();
    if lead.is_empty() || lead.starts_with('#') || lead.starts_with('!') {
        return None;
    }
    match line.split_once('=') {
        Some((key, value)) => Some((key.trim().to_string(), value.trim_start().to_string())),
        None => Some((line.trim().to_string(), String::new())),
    }
}
