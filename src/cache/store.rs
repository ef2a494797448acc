//! In-memory definition cache with NDJSON persistence
//!
//! The cache owns a flat map from normalized (lowercased) words to
//! cached values: a definition payload, a negative, or an alias to a
//! canonical spelling. Disk is only used for durability across
//! sessions; the whole file is loaded at startup and rewritten on save.
//!
//! The backing file may be shared by multiple process instances (e.g.
//! several editor windows). `save` merges fresh on-disk entries into
//! memory before rewriting so one session's save does not erase entries
//! another session learned. This is advisory, not transactional:
//! concurrent saves race and the later full write wins.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::record::{self, CacheValue, RecordError};

/// Result of a cache lookup, after alias resolution
#[derive(Debug, PartialEq)]
pub enum CacheLookup<'a, M> {
    /// A definition is cached for this word
    Entry(&'a M),

    /// A prior lookup confirmed no definition exists
    Negative,

    /// Nothing is cached for this word
    Unknown,
}

/// Error type for reading a cache file
#[derive(Debug, thiserror::Error)]
enum LoadError {
    #[error("failed to read cache file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid record on line {line}: {source}")]
    Record { line: usize, source: RecordError },
}

/// Persistent word-to-definition cache, generic over the payload type
#[derive(Debug)]
pub struct DefinitionCache<M> {
    entries: HashMap<String, CacheValue<M>>,
    cache_path: Option<PathBuf>,
    /// Whether there are changes since the last successful save
    dirty: bool,
}

impl<M> Default for DefinitionCache<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> DefinitionCache<M> {
    /// Create an empty cache with no backing file
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            cache_path: None,
            dirty: false,
        }
    }

    /// Create an empty cache backed by a file that may not exist yet
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            entries: HashMap::new(),
            cache_path: Some(path.into()),
            dirty: false,
        }
    }

    /// The backing file location, if any
    pub fn cache_path(&self) -> Option<&Path> {
        self.cache_path.as_deref()
    }

    /// Whether there are unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of records (entries, negatives and aliases)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a word, following alias records to the canonical entry.
    ///
    /// Alias chains are expected to be one hop, but resolution is
    /// transitive with a cycle guard so a hand-edited or legacy cache
    /// file cannot loop forever. A dangling alias target or a cycle is
    /// logged as an anomaly and reported as `Unknown`.
    pub fn get(&self, word: &str) -> CacheLookup<'_, M> {
        let mut key = normalize(word);
        let mut visited: HashSet<String> = HashSet::new();

        loop {
            match self.entries.get(&key) {
                Some(CacheValue::Entry(model)) => return CacheLookup::Entry(model),
                Some(CacheValue::Negative) => return CacheLookup::Negative,
                Some(CacheValue::Alias(target)) => {
                    if !visited.insert(key.clone()) {
                        tracing::warn!("Alias cycle in definition cache at \"{}\"", key);
                        return CacheLookup::Unknown;
                    }
                    key = normalize(target);
                }
                None => {
                    if !visited.is_empty() {
                        tracing::warn!("Dangling alias target \"{}\" in definition cache", key);
                    }
                    return CacheLookup::Unknown;
                }
            }
        }
    }

    /// Insert or overwrite a definition. `None` records a negative: a
    /// confirmed "no definition exists" that short-circuits future
    /// lookups.
    pub fn set(&mut self, word: &str, value: Option<M>) {
        let cached = match value {
            Some(model) => CacheValue::Entry(model),
            None => CacheValue::Negative,
        };
        self.entries.insert(normalize(word), cached);
        self.dirty = true;
    }

    /// Record that `word` is a spelling variant of `canonical`.
    ///
    /// A self-alias is rejected (logged, not inserted) since it could
    /// never resolve to anything.
    pub fn alias(&mut self, word: &str, canonical: &str) {
        let key = normalize(word);
        let target = normalize(canonical);
        if key == target {
            tracing::warn!("Refusing self-alias for \"{}\" in definition cache", key);
            return;
        }
        self.entries.insert(key, CacheValue::Alias(target));
        self.dirty = true;
    }

    /// Clear all in-memory records. Does not touch the backing file.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.dirty = true;
    }

    /// Remove the backing file from disk, if present. Idempotent.
    pub fn clear_disk(&self) {
        let Some(path) = &self.cache_path else {
            return;
        };
        match fs::remove_file(path) {
            Ok(()) => tracing::info!("Removed definition cache file {}", path.display()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!("Failed to remove cache file {}: {}", path.display(), err);
            }
        }
    }
}

impl<M> DefinitionCache<M>
where
    M: Serialize + DeserializeOwned,
{
    /// Load a cache from the given file.
    ///
    /// A missing file yields an empty cache bound to that path. Any
    /// other read or parse failure is logged and an empty cache is
    /// returned so the caller keeps working without persistence.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match read_records::<M>(&path) {
            Ok(Some(records)) => {
                // Duplicate keys in a file keep the last-seen value
                let mut entries = HashMap::new();
                for (key, value) in records {
                    entries.insert(normalize(&key), value);
                }
                tracing::info!(
                    "Loaded {} entries from definition cache at {}",
                    entries.len(),
                    path.display()
                );
                Self {
                    entries,
                    cache_path: Some(path),
                    dirty: false,
                }
            }
            Ok(None) => Self::with_path(path),
            Err(err) => {
                tracing::warn!(
                    "Error loading definition cache from {}: {}",
                    path.display(),
                    err
                );
                Self::with_path(path)
            }
        }
    }

    /// Merge new on-disk records into memory. Existing in-memory values
    /// always win over disk values for the same key.
    ///
    /// A missing file means there is nothing to merge; any other
    /// failure is logged and swallowed so the in-memory cache stays
    /// usable.
    pub fn refresh(&mut self) {
        let Some(path) = self.cache_path.clone() else {
            return;
        };
        match read_records::<M>(&path) {
            Ok(Some(records)) => {
                let mut fresh = HashMap::new();
                for (key, value) in records {
                    fresh.insert(normalize(&key), value);
                }
                for (key, value) in fresh {
                    self.entries.entry(key).or_insert(value);
                }
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(
                    "Error refreshing definition cache from {}: {}",
                    path.display(),
                    err
                );
            }
        }
    }

    /// Flush the cache to its backing file.
    ///
    /// No-op unless a path is configured, the cache is non-empty and
    /// there are unsaved changes. Refreshes from disk first so entries
    /// written by another session since the last load are not dropped,
    /// then rewrites the full merged set. Write failures are logged and
    /// swallowed; the dirty flag stays set so a later save can retry.
    pub fn save(&mut self) {
        let Some(path) = self.cache_path.clone() else {
            return;
        };
        if self.entries.is_empty() || !self.dirty {
            return;
        }

        self.refresh();

        match self.write_records(&path) {
            Ok(()) => {
                self.dirty = false;
                tracing::info!(
                    "Saved {} entries to definition cache at {}",
                    self.entries.len(),
                    path.display()
                );
            }
            Err(err) => {
                tracing::warn!(
                    "Error saving definition cache to {}: {}",
                    path.display(),
                    err
                );
            }
        }
    }

    /// Write the full record set to a fresh file (replace, not append),
    /// using a temp file plus rename so a crash mid-write cannot leave
    /// a truncated cache.
    fn write_records(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create cache directory: {}", parent.display()))?;
        }

        let mut buf = String::new();
        for (key, value) in &self.entries {
            buf.push_str(&record::encode_line(key, value)?);
            buf.push('\n');
        }

        let temp_path = path.with_extension("ndjson.tmp");
        fs::write(&temp_path, buf)
            .with_context(|| format!("Failed to write temp cache file: {}", temp_path.display()))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename cache file: {}", path.display()))?;

        Ok(())
    }
}

/// Normalized lookup key: case-folded spelling
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}

/// Read all records from a cache file. `Ok(None)` means the file does
/// not exist. The first malformed line aborts the whole read; silently
/// skipping bad lines would hide data loss.
fn read_records<M: DeserializeOwned>(path: &Path) -> Result<Option<Vec<(String, CacheValue<M>)>>, LoadError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let mut records = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = record::decode_line(line).map_err(|source| LoadError::Record {
            line: index + 1,
            source,
        })?;
        records.push(record);
    }

    Ok(Some(records))
}
