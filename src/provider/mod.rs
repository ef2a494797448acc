//! Lookup orchestration: cache-first definition resolution
//!
//! A provider owns one definition cache and one remote client and turns
//! a word into a displayable hint. It decides what gets cached: found
//! definitions under their canonical spelling, an alias when the query
//! spelling differs, and negatives for confirmed misses. Failed or
//! cancelled lookups are never cached so the next hover retries.

mod registry;

pub use registry::{FREE_DICTIONARY, ProviderRegistry, WORDS_API};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cache::{CacheLookup, DefinitionCache, normalize};
use crate::client::{CancelToken, DefinitionClient, FetchOutcome};

/// A rendered definition hint ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct Hint {
    pub markdown: String,
}

/// Render a model into display markup
pub type RenderFn<M> = Box<dyn Fn(&M) -> String + Send + Sync>;

/// Object-safe provider interface the host wires to hover/commands
#[async_trait]
pub trait HintProvider: Send {
    fn id(&self) -> &str;

    /// Resolve a word to a displayable hint, or `None` if no definition
    /// is available for this call. Case is ignored.
    async fn hint(&mut self, word: &str, cancel: &CancelToken) -> Option<Hint>;

    /// Drop all in-memory cache entries; the backing file is untouched
    fn clear(&mut self);

    /// Delete the backing cache file, if any
    fn clear_disk(&mut self);

    /// Flush the cache to disk. Must be called exactly once during
    /// teardown; skipping it loses everything learned since the last
    /// save.
    async fn shutdown(&mut self);
}

/// A definition provider: cache + remote client + display template
pub struct Provider<M, C> {
    id: String,
    client: C,
    cache: DefinitionCache<M>,
    render: RenderFn<M>,
}

impl<M, C> Provider<M, C>
where
    M: Serialize + DeserializeOwned + Send + Sync,
    C: DefinitionClient<M>,
{
    pub fn new(
        id: impl Into<String>,
        client: C,
        cache: DefinitionCache<M>,
        render: RenderFn<M>,
    ) -> Self {
        let id = id.into();
        match cache.cache_path() {
            Some(path) => tracing::info!("{}: Using definition cache at {}", id, path.display()),
            None => tracing::info!("{}: Definition cache not available", id),
        }
        Self {
            id,
            client,
            cache,
            render,
        }
    }

    pub fn cache(&self) -> &DefinitionCache<M> {
        &self.cache
    }
}

#[async_trait]
impl<M, C> HintProvider for Provider<M, C>
where
    M: Serialize + DeserializeOwned + Send + Sync,
    C: DefinitionClient<M>,
{
    fn id(&self) -> &str {
        &self.id
    }

    async fn hint(&mut self, word: &str, cancel: &CancelToken) -> Option<Hint> {
        let normalized = normalize(word);

        match self.cache.get(&normalized) {
            CacheLookup::Entry(model) => {
                tracing::debug!("{}: Cache hit for \"{}\"", self.id, normalized);
                return Some(Hint {
                    markdown: (self.render)(model),
                });
            }
            CacheLookup::Negative => {
                tracing::debug!("{}: Cached negative for \"{}\"", self.id, normalized);
                return None;
            }
            CacheLookup::Unknown => {}
        }

        match self.client.fetch(&normalized, cancel).await {
            FetchOutcome::Indeterminate => {
                // Not cached: the next lookup of this word retries
                tracing::debug!("{}: No result for \"{}\" this time", self.id, normalized);
                None
            }
            FetchOutcome::Missing => {
                self.cache.set(&normalized, None);
                tracing::info!("{}: No definition exists for \"{}\"", self.id, normalized);
                None
            }
            FetchOutcome::Found { word: canonical, model } => {
                let markdown = (self.render)(&model);
                let canonical = normalize(&canonical);
                self.cache.set(&canonical, Some(model));
                // Let future lookups of the queried spelling short-circuit
                // to the canonical entry without a second network call
                if canonical != normalized {
                    self.cache.alias(&normalized, &canonical);
                }
                tracing::info!("{}: Providing hint for \"{}\"", self.id, normalized);
                Some(Hint { markdown })
            }
        }
    }

    fn clear(&mut self) {
        self.cache.clear();
        tracing::info!("{}: Cleared in-memory definition cache", self.id);
    }

    fn clear_disk(&mut self) {
        self.cache.clear_disk();
    }

    async fn shutdown(&mut self) {
        tracing::debug!("{}: Shutting down", self.id);
        self.cache.save();
        tracing::debug!("{}: Shutdown complete", self.id);
    }
}
