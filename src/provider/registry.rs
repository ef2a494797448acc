//! Process-wide provider registry
//!
//! Owns the map of provider id to provider, built lazily from config
//! on first use. The host drives it: `hint` for lookups, `clear`/
//! `clear_disk` for the cache-clear commands, and a guaranteed-once
//! `shutdown` during teardown to flush pending cache writes.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use anyhow::{Context, Result, bail};

use crate::cache::DefinitionCache;
use crate::client::{CancelToken, FreeDictionaryClient, WordsApiClient};
use crate::config::Config;
use crate::domain::DictionaryEntry;
use crate::template;

use super::{Hint, HintProvider, Provider};

/// Known provider ids
pub const FREE_DICTIONARY: &str = "free-dictionary";
pub const WORDS_API: &str = "words-api";

/// Registry of definition providers keyed by id
pub struct ProviderRegistry {
    config: Config,
    providers: HashMap<String, Box<dyn HintProvider>>,
}

impl ProviderRegistry {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            providers: HashMap::new(),
        }
    }

    /// Get a provider, constructing it from config on first use
    pub fn get_or_build(&mut self, id: &str) -> Result<&mut Box<dyn HintProvider>> {
        match self.providers.entry(id.to_string()) {
            Entry::Occupied(occupied) => Ok(occupied.into_mut()),
            Entry::Vacant(vacant) => {
                let provider = build_provider(&self.config, id)
                    .with_context(|| format!("Failed to build provider '{id}'"))?;
                Ok(vacant.insert(provider))
            }
        }
    }

    /// Resolve a word through the named provider
    pub async fn hint(&mut self, id: &str, word: &str, cancel: &CancelToken) -> Result<Option<Hint>> {
        let provider = self.get_or_build(id)?;
        Ok(provider.hint(word, cancel).await)
    }

    /// Clear the named provider's in-memory cache, and optionally its
    /// backing file
    pub fn clear(&mut self, id: &str, disk: bool) -> Result<()> {
        let provider = self.get_or_build(id)?;
        provider.clear();
        if disk {
            provider.clear_disk();
        }
        Ok(())
    }

    /// Save every provider's cache. Drains the registry so each
    /// provider is shut down exactly once.
    pub async fn shutdown(&mut self) {
        for (id, mut provider) in self.providers.drain() {
            tracing::debug!("Shutting down provider '{}'", id);
            provider.shutdown().await;
        }
    }
}

fn build_provider(config: &Config, id: &str) -> Result<Box<dyn HintProvider>> {
    match id {
        FREE_DICTIONARY => {
            let cache = DefinitionCache::load(config.cache_path(id));
            let provider = Provider::new(
                id,
                FreeDictionaryClient::new(),
                cache,
                Box::new(|entries: &Vec<DictionaryEntry>| {
                    template::render_dictionary_entries(entries)
                }),
            );
            Ok(Box::new(provider))
        }
        WORDS_API => {
            let Some(api_key) = &config.words_api_key else {
                bail!("provider 'words-api' requires words_api_key in the config file");
            };
            let cache = DefinitionCache::load(config.cache_path(id));
            let provider = Provider::new(
                id,
                WordsApiClient::new(api_key.clone()),
                cache,
                Box::new(template::render_words_api_response),
            );
            Ok(Box::new(provider))
        }
        other => bail!("unknown provider '{other}'"),
    }
}
