//! Client for the Free Dictionary API (api.dictionaryapi.dev)

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::DictionaryEntry;

use super::{CancelToken, DefinitionClient, FetchOutcome, encode_path_segment};

const FREE_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Free Dictionary API client. The payload is the full entry array the
/// API returns per word.
#[derive(Debug, Clone)]
pub struct FreeDictionaryClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for FreeDictionaryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FreeDictionaryClient {
    pub fn new() -> Self {
        Self::with_base_url(FREE_DICTIONARY_URL)
    }

    /// Create a client against a custom endpoint (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn request(&self, word: &str) -> FetchOutcome<Vec<DictionaryEntry>> {
        let url = format!("{}/{}", self.base_url, encode_path_segment(word));

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("free-dictionary: Error looking up \"{}\": {}", word, err);
                return FetchOutcome::Indeterminate;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::info!(
                "free-dictionary: HTTP {} looking up \"{}\"",
                status.as_u16(),
                word
            );
            // A 404 means the word definitely doesn't exist in this API
            return if status == reqwest::StatusCode::NOT_FOUND {
                FetchOutcome::Missing
            } else {
                FetchOutcome::Indeterminate
            };
        }

        let entries: Vec<DictionaryEntry> = match response.json().await {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(
                    "free-dictionary: Malformed response for \"{}\": {}",
                    word,
                    err
                );
                return FetchOutcome::Indeterminate;
            }
        };

        // The API answers an empty array for some unknown words instead
        // of a 404; treat it as a confirmed miss
        let Some(canonical) = entries.first().map(|entry| entry.word.clone()) else {
            return FetchOutcome::Missing;
        };

        FetchOutcome::Found {
            word: canonical,
            model: entries,
        }
    }
}

#[async_trait]
impl DefinitionClient<Vec<DictionaryEntry>> for FreeDictionaryClient {
    async fn fetch(&self, word: &str, cancel: &CancelToken) -> FetchOutcome<Vec<DictionaryEntry>> {
        if cancel.is_cancelled() {
            return FetchOutcome::Indeterminate;
        }

        tracing::debug!("free-dictionary: Fetching definition for \"{}\"", word);

        tokio::select! {
            outcome = self.request(word) => outcome,
            _ = cancel.cancelled() => {
                tracing::debug!("free-dictionary: Lookup of \"{}\" cancelled", word);
                FetchOutcome::Indeterminate
            }
        }
    }
}
