//! Client for the Words API (wordsapiv1.p.mashape.com)

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::WordsApiResponse;

use super::{CancelToken, DefinitionClient, FetchOutcome, encode_path_segment};

const WORDS_API_URL: &str = "https://wordsapiv1.p.mashape.com/words";

/// Header carrying the Words API subscription key
const API_KEY_HEADER: &str = "X-Mashape-Key";

/// Words API client. Requires a subscription key.
#[derive(Debug, Clone)]
pub struct WordsApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WordsApiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(WORDS_API_URL, api_key)
    }

    /// Create a client against a custom endpoint (used by tests)
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    async fn request(&self, word: &str) -> FetchOutcome<WordsApiResponse> {
        let url = format!("{}/{}", self.base_url, encode_path_segment(word));

        let response = match self
            .client
            .get(&url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("words-api: Error looking up \"{}\": {}", word, err);
                return FetchOutcome::Indeterminate;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::info!("words-api: HTTP {} looking up \"{}\"", status.as_u16(), word);
            return if status == reqwest::StatusCode::NOT_FOUND {
                FetchOutcome::Missing
            } else {
                FetchOutcome::Indeterminate
            };
        }

        match response.json::<WordsApiResponse>().await {
            Ok(model) => FetchOutcome::Found {
                word: model.word.clone(),
                model,
            },
            Err(err) => {
                tracing::warn!("words-api: Malformed response for \"{}\": {}", word, err);
                FetchOutcome::Indeterminate
            }
        }
    }
}

#[async_trait]
impl DefinitionClient<WordsApiResponse> for WordsApiClient {
    async fn fetch(&self, word: &str, cancel: &CancelToken) -> FetchOutcome<WordsApiResponse> {
        if cancel.is_cancelled() {
            return FetchOutcome::Indeterminate;
        }

        tracing::debug!("words-api: Fetching definition for \"{}\"", word);

        tokio::select! {
            outcome = self.request(word) => outcome,
            _ = cancel.cancelled() => {
                tracing::debug!("words-api: Lookup of \"{}\" cancelled", word);
                FetchOutcome::Indeterminate
            }
        }
    }
}
