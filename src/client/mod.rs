//! Remote definition lookup clients
//!
//! A client performs exactly one network round trip per call and maps
//! the outcome onto three states: a definition was found, the source
//! confirmed the word does not exist, or the lookup could not be
//! completed. Only the first two may be cached; an indeterminate
//! outcome must be retried on the next lookup.

mod cancel;
mod free_dictionary;
mod words_api;

pub use cancel::CancelToken;
pub use free_dictionary::FreeDictionaryClient;
pub use words_api::WordsApiClient;

use async_trait::async_trait;

/// Outcome of a single remote definition lookup
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<M> {
    /// A definition was found. `word` is the canonical spelling as
    /// reported by the source, which may differ in case or inflection
    /// from the query.
    Found { word: String, model: M },

    /// The source confirmed the word does not exist (e.g. a 404).
    /// Safe to cache as a negative.
    Missing,

    /// The lookup failed or was cancelled. Must never be cached; the
    /// next lookup of the same word retries.
    Indeterminate,
}

/// Capability to ask a remote source for a word's definition
#[async_trait]
pub trait DefinitionClient<M>: Send + Sync {
    /// Fetch the definition of a word.
    ///
    /// Performs at most one network round trip; retry policy belongs to
    /// the caller. If `cancel` fires before or during the request, the
    /// request is aborted and the outcome is `Indeterminate`.
    /// Cancellation never surfaces as an error.
    async fn fetch(&self, word: &str, cancel: &CancelToken) -> FetchOutcome<M>;
}

/// Percent-encode a word for use as a URL path segment
pub(crate) fn encode_path_segment(word: &str) -> String {
    // RFC3986 unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
    let mut encoded = String::with_capacity(word.len());
    for &byte in word.as_bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char);
            }
            other => {
                encoded.push_str(&format!("%{:02X}", other));
            }
        }
    }
    encoded
}
