//! Integration tests for cache-first lookup orchestration

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tempfile::TempDir;

use wordhint::cache::{CacheLookup, DefinitionCache};
use wordhint::client::{CancelToken, DefinitionClient, FetchOutcome};
use wordhint::provider::{HintProvider, Provider, RenderFn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TestModel {
    word: String,
    gloss: String,
}

fn model(word: &str, gloss: &str) -> TestModel {
    TestModel {
        word: word.to_string(),
        gloss: gloss.to_string(),
    }
}

/// Scripted remote client that counts its calls
struct MockClient {
    outcome: FetchOutcome<TestModel>,
    calls: Arc<AtomicUsize>,
}

impl MockClient {
    fn new(outcome: FetchOutcome<TestModel>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                outcome,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl DefinitionClient<TestModel> for MockClient {
    async fn fetch(&self, _word: &str, cancel: &CancelToken) -> FetchOutcome<TestModel> {
        if cancel.is_cancelled() {
            return FetchOutcome::Indeterminate;
        }
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

fn render() -> RenderFn<TestModel> {
    Box::new(|m: &TestModel| format!("**{}**: {}", m.word, m.gloss))
}

fn provider(
    outcome: FetchOutcome<TestModel>,
    cache: DefinitionCache<TestModel>,
) -> (Provider<TestModel, MockClient>, Arc<AtomicUsize>) {
    let (client, calls) = MockClient::new(outcome);
    (Provider::new("test", client, cache, render()), calls)
}

#[tokio::test]
async fn test_found_result_is_cached_and_rendered() {
    // Canonical spelling differs only in case; no alias is needed and
    // no self-alias must be created
    let found = FetchOutcome::Found {
        word: "Run".to_string(),
        model: model("run", "to move fast"),
    };
    let (mut provider, calls) = provider(found, DefinitionCache::new());
    let cancel = CancelToken::new();

    let hint = provider.hint("run", &cancel).await.unwrap();
    assert_eq!(hint.markdown, "**run**: to move fast");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(provider.cache().len(), 1);

    // Second lookup is served from the cache, case-folded
    let hint = provider.hint("RUN", &cancel).await.unwrap();
    assert_eq!(hint.markdown, "**run**: to move fast");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_canonical_word_gets_entry_and_query_gets_alias() {
    let found = FetchOutcome::Found {
        word: "Cat".to_string(),
        model: model("cat", "a small felid"),
    };
    let (mut provider, calls) = provider(found, DefinitionCache::new());
    let cancel = CancelToken::new();

    assert!(provider.hint("cats", &cancel).await.is_some());
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // Both the canonical spelling and the queried inflection now hit
    // the cache without another fetch
    assert!(matches!(provider.cache().get("cat"), CacheLookup::Entry(_)));
    assert!(matches!(provider.cache().get("cats"), CacheLookup::Entry(_)));
    assert!(provider.hint("CATS", &cancel).await.is_some());
    assert!(provider.hint("cat", &cancel).await.is_some());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_cached_negative_short_circuits_the_client() {
    let mut cache = DefinitionCache::new();
    cache.set("xyzzy", None);

    let (mut provider, calls) = provider(FetchOutcome::Missing, cache);
    let cancel = CancelToken::new();

    assert!(provider.hint("xyzzy", &cancel).await.is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_missing_result_is_cached_as_negative() {
    let (mut provider, calls) = provider(FetchOutcome::Missing, DefinitionCache::new());
    let cancel = CancelToken::new();

    assert!(provider.hint("xyzzy", &cancel).await.is_none());
    assert_eq!(provider.cache().get("xyzzy"), CacheLookup::Negative);

    // Confirmed misses are not re-queried
    assert!(provider.hint("xyzzy", &cancel).await.is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_indeterminate_is_never_cached() {
    let (mut provider, calls) = provider(FetchOutcome::Indeterminate, DefinitionCache::new());
    let cancel = CancelToken::new();

    assert!(provider.hint("foo", &cancel).await.is_none());
    assert_eq!(provider.cache().get("foo"), CacheLookup::Unknown);
    assert!(!provider.cache().is_dirty());

    // The next lookup retries the client
    assert!(provider.hint("foo", &cancel).await.is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_pre_cancelled_lookup_makes_no_request() {
    let found = FetchOutcome::Found {
        word: "run".to_string(),
        model: model("run", "to move fast"),
    };
    let (mut provider, calls) = provider(found, DefinitionCache::new());

    let cancel = CancelToken::new();
    cancel.cancel();

    assert!(provider.hint("run", &cancel).await.is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(provider.cache().get("run"), CacheLookup::Unknown);
}

#[tokio::test]
async fn test_shutdown_flushes_the_cache_to_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("test.cache.ndjson");

    let found = FetchOutcome::Found {
        word: "run".to_string(),
        model: model("run", "to move fast"),
    };
    let (mut provider, _calls) = provider(found, DefinitionCache::with_path(&path));
    let cancel = CancelToken::new();

    assert!(provider.hint("run", &cancel).await.is_some());
    assert!(!path.exists());

    provider.shutdown().await;
    assert!(path.exists());

    let reloaded: DefinitionCache<TestModel> = DefinitionCache::load(&path);
    assert!(matches!(reloaded.get("run"), CacheLookup::Entry(_)));
}

#[tokio::test]
async fn test_clear_keeps_disk_and_clear_disk_removes_it() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("test.cache.ndjson");

    let found = FetchOutcome::Found {
        word: "run".to_string(),
        model: model("run", "to move fast"),
    };
    let (mut provider, _calls) = provider(found, DefinitionCache::with_path(&path));
    let cancel = CancelToken::new();

    assert!(provider.hint("run", &cancel).await.is_some());
    provider.shutdown().await;
    assert!(path.exists());

    provider.clear();
    assert!(path.exists());

    provider.clear_disk();
    assert!(!path.exists());
}
