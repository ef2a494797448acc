//! wordhint - dictionary hover hints with a persistent definition cache
//!
//! Given a word, wordhint returns a formatted dictionary entry,
//! consulting an on-disk cache before calling a remote definition API.
//! Confirmed misses are cached as negatives; spelling variants are
//! cached as aliases to the canonical entry; failed or cancelled
//! lookups are never cached so the next attempt retries.
//!
//! ## Module organization
//!
//! - `cache` - NDJSON record codec and the persistent definition cache
//! - `client` - remote lookup clients with tri-state outcomes
//! - `provider` - cache-first lookup orchestration and the registry
//! - `domain` - API response models
//! - `template` - markdown rendering of definition models
//! - `config` - `~/.wordhint/config.toml` handling

pub mod cache;
pub mod client;
pub mod config;
pub mod domain;
pub mod provider;
pub mod template;

pub use domain::*;
