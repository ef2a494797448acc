//! Definition cache: record codec and persistent store

mod record;
mod store;

pub use record::{CacheValue, RecordError, decode_line, encode_line};
pub use store::{CacheLookup, DefinitionCache, normalize};
