//! API response models for the supported dictionary sources

mod free_dictionary;
mod words_api;

pub use free_dictionary::{Definition, DictionaryEntry, Meaning, Phonetic};
pub use words_api::{Pronunciation, Syllables, WordsApiResponse, WordsApiResult};
