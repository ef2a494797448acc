//! Response models for api.dictionaryapi.dev
//!
//! The API returns an array of entries per word; the whole array is the
//! cached payload.

use serde::{Deserialize, Serialize};

/// A phonetic transcription and optional audio for a word
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Phonetic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// URL to an audio pronunciation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

/// A single sense of a word
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,

    /// Example sentence using the word in this sense
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub antonyms: Vec<String>,
}

/// Senses of a word for one part of speech
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,

    #[serde(default)]
    pub definitions: Vec<Definition>,
}

/// One complete dictionary entry for a word
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phonetics: Vec<Phonetic>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    #[serde(default)]
    pub meanings: Vec<Meaning>,
}
