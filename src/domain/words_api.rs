//! Response models for wordsapiv1.p.mashape.com

use serde::{Deserialize, Serialize};

/// One result for a word: a sense with its part of speech and relations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordsApiResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,

    /// Broader categories of this word
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_of: Vec<String>,

    /// More specific instances of this word
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub has_types: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub derivation: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

/// Syllable breakdown of a word
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Syllables {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list: Vec<String>,
}

/// Pronunciation info, usually IPA
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pronunciation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all: Option<String>,
}

/// Top-level Words API response for a single word
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordsApiResponse {
    pub word: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<WordsApiResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syllables: Option<Syllables>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<Pronunciation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
      "word": "example",
      "results": [
        {
          "definition": "a representative form or pattern",
          "partOfSpeech": "noun",
          "synonyms": ["illustration", "instance"],
          "typeOf": ["representation"],
          "examples": ["I profited from his example"]
        }
      ],
      "syllables": { "count": 3, "list": ["ex", "am", "ple"] },
      "pronunciation": { "all": "ɪɡ'zæmpəl" },
      "frequency": 4.67
    }"#;

    #[test]
    fn test_decode_api_response() {
        let response: WordsApiResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.word, "example");
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].part_of_speech.as_deref(), Some("noun"));
        assert_eq!(response.syllables.unwrap().count, Some(3));
    }
}
