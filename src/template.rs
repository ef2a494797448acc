//! Markdown rendering of definition models
//!
//! Pure functions from an API model to display markup. The cache and
//! provider layers treat the model as opaque; these are the display
//! collaborators wired in by the host.

use std::fmt::Write;

use crate::domain::{DictionaryEntry, WordsApiResponse};

/// Render a Free Dictionary entry array as a markdown hint
pub fn render_dictionary_entries(entries: &[DictionaryEntry]) -> String {
    let mut out = String::new();

    for entry in entries {
        let _ = write!(out, "**{}**", entry.word);
        if let Some(phonetic) = entry.phonetic.as_deref().or_else(|| {
            entry
                .phonetics
                .iter()
                .find_map(|p| p.text.as_deref())
        }) {
            let _ = write!(out, "  _{}_", phonetic);
        }
        out.push_str("\n\n");

        if let Some(origin) = &entry.origin {
            let _ = writeln!(out, "Origin: {}\n", origin);
        }

        for meaning in &entry.meanings {
            let _ = writeln!(out, "_{}_", meaning.part_of_speech);
            for (index, definition) in meaning.definitions.iter().enumerate() {
                let _ = writeln!(out, "{}. {}", index + 1, definition.definition);
                if let Some(example) = &definition.example {
                    let _ = writeln!(out, "   > {}", example);
                }
                if !definition.synonyms.is_empty() {
                    let _ = writeln!(out, "   Synonyms: {}", definition.synonyms.join(", "));
                }
            }
            out.push('\n');
        }
    }

    out.trim_end().to_string()
}

/// Render a Words API response as a markdown hint
pub fn render_words_api_response(response: &WordsApiResponse) -> String {
    let mut out = String::new();

    let _ = write!(out, "**{}**", response.word);
    if let Some(ipa) = response
        .pronunciation
        .as_ref()
        .and_then(|p| p.all.as_deref())
    {
        let _ = write!(out, "  _/{}/_", ipa);
    }
    out.push_str("\n\n");

    for (index, result) in response.results.iter().enumerate() {
        let Some(definition) = &result.definition else {
            continue;
        };
        match &result.part_of_speech {
            Some(pos) => {
                let _ = writeln!(out, "{}. _{}_ {}", index + 1, pos, definition);
            }
            None => {
                let _ = writeln!(out, "{}. {}", index + 1, definition);
            }
        }
        for example in &result.examples {
            let _ = writeln!(out, "   > {}", example);
        }
        if !result.synonyms.is_empty() {
            let _ = writeln!(out, "   Synonyms: {}", result.synonyms.join(", "));
        }
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Definition, Meaning, WordsApiResult};

    #[test]
    fn test_render_dictionary_entry() {
        let entries = vec![DictionaryEntry {
            word: "hello".to_string(),
            phonetic: Some("həˈləʊ".to_string()),
            meanings: vec![Meaning {
                part_of_speech: "exclamation".to_string(),
                definitions: vec![Definition {
                    definition: "used as a greeting".to_string(),
                    example: Some("hello there!".to_string()),
                    synonyms: vec!["hi".to_string()],
                    ..Default::default()
                }],
            }],
            ..Default::default()
        }];

        let markdown = render_dictionary_entries(&entries);
        assert!(markdown.contains("**hello**"));
        assert!(markdown.contains("_exclamation_"));
        assert!(markdown.contains("1. used as a greeting"));
        assert!(markdown.contains("> hello there!"));
        assert!(markdown.contains("Synonyms: hi"));
    }

    #[test]
    fn test_render_words_api_response() {
        let response = WordsApiResponse {
            word: "example".to_string(),
            results: vec![WordsApiResult {
                definition: Some("a representative form".to_string()),
                part_of_speech: Some("noun".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };

        let markdown = render_words_api_response(&response);
        assert!(markdown.contains("**example**"));
        assert!(markdown.contains("1. _noun_ a representative form"));
    }
}
