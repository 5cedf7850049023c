//! Annotation record.
use serde::{Deserialize, Serialize};

use crate::annotation::Token;

/// Everything known about one distinct word.
///
/// Field names are kept as they are on disk (`lema`, `pos`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    /// Display form
    pub word: String,
    /// Human-readable part of speech
    pub pos: String,
    #[serde(rename = "lema")]
    pub lemma: String,
    pub prefix: String,
    pub suffix: String,
}

impl AnnotationRecord {
    /// Build a record from a tagged token.
    ///
    /// The display form is title-cased for common nouns and lower-cased otherwise.
    pub fn from_token(token: &Token) -> Self {
        let word = if token.tag().is_common_noun() {
            title_case(token.text())
        } else {
            token.text().to_lowercase()
        };

        Self {
            word,
            pos: token.explain().to_string(),
            lemma: token.lemma().to_string(),
            prefix: token.prefix().to_string(),
            suffix: token.suffix().to_string(),
        }
    }
}

/// Upper-case the first letter of every word, lower-case the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
