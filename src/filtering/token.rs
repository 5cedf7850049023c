//! token-level filtering
use super::Filter;
use crate::annotation::Token;

/// Skips punctuation and whitespace tokens.
///
/// Skipped tokens never get a cache entry, and hence never get a document.
#[derive(Debug, Default)]
pub struct Separators;

impl Filter<&Token> for Separators {
    fn detect(&self, token: &Token) -> bool {
        let tag = token.tag();
        !(tag.is_punct() || tag.is_space())
    }
}
