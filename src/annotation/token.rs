//! Tagged token.
use super::tagset::Tag;

/// A token as returned by an annotator.
///
/// `prefix` and `suffix` follow the usual tagger convention:
/// the first character and the last three characters of the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    tag: Tag,
    lemma: String,
    prefix: String,
    suffix: String,
}

impl Token {
    /// Create a token, deriving prefix and suffix from `text`.
    pub fn new(text: &str, tag: Tag, lemma: &str) -> Self {
        Self {
            text: text.to_string(),
            tag,
            lemma: lemma.to_string(),
            prefix: Self::prefix_of(text),
            suffix: Self::suffix_of(text),
        }
    }

    fn prefix_of(text: &str) -> String {
        text.chars().take(1).collect()
    }

    fn suffix_of(text: &str) -> String {
        let count = text.chars().count();
        text.chars().skip(count.saturating_sub(3)).collect()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Human-readable explanation of the tag.
    pub fn explain(&self) -> &str {
        self.tag.explain()
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}
