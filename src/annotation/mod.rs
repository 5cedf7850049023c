/*! Linguistic annotation.

The analysis pipeline only talks to annotators through the [Annotate] trait:
sentence splitting, tagging and morphological analysis.

[RuleAnnotator] is the bundled German implementation. It relies on a small closed-class
lexicon, an optional user lexicon (the "model file") and casing/suffix heuristics.
!*/
mod lexicon;
mod morphology;
mod rules;
mod tagset;
mod token;

pub use lexicon::{Lexicon, LexiconEntry};
pub use morphology::{Analysis, Reading};
pub use rules::{RuleAnnotator, RuleAnnotatorBuilder};
pub use tagset::{Tag, COMMON_NOUN, SPACE};
pub use token::Token;

use crate::error::Error;

/// Annotation service.
pub trait Annotate {
    /// Split raw text into sentences.
    fn sentences(&self, text: &str) -> Vec<String>;

    /// Tag every token of a sentence, whitespace and punctuation included.
    fn tag(&self, sentence: &str) -> Result<Vec<Token>, Error>;

    /// Morphological analysis of a single word.
    fn morphology(&self, word: &str) -> Result<Analysis, Error>;
}
