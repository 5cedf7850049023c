//! STTS tag codes and their human-readable explanations.
use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Deserialize;

/// Tag given to whitespace tokens.
pub const SPACE: &str = "_SP";
/// Tag given to common nouns. Only these get a title-cased display form.
pub const COMMON_NOUN: &str = "NN";

lazy_static! {
    static ref EXPLANATIONS: HashMap<&'static str, &'static str> = [
        ("$(", "other sentence-internal punctuation mark"),
        ("$,", "comma"),
        ("$.", "sentence-final punctuation mark"),
        ("ADJA", "adjective, attributive"),
        ("ADJD", "adjective, adverbial or predicative"),
        ("ADV", "adverb"),
        ("APPO", "postposition"),
        ("APPR", "preposition; circumposition left"),
        ("APPRART", "preposition with article"),
        ("APZR", "circumposition right"),
        ("ART", "definite or indefinite article"),
        ("CARD", "cardinal number"),
        ("FM", "foreign language material"),
        ("ITJ", "interjection"),
        ("KOKOM", "comparative conjunction"),
        ("KON", "coordinate conjunction"),
        ("KOUI", "subordinate conjunction with \"zu\" and infinitive"),
        ("KOUS", "subordinate conjunction with sentence"),
        ("NE", "proper noun"),
        ("NN", "noun, singular or mass"),
        ("PDAT", "attributive demonstrative pronoun"),
        ("PDS", "substituting demonstrative pronoun"),
        ("PIAT", "attributive indefinite pronoun without determiner"),
        ("PIS", "substituting indefinite pronoun"),
        ("PPER", "non-reflexive personal pronoun"),
        ("PPOSAT", "attributive possessive pronoun"),
        ("PPOSS", "substituting possessive pronoun"),
        ("PRELAT", "attributive relative pronoun"),
        ("PRELS", "substituting relative pronoun"),
        ("PRF", "reflexive personal pronoun"),
        ("PROAV", "pronominal adverb"),
        ("PTKA", "particle with adjective or adverb"),
        ("PTKANT", "answer particle"),
        ("PTKNEG", "negative particle"),
        ("PTKVZ", "separable verbal particle"),
        ("PTKZU", "\"zu\" before infinitive"),
        ("PWAT", "attributive interrogative pronoun"),
        ("PWAV", "adverbial interrogative or relative pronoun"),
        ("PWS", "substituting interrogative pronoun"),
        ("TRUNC", "word remnant"),
        ("VAFIN", "finite verb, auxiliary"),
        ("VAIMP", "imperative, auxiliary"),
        ("VAINF", "infinitive, auxiliary"),
        ("VAPP", "perfect participle, auxiliary"),
        ("VMFIN", "finite verb, modal"),
        ("VMINF", "infinitive, modal"),
        ("VMPP", "perfect participle, modal"),
        ("VVFIN", "finite verb, full"),
        ("VVIMP", "imperative, full"),
        ("VVINF", "infinitive, full"),
        ("VVIZU", "infinitive with \"zu\", full"),
        ("VVPP", "perfect participle, full"),
        ("XY", "non-word containing non-letter"),
        (SPACE, "whitespace"),
    ]
    .into_iter()
    .collect();
}

/// Part-of-speech tag code (STTS).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Tag(String);

impl Tag {
    pub fn new(code: &str) -> Self {
        Self(code.to_string())
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    /// Human-readable name of the tag.
    /// Codes outside of the tag set are explained by themselves.
    pub fn explain(&self) -> &str {
        EXPLANATIONS.get(self.0.as_str()).copied().unwrap_or(self.0.as_str())
    }

    /// STTS punctuation tags all start with `$`.
    pub fn is_punct(&self) -> bool {
        self.0.starts_with('$')
    }

    pub fn is_space(&self) -> bool {
        self.0 == SPACE
    }

    pub fn is_common_noun(&self) -> bool {
        self.0 == COMMON_NOUN
    }
}
