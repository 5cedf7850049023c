//! Morphological analysis of isolated words.
use std::fmt;

use super::tagset::Tag;

/// Separable verb particles, longest first.
pub(super) const SEPARABLE_PREFIXES: &[&str] = &[
    "zurück", "nach", "weg", "auf", "aus", "ein", "mit", "vor", "ab", "an", "zu",
];

/// Inflectional endings, longest first.
pub(super) const ENDINGS: &[&str] = &["en", "er", "es", "em", "e", "s", "n"];

/// One possible reading of a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub lemma: String,
    pub tag: Option<Tag>,
    pub feature: Option<String>,
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lemma)?;
        if let Some(tag) = &self.tag {
            write!(f, "/{}", tag.code())?;
        }
        if let Some(feature) = &self.feature {
            write!(f, " ({feature})")?;
        }
        Ok(())
    }
}

/// All readings found for a word. May be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    word: String,
    readings: Vec<Reading>,
}

impl Analysis {
    pub fn new(word: &str, readings: Vec<Reading>) -> Self {
        Self {
            word: word.to_string(),
            readings,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

/// Readings coming from the word shape alone: separable particle and inflectional ending.
/// Stems shorter than three characters are not considered.
pub(super) fn shape_readings(word: &str) -> Vec<Reading> {
    let word = word.to_lowercase();
    let mut readings = Vec::new();

    if let Some((prefix, rest)) = SEPARABLE_PREFIXES
        .iter()
        .find_map(|p| word.strip_prefix(p).map(|rest| (p, rest)))
    {
        if rest.chars().count() >= 4 {
            readings.push(Reading {
                lemma: word.clone(),
                tag: None,
                feature: Some(format!("separable prefix '{prefix}' + '{rest}'")),
            });
        }
    }

    if let Some((ending, stem)) = ENDINGS
        .iter()
        .find_map(|e| word.strip_suffix(e).map(|stem| (e, stem)))
    {
        if stem.chars().count() >= 3 {
            readings.push(Reading {
                lemma: stem.to_string(),
                tag: None,
                feature: Some(format!("inflected (-{ending})")),
            });
        }
    }

    readings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separable_and_inflected() {
        let readings = shape_readings("Anrufen");
        assert_eq!(readings.len(), 2);
        assert_eq!(
            readings[0].feature.as_deref(),
            Some("separable prefix 'an' + 'rufen'")
        );
        assert_eq!(readings[1].lemma, "anruf");
    }

    #[test]
    fn short_words_have_no_shape_reading() {
        assert!(shape_readings("im").is_empty());
        assert!(shape_readings("Tag").is_empty());
    }

    #[test]
    fn display() {
        let r = Reading {
            lemma: "der".to_string(),
            tag: Some(Tag::new("ART")),
            feature: None,
        };
        assert_eq!(r.to_string(), "der/ART");
    }
}
