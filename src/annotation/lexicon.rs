//! Word lexicon.
//!
//! A lexicon maps a word form to its tag and lemma.
//! The built-in one covers German closed-class words (articles, pronouns, prepositions…),
//! and can be extended by a JSON file of the following form:
//!
//! ```json
//! {
//!     "Eltern": { "tag": "NN", "lemma": "Eltern" },
//!     "liebe": { "tag": "ADJA", "lemma": "lieb" }
//! }
//! ```
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use super::tagset::Tag;
use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LexiconEntry {
    pub tag: Tag,
    pub lemma: String,
}

impl LexiconEntry {
    fn new(tag: &str, lemma: &str) -> Self {
        Self {
            tag: Tag::new(tag),
            lemma: lemma.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, LexiconEntry>,
}

/// (tag, lemma, forms)
const CLOSED_CLASS: &[(&str, &str, &[&str])] = &[
    ("ART", "der", &["der", "die", "das", "den", "dem", "des"]),
    ("ART", "ein", &["ein", "eine", "einen", "einem", "einer", "eines"]),
    ("PPER", "ich", &["ich", "mich", "mir"]),
    ("PPER", "du", &["du", "dich", "dir"]),
    ("PPER", "er", &["er", "ihn", "ihm"]),
    ("PPER", "es", &["es"]),
    ("PPER", "wir", &["wir", "uns"]),
    ("PPER", "ihr", &["euch"]),
    ("PPER", "sie", &["sie", "ihnen"]),
    ("PPER", "Sie", &["Sie", "Ihnen"]),
    ("PPOSAT", "mein", &["mein", "meine", "meinen", "meinem", "meiner"]),
    ("PPOSAT", "dein", &["dein", "deine", "deinen", "deinem", "deiner"]),
    ("PPOSAT", "sein", &["seine", "seinen", "seinem", "seiner"]),
    ("PPOSAT", "ihr", &["ihr", "ihre", "ihren", "ihrem", "ihrer"]),
    ("PPOSAT", "Ihr", &["Ihr", "Ihre", "Ihren", "Ihrem", "Ihrer"]),
    ("PPOSAT", "unser", &["unser", "unsere", "unseren", "unserem"]),
    ("PDAT", "dieser", &["dies", "diese", "dieser", "dieses", "diesen", "diesem"]),
    ("PIAT", "kein", &["kein", "keine", "keinen", "keinem", "keiner"]),
    ("PIS", "alle", &["alle", "alles", "allen"]),
    ("PIS", "man", &["man"]),
    ("PWS", "was", &["was"]),
    ("PWS", "wer", &["wer", "wen", "wem"]),
    ("PWAV", "wie", &["wie"]),
    ("PWAV", "wo", &["wo"]),
    ("PWAV", "warum", &["warum"]),
    ("PWAV", "wann", &["wann"]),
    (
        "APPR",
        "",
        &[
            "in", "an", "auf", "aus", "bei", "mit", "nach", "von", "zu", "für", "über", "unter",
            "vor", "hinter", "neben", "zwischen", "durch", "gegen", "ohne", "um", "seit", "bis",
        ],
    ),
    ("APPRART", "in", &["im", "ins"]),
    ("APPRART", "an", &["am", "ans"]),
    ("APPRART", "zu", &["zum", "zur"]),
    ("APPRART", "bei", &["beim"]),
    ("APPRART", "von", &["vom"]),
    ("KON", "", &["und", "oder", "aber", "sondern", "denn"]),
    (
        "KOUS",
        "",
        &["dass", "weil", "wenn", "ob", "obwohl", "damit", "während"],
    ),
    ("KOKOM", "", &["als"]),
    ("PTKNEG", "", &["nicht"]),
    ("PTKANT", "", &["ja", "nein"]),
    ("ITJ", "", &["hallo", "tschüss"]),
    (
        "ADV",
        "",
        &[
            "noch", "auch", "schon", "sehr", "immer", "hier", "dort", "heute", "morgen",
            "gestern", "jetzt", "dann", "bald", "gern", "gerne", "oft", "nur", "wieder",
        ],
    ),
    ("VAFIN", "sein", &["bin", "bist", "ist", "sind", "seid", "war", "waren"]),
    ("VAFIN", "haben", &["habe", "hast", "hat", "habt", "hatte", "hatten"]),
    ("VAFIN", "werden", &["werde", "wirst", "wird", "werdet"]),
    ("VAINF", "haben", &["haben"]),
    ("VAINF", "werden", &["werden"]),
    ("VMFIN", "können", &["kann", "kannst", "können", "könnt"]),
    ("VMFIN", "müssen", &["muss", "musst", "müssen", "müsst"]),
    ("VMFIN", "wollen", &["will", "willst", "wollen", "wollt"]),
    ("VMFIN", "dürfen", &["darf", "darfst", "dürfen", "dürft"]),
    ("VMFIN", "sollen", &["soll", "sollst", "sollen", "sollt"]),
    ("VMFIN", "mögen", &["möchte", "möchtest", "möchten"]),
];

impl Lexicon {
    /// German closed-class words.
    ///
    /// An empty lemma in the table means that every form is its own lemma.
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();
        for (tag, lemma, forms) in CLOSED_CLASS {
            for form in forms.iter() {
                let lemma = if lemma.is_empty() { form } else { lemma };
                entries
                    .entry(form.to_string())
                    .or_insert_with(|| LexiconEntry::new(tag, lemma));
            }
        }
        Self { entries }
    }

    /// Load a lexicon from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        let entries: HashMap<String, LexiconEntry> = serde_json::from_reader(reader)?;
        Ok(Self { entries })
    }

    /// Add entries of `other`, overriding ours on conflict.
    pub fn extend(&mut self, other: Lexicon) {
        self.entries.extend(other.entries);
    }

    /// Look a word up with its exact casing.
    ///
    /// A capitalized word inside a sentence is a noun or a name, not the closed-class
    /// word it would be in lower case ("Morgen" vs "morgen").
    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(word)
    }

    /// Look a word up with its exact casing then lower-cased.
    /// For words whose casing says nothing, like the first word of a sentence.
    pub fn get_folded(&self, word: &str) -> Option<&LexiconEntry> {
        self.get(word)
            .or_else(|| self.entries.get(&word.to_lowercase()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn builtin_lookup() {
        let lex = Lexicon::builtin();
        let entry = lex.get_folded("Die").unwrap();
        assert_eq!(entry.tag.code(), "ART");
        assert_eq!(entry.lemma, "der");

        let entry = lex.get("und").unwrap();
        assert_eq!(entry.lemma, "und");
        assert!(lex.get_folded("Eltern").is_none());
    }

    #[test]
    fn capitalized_is_not_folded() {
        let lex = Lexicon::builtin();
        assert!(lex.get("Morgen").is_none());
        assert_eq!(lex.get_folded("Morgen").unwrap().tag.code(), "ADV");
        assert_eq!(lex.get("Sie").unwrap().tag.code(), "PPER");
    }

    #[test]
    fn exact_casing_first() {
        let mut lex = Lexicon::builtin();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"Sie": {{"tag": "PPER", "lemma": "Sie"}}, "liebe": {{"tag": "ADJA", "lemma": "lieb"}}}}"#
        )
        .unwrap();

        lex.extend(Lexicon::from_path(file.path()).unwrap());
        assert_eq!(lex.get("Sie").unwrap().lemma, "Sie");
        assert_eq!(lex.get("sie").unwrap().lemma, "sie");
        assert_eq!(lex.get_folded("Liebe").unwrap().tag.code(), "ADJA");
    }

    #[test]
    fn malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(Lexicon::from_path(file.path()).is_err());
    }
}
