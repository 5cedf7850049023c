//! Rule-based German annotator.
//!
//! Sentence and word boundaries come from [unicode_segmentation].
//! Words are tagged by looking them up in a [Lexicon], then by falling back on
//! casing and suffix heuristics:
//!
//! - capitalized words are common nouns (`NN`), all-caps words are proper nouns (`NE`),
//! - `-ig`, `-lich`, `-isch`… are predicative adjectives, and attributive when inflected,
//! - `ge-…-t` is a perfect participle, `-en` an infinitive, `-t`/`-st` a finite verb.
//!
//! This is deliberately coarse: annotations are never corrected afterwards.
use std::path::Path;

use log::{debug, info};
use unicode_segmentation::UnicodeSegmentation;

use super::lexicon::Lexicon;
use super::morphology::{self, Analysis, Reading};
use super::tagset::{Tag, SPACE};
use super::token::Token;
use super::Annotate;
use crate::error::Error;

const ADJECTIVE_SUFFIXES: &[&str] = &["lich", "isch", "haft", "sam", "bar", "los", "ig"];
const ADJECTIVE_ENDINGS: &[&str] = &["en", "er", "es", "em", "e"];

pub struct RuleAnnotator {
    lexicon: Lexicon,
}

impl RuleAnnotator {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    fn punct_tag(piece: &str) -> &'static str {
        match piece {
            "." | "!" | "?" | ";" | ":" | "…" => "$.",
            "," => "$,",
            _ => "$(",
        }
    }

    fn is_number(piece: &str) -> bool {
        piece.chars().any(|c| c.is_ascii_digit())
            && piece
                .chars()
                .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
    }

    /// Tag an open-class word from its shape.
    fn guess(word: &str) -> (&'static str, String) {
        let mut chars = word.chars();
        let first_upper = chars.next().map(char::is_uppercase).unwrap_or(false);

        if first_upper {
            if word.chars().count() > 1 && word.chars().all(|c| !c.is_lowercase()) {
                return ("NE", word.to_string());
            }
            return ("NN", word.to_string());
        }

        if ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            return ("ADJD", word.to_string());
        }
        if let Some(stem) = ADJECTIVE_ENDINGS
            .iter()
            .filter_map(|e| word.strip_suffix(e))
            .find(|stem| ADJECTIVE_SUFFIXES.iter().any(|s| stem.ends_with(s)))
        {
            return ("ADJA", stem.to_string());
        }

        let length = word.chars().count();
        if length >= 6 && word.starts_with("ge") && word.ends_with('t') {
            let stem = &word[2..word.len() - 1];
            return ("VVPP", format!("{stem}en"));
        }
        if word.ends_with("en") {
            return ("VVINF", word.to_string());
        }
        if length >= 4 {
            let stem = word
                .strip_suffix("st")
                .or_else(|| word.strip_suffix("et"))
                .or_else(|| word.strip_suffix('t'));
            if let Some(stem) = stem {
                return ("VVFIN", format!("{stem}en"));
            }
        }
        if let Some(stem) = ADJECTIVE_ENDINGS.iter().find_map(|e| word.strip_suffix(e)) {
            if stem.chars().count() >= 3 {
                return ("ADJA", stem.to_string());
            }
        }

        ("ADV", word.to_string())
    }

    /// Tag a piece of a sentence. The casing of the `initial` word of a sentence is ignored.
    fn tag_piece(&self, piece: &str, initial: bool) -> Token {
        if piece.chars().all(char::is_whitespace) {
            return Token::new(piece, Tag::new(SPACE), piece);
        }
        if piece.chars().all(|c| !c.is_alphanumeric()) {
            return Token::new(piece, Tag::new(Self::punct_tag(piece)), piece);
        }
        if Self::is_number(piece) {
            return Token::new(piece, Tag::new("CARD"), piece);
        }
        let entry = if initial {
            self.lexicon.get_folded(piece)
        } else {
            self.lexicon.get(piece)
        };
        match entry {
            Some(entry) => Token::new(piece, entry.tag.clone(), &entry.lemma),
            None => {
                let (tag, lemma) = Self::guess(piece);
                Token::new(piece, Tag::new(tag), &lemma)
            }
        }
    }
}

impl Default for RuleAnnotator {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}

impl Annotate for RuleAnnotator {
    fn sentences(&self, text: &str) -> Vec<String> {
        text.unicode_sentences()
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(String::from)
            .collect()
    }

    fn tag(&self, sentence: &str) -> Result<Vec<Token>, Error> {
        let mut initial = true;
        Ok(sentence
            .split_word_bounds()
            .map(|piece| {
                let token = self.tag_piece(piece, initial);
                if piece.chars().any(char::is_alphanumeric) {
                    initial = false;
                }
                token
            })
            .collect())
    }

    fn morphology(&self, word: &str) -> Result<Analysis, Error> {
        let mut readings = Vec::new();
        if let Some(entry) = self.lexicon.get_folded(word) {
            readings.push(Reading {
                lemma: entry.lemma.clone(),
                tag: Some(entry.tag.clone()),
                feature: None,
            });
        }
        readings.extend(morphology::shape_readings(word));
        Ok(Analysis::new(word, readings))
    }
}

/// [RuleAnnotator] builder.
///
/// Without a model, only the built-in lexicon is used.
#[derive(Default)]
pub struct RuleAnnotatorBuilder<'a> {
    model: Option<&'a Path>,
}

impl<'a> RuleAnnotatorBuilder<'a> {
    pub fn model<'b>(&'b mut self, path: &'a Path) -> &'b mut RuleAnnotatorBuilder<'a> {
        self.model = Some(path);
        self
    }

    /// Build the annotator.
    /// A model that can't be read or parsed is a [Error::Setup].
    pub fn build(&self) -> Result<RuleAnnotator, Error> {
        let mut lexicon = Lexicon::builtin();
        debug!("built-in lexicon: {} forms", lexicon.len());

        if let Some(path) = self.model {
            let model = Lexicon::from_path(path)
                .map_err(|e| Error::Setup(format!("could not load model {:?}: {}", path, e)))?;
            info!("loaded model {:?} ({} forms)", path, model.len());
            lexicon.extend(model);
        }

        Ok(RuleAnnotator::new(lexicon))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::Path;

    use super::*;

    fn codes(tokens: &[Token]) -> Vec<(&str, &str)> {
        tokens.iter().map(|t| (t.text(), t.tag().code())).collect()
    }

    #[test]
    fn sentences() {
        let annotator = RuleAnnotator::default();
        let text = "Liebe Eltern.\n\n    Vielen Dank und noch einen schönen Tag!\n\n    Grüße";
        assert_eq!(
            annotator.sentences(text),
            vec![
                "Liebe Eltern.",
                "Vielen Dank und noch einen schönen Tag!",
                "Grüße"
            ]
        );
    }

    #[test]
    fn sentences_empty() {
        let annotator = RuleAnnotator::default();
        assert!(annotator.sentences("   \n").is_empty());
    }

    #[test]
    fn tag_sentence() {
        let annotator = RuleAnnotator::default();
        let tokens = annotator.tag("Liebe Eltern.").unwrap();
        assert_eq!(
            codes(&tokens),
            vec![("Liebe", "NN"), (" ", "_SP"), ("Eltern", "NN"), (".", "$.")]
        );
    }

    #[test]
    fn tag_closed_class_and_heuristics() {
        let annotator = RuleAnnotator::default();
        let tokens = annotator
            .tag("Im Anhang finden Sie die Infos, 2020 gemacht.")
            .unwrap();
        let tokens: Vec<Token> = tokens
            .into_iter()
            .filter(|t| !t.tag().is_space())
            .collect();
        assert_eq!(
            codes(&tokens),
            vec![
                ("Im", "APPRART"),
                ("Anhang", "NN"),
                ("finden", "VVINF"),
                ("Sie", "PPER"),
                ("die", "ART"),
                ("Infos", "NN"),
                (",", "$,"),
                ("2020", "CARD"),
                ("gemacht", "VVPP"),
                (".", "$."),
            ]
        );
        assert_eq!(tokens[0].lemma(), "in");
        assert_eq!(tokens[8].lemma(), "machen");
    }

    #[test]
    fn capitalized_noun_inside_sentence() {
        let annotator = RuleAnnotator::default();
        let tokens = annotator.tag("Guten Morgen, bis morgen.").unwrap();
        let tokens: Vec<Token> = tokens
            .into_iter()
            .filter(|t| !t.tag().is_space())
            .collect();
        assert_eq!(codes(&tokens)[1], ("Morgen", "NN"));
        assert_eq!(codes(&tokens)[4], ("morgen", "ADV"));

        let tokens = annotator.tag("Morgen gehen wir.").unwrap();
        assert_eq!(tokens[0].tag().code(), "ADV");
    }

    #[test]
    fn adjectives() {
        assert_eq!(RuleAnnotator::guess("freundlich").0, "ADJD");
        assert_eq!(
            RuleAnnotator::guess("freundliche"),
            ("ADJA", "freundlich".to_string())
        );
        assert_eq!(RuleAnnotator::guess("macht"), ("VVFIN", "machen".to_string()));
    }

    #[test]
    fn morphology_uses_lexicon() {
        let annotator = RuleAnnotator::default();
        let analysis = annotator.morphology("dem").unwrap();
        assert_eq!(analysis.readings()[0].lemma, "der");
        assert_eq!(analysis.word(), "dem");
    }

    #[test]
    fn model_extends_lexicon() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"liebe": {{"tag": "ADJA", "lemma": "lieb"}}}}"#).unwrap();

        let annotator = RuleAnnotatorBuilder::default()
            .model(file.path())
            .build()
            .unwrap();
        let tokens = annotator.tag("Liebe Eltern.").unwrap();
        assert_eq!(tokens[0].tag().code(), "ADJA");
        assert_eq!(tokens[0].lemma(), "lieb");
    }

    #[test]
    fn missing_model_is_setup_failure() {
        let result = RuleAnnotatorBuilder::default()
            .model(Path::new("/nonexistent/model.json"))
            .build();
        assert!(matches!(result, Err(Error::Setup(_))));
    }
}
