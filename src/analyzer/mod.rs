/*! Topic analysis.

Turns the text of a document into word cache updates and a [DocumentIndex].

For each sentence (duplicate sentences of a document are skipped), every token that is
not punctuation or whitespace is normalized into a key (see [crate::cache::normalize]), then:

| key in cache | decision           | effect                                   |
|--------------|--------------------|------------------------------------------|
| no           | [Decision::Annotate] | a record is built from the token and cached |
| yes          | [Decision::Reuse]    | the cached record is used as is          |

In both cases the key is added to the sentence entry, once.

The first annotation of a word wins for the lifetime of the cache,
even if the word is tagged differently in a later context.
!*/
mod index;

pub use index::{AnalysisStats, DocumentIndex, SentenceEntry};

use log::{debug, info};

use crate::annotation::{Annotate, Token};
use crate::cache::{normalize, AnnotationRecord, WordCache};
use crate::error::Error;
use crate::filtering::{Filter, Separators};

/// What to do with a token's key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Unknown word: annotate and cache it.
    Annotate,
    /// Known word: use the cached record.
    Reuse,
}

impl Decision {
    /// The cache has precedence over any new annotation.
    pub fn for_key(cache: &WordCache, key: &str) -> Self {
        if cache.contains(key) {
            Decision::Reuse
        } else {
            Decision::Annotate
        }
    }
}

pub struct TopicAnalyzer<'a, A: Annotate + ?Sized> {
    annotator: &'a A,
    filter: Separators,
}

impl<'a, A: Annotate + ?Sized> TopicAnalyzer<'a, A> {
    pub fn new(annotator: &'a A) -> Self {
        Self {
            annotator,
            filter: Separators::default(),
        }
    }

    /// Analyze the text of a document belonging to `topic`, updating `cache`.
    pub fn analyze(
        &self,
        topic: &str,
        text: &str,
        cache: &mut WordCache,
    ) -> Result<DocumentIndex, Error> {
        let mut index = DocumentIndex::new();
        let mut stats = AnalysisStats::default();

        for sentence in self.annotator.sentences(text) {
            if index.contains(&sentence) {
                debug!("Sentence[{}] already analyzed", sentence);
                stats.duplicate_sentences += 1;
                continue;
            }

            info!("Sentence[{}]", sentence);
            stats.sentences += 1;
            let tokens = self.annotator.tag(&sentence)?;
            let entry = index.insert(sentence, topic);

            for token in tokens.iter() {
                stats.tokens += 1;
                if !self.filter.detect(token) {
                    stats.skipped_tokens += 1;
                    continue;
                }

                let key = normalize(token.text());
                match Self::apply(cache, &key, token) {
                    Decision::Annotate => stats.inserted += 1,
                    Decision::Reuse => stats.reused += 1,
                }
                entry.add_word(key);
            }
        }

        index.stats = stats;
        Ok(index)
    }

    /// Apply the decision for `key` to the cache.
    fn apply(cache: &mut WordCache, key: &str, token: &Token) -> Decision {
        let decision = Decision::for_key(cache, key);
        match decision {
            Decision::Annotate => {
                cache.put(key.to_string(), AnnotationRecord::from_token(token));
                debug!("[ + ] Word '{}' added to global cache", key);
            }
            Decision::Reuse => {
                debug!("[ = ] Word '{}' got from cache", key);
            }
        }
        decision
    }
}
