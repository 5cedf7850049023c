//! Per-document annotation index.
use std::collections::HashMap;
use std::ops::AddAssign;

use crate::cache::{AnnotationRecord, WordCache};

/// Words seen in one sentence, by key, in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceEntry {
    sentence: String,
    topic: String,
    words: Vec<String>,
}

impl SentenceEntry {
    fn new(sentence: String, topic: String) -> Self {
        Self {
            sentence,
            topic,
            words: Vec::new(),
        }
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, key: &str) -> bool {
        self.words.iter().any(|w| w == key)
    }

    /// Add a key, unless the sentence already has it.
    /// Returns `true` if the key was added.
    pub(super) fn add_word(&mut self, key: String) -> bool {
        if self.contains(&key) {
            return false;
        }
        self.words.push(key);
        true
    }
}

/// Counters of an analysis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisStats {
    pub sentences: usize,
    pub duplicate_sentences: usize,
    pub tokens: usize,
    pub skipped_tokens: usize,
    /// keys added to the cache
    pub inserted: usize,
    /// keys found in the cache
    pub reused: usize,
}

impl AddAssign for AnalysisStats {
    fn add_assign(&mut self, rhs: Self) {
        self.sentences += rhs.sentences;
        self.duplicate_sentences += rhs.duplicate_sentences;
        self.tokens += rhs.tokens;
        self.skipped_tokens += rhs.skipped_tokens;
        self.inserted += rhs.inserted;
        self.reused += rhs.reused;
    }
}

/// Sentences of a document, in order, with the words found in each.
///
/// Records are not copied here: they are resolved against the [WordCache].
#[derive(Debug, Clone, Default)]
pub struct DocumentIndex {
    entries: Vec<SentenceEntry>,
    positions: HashMap<String, usize>,
    pub(super) stats: AnalysisStats,
}

impl DocumentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, sentence: &str) -> bool {
        self.positions.contains_key(sentence)
    }

    pub fn get(&self, sentence: &str) -> Option<&SentenceEntry> {
        self.positions.get(sentence).map(|&idx| &self.entries[idx])
    }

    /// Create the entry of a new sentence.
    pub(super) fn insert(&mut self, sentence: String, topic: &str) -> &mut SentenceEntry {
        let idx = self.entries.len();
        self.positions.insert(sentence.clone(), idx);
        self.entries
            .push(SentenceEntry::new(sentence, topic.to_string()));
        &mut self.entries[idx]
    }

    pub fn sentences(&self) -> impl Iterator<Item = &SentenceEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct word keys of the document, in order of first appearance.
    pub fn words(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.entries
            .iter()
            .flat_map(|entry| entry.words.iter())
            .map(String::as_str)
            .filter(|key| seen.insert(*key))
            .collect()
    }

    /// Records of a sentence's words.
    pub fn records<'c>(
        &self,
        sentence: &str,
        cache: &'c WordCache,
    ) -> Vec<(String, &'c AnnotationRecord)> {
        self.get(sentence)
            .map(|entry| {
                entry
                    .words
                    .iter()
                    .filter_map(|key| cache.get(key).map(|record| (key.clone(), record)))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn stats(&self) -> &AnalysisStats {
        &self.stats
    }
}
