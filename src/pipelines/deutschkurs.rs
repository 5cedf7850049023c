//! Vocabulary generation pipeline
//!
//! # Processing
//! 1. The annotator is built. A model that can't be loaded aborts the run before anything is read.
//! 1. The working directory layout is created if needed (see [Layout]).
//! 1. The words cache and the personal dictionary are loaded. Both fall back to empty ones.
//! 1. Each document of each topic is analyzed, in order, updating the cache.
//! 1. The cache is saved.
//! 1. One document per cached word is written.
//! 1. Words without a definition in the personal dictionary are listed.
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::analyzer::{AnalysisStats, TopicAnalyzer};
use crate::annotation::{Annotate, RuleAnnotator, RuleAnnotatorBuilder};
use crate::cache::WordCache;
use crate::corpus::Corpus;
use crate::dictionary::PersonalDictionary;
use crate::error::Error;
use crate::layout::Layout;
use crate::pipelines::pipeline::Pipeline;
use crate::writing::DocWriter;

/// What a run did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub topics: usize,
    pub documents: usize,
    pub stats: AnalysisStats,
    pub cached_before: usize,
    pub cached_after: usize,
    pub written: usize,
    pub missing_definitions: usize,
}

pub struct Deutschkurs {
    layout: Layout,
    model: Option<PathBuf>,
}

impl Deutschkurs {
    pub fn new(root: &Path, model: Option<PathBuf>) -> Self {
        Self {
            layout: Layout::new(root),
            model,
        }
    }

    fn annotator(&self) -> Result<RuleAnnotator, Error> {
        let mut builder = RuleAnnotatorBuilder::default();
        if let Some(model) = &self.model {
            builder.model(model);
        }
        builder.build()
    }

    /// Analyze every document of the corpus.
    fn analyze_corpus<A: Annotate + ?Sized>(
        &self,
        annotator: &A,
        cache: &mut WordCache,
        dictionary: &mut PersonalDictionary,
        report: &mut RunReport,
    ) -> Result<(), Error> {
        let analyzer = TopicAnalyzer::new(annotator);
        let corpus = Corpus::new(&self.layout.userdata_dir());

        for topic in corpus.topics()? {
            report.topics += 1;
            for path in topic.documents()? {
                let filename = path
                    .file_name()
                    .map(|f| f.to_string_lossy().to_string())
                    .unwrap_or_default();
                info!("Topic[{}] - File[{}]", topic.name(), filename);

                let text = match std::fs::read_to_string(&path) {
                    Ok(text) => text,
                    Err(e) => {
                        warn!("could not read {:?}: {}", path, e);
                        continue;
                    }
                };

                let index = analyzer.analyze(topic.name(), &text, cache)?;
                for key in index.words() {
                    dictionary.lookup(key);
                }
                debug!("{:?}: {:?}", path, index.stats());
                report.stats += *index.stats();
                report.documents += 1;
            }
        }
        Ok(())
    }

    /// Regenerate documents from the saved cache, without analyzing anything.
    /// Only the documents directory is created.
    pub fn generate(&self) -> Result<usize, Error> {
        let annotator = self.annotator()?;
        let docs = self.layout.docs_dir();
        std::fs::create_dir_all(&docs)?;
        let cache = WordCache::load(&self.layout.cache_file());
        DocWriter::new(&docs, &annotator).generate(&cache)
    }
}

impl Pipeline<RunReport> for Deutschkurs {
    fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn run(&self) -> Result<RunReport, Error> {
        info!("Starting Deutschkurs {}", Self::version());
        let annotator = self.annotator()?;
        self.layout.ensure()?;

        let mut cache = WordCache::load(&self.layout.cache_file());
        let mut dictionary = PersonalDictionary::load(&self.layout.dictionary_file());

        let mut report = RunReport {
            cached_before: cache.len(),
            ..Default::default()
        };

        self.analyze_corpus(&annotator, &mut cache, &mut dictionary, &mut report)?;

        cache.save(&self.layout.cache_file())?;
        report.cached_after = cache.len();
        info!(
            "words cache: {} words ({} new)",
            report.cached_after, report.stats.inserted
        );

        report.written = DocWriter::new(&self.layout.docs_dir(), &annotator).generate(&cache)?;

        dictionary.write_missing(&self.layout.missing_file())?;
        report.missing_definitions = dictionary.missing().count();

        info!("Ending Deutschkurs");
        Ok(report)
    }
}
