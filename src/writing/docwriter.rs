//! Word document writer.
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::adoc;
use crate::annotation::Annotate;
use crate::cache::WordCache;
use crate::error::Error;

/// Longest file name most filesystems accept, in bytes.
const MAX_NAME_LEN: usize = 255;

/// Writes one document per cache entry into `dst`, named `<key>.adoc`.
///
/// Existing documents are overwritten. Given the same cache, the output is byte-identical.
pub struct DocWriter<'a, A: Annotate + ?Sized> {
    dst: PathBuf,
    annotator: &'a A,
}

impl<'a, A: Annotate + ?Sized> DocWriter<'a, A> {
    pub fn new(dst: &Path, annotator: &'a A) -> Self {
        Self {
            dst: dst.to_path_buf(),
            annotator,
        }
    }

    /// Whether a key can be used as a file name.
    fn is_valid_name(key: &str) -> bool {
        !(key.is_empty()
            || key == "."
            || key == ".."
            || key.len() + 1 + adoc::EXTENSION.len() > MAX_NAME_LEN
            || key.contains(|c: char| c == '/' || c == '\\' || c == '\0'))
    }

    /// Path of the document of `key`.
    pub fn path_of(&self, key: &str) -> PathBuf {
        self.dst.join(format!("{}.{}", key, adoc::EXTENSION))
    }

    /// Write every document, returning the number of written ones.
    pub fn generate(&self, cache: &WordCache) -> Result<usize, Error> {
        let mut written = 0;
        for (key, record) in cache.iter() {
            if !Self::is_valid_name(key) {
                warn!("word '{}' can't be used as a file name, skipping", key);
                continue;
            }

            // morphology is not part of the document yet.
            match self.annotator.morphology(key) {
                Ok(analysis) => {
                    for reading in analysis.readings() {
                        debug!("{}: {}", key, reading);
                    }
                }
                Err(e) => warn!("no morphological analysis for '{}': {}", key, e),
            }

            let mut file = File::create(self.path_of(key))?;
            file.write_all(adoc::render(record).as_bytes())?;
            written += 1;
        }

        info!("{} documents written in {:?}", written, self.dst);
        Ok(written)
    }
}
