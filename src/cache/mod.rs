/*! Persistent word cache.

Maps a normalized word key (the lower-cased token text) to its [AnnotationRecord].

The cache only grows: entries are never removed, and [WordCache::put] never replaces
an existing entry. It is loaded once at the start of a run and saved once at the end.

On disk it is a single JSON object, keys sorted:

```json
{
  "eltern": {"word": "Eltern", "pos": "noun, singular or mass", "lema": "Eltern", "prefix": "E", "suffix": "ern"}
}
```
!*/
mod record;

pub use record::{title_case, AnnotationRecord};

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, warn};

use crate::error::Error;

/// Normalized cache key of a token text.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordCache {
    words: BTreeMap<String, AnnotationRecord>,
}

impl WordCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a cache from `path`.
    ///
    /// A missing or malformed file gives an empty cache.
    pub fn load(path: &Path) -> Self {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                debug!("no words cache at {:?} ({}), words cache created", path, e);
                return Self::new();
            }
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(words) => {
                let cache = Self { words };
                debug!("words cache loaded ({} words)", cache.len());
                cache
            }
            Err(e) => {
                warn!("words cache {:?} is corrupt ({}), starting empty", path, e);
                Self::new()
            }
        }
    }

    /// Save the whole cache to `path`.
    ///
    /// The cache is written to a sibling temporary file which is then renamed over `path`,
    /// so that an interrupted save leaves the previous cache intact.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let tmp = path.with_extension("json.tmp");
        {
            let mut writer = BufWriter::new(File::create(&tmp)?);
            serde_json::to_writer_pretty(&mut writer, &self.words)?;
            writer.flush()?;
        }
        std::fs::rename(&tmp, path)?;
        debug!("words cache saved ({} words)", self.len());
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.words.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&AnnotationRecord> {
        self.words.get(key)
    }

    /// Insert a record for a new key.
    /// If the key is already known, the stored record is kept and returned.
    pub fn put(&mut self, key: String, record: AnnotationRecord) -> &AnnotationRecord {
        self.words.entry(key).or_insert(record)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Keys, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    /// Entries, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnnotationRecord)> {
        self.words.iter().map(|(k, v)| (k.as_str(), v))
    }
}
