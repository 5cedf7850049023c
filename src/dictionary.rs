//! Personal dictionary.
//!
//! Definitions are written by the user in `dict/dictionary.json`, a JSON object mapping
//! a word key to its definition. Every analyzed word is looked up, and the words that have
//! no definition yet are listed at the end of a run in `dict/missing.txt`.
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, info, warn};

use crate::error::Error;

#[derive(Debug, Default)]
pub struct PersonalDictionary {
    definitions: BTreeMap<String, String>,
    missing: BTreeSet<String>,
}

impl PersonalDictionary {
    pub fn new(definitions: BTreeMap<String, String>) -> Self {
        Self {
            definitions,
            missing: BTreeSet::new(),
        }
    }

    /// Load definitions from `path`.
    /// A missing or malformed file gives an empty dictionary.
    pub fn load(path: &Path) -> Self {
        let definitions = File::open(path)
            .map_err(Error::from)
            .and_then(|f| serde_json::from_reader(BufReader::new(f)).map_err(Error::from));

        match definitions {
            Ok(definitions) => {
                let dict = Self::new(definitions);
                debug!("personal dictionary loaded ({} definitions)", dict.len());
                dict
            }
            Err(Error::Io(e)) => {
                debug!("no personal dictionary at {:?}: {}", path, e);
                Self::default()
            }
            Err(e) => {
                warn!("personal dictionary {:?} is unreadable: {}", path, e);
                Self::default()
            }
        }
    }

    /// Definition of a word, if any.
    pub fn definition(&self, key: &str) -> Option<&str> {
        self.definitions.get(key).map(String::as_str)
    }

    /// Look a word up, remembering it if it has no definition.
    pub fn lookup(&mut self, key: &str) -> Option<&str> {
        if !self.definitions.contains_key(key) {
            self.missing.insert(key.to_string());
            return None;
        }
        self.definition(key)
    }

    /// Looked up words without definition, sorted.
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.missing.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Write missing words to `path`, one per line.
    pub fn write_missing(&self, path: &Path) -> Result<(), Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        for word in self.missing() {
            writeln!(writer, "{}", word)?;
        }
        writer.flush()?;
        info!(
            "{} words without definition, listed in {:?}",
            self.missing.len(),
            path
        );
        Ok(())
    }
}
