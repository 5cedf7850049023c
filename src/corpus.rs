//! Topic-organized source corpus.
//!
//! ```text
//! userdata/
//! ├── README
//! ├── grundschule/
//! │   └── info-20200901.txt
//! └── arbeit/
//!     ├── mail-1.txt
//!     └── mail-2.txt
//! ```
//!
//! Each directory is a topic, each file in a topic is a document.
//! Topics and documents are listed in lexicographic order so that runs are reproducible.
use std::path::{Path, PathBuf};

use log::{debug, error, warn};

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    name: String,
    path: PathBuf,
}

impl Topic {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// List documents of the topic.
    /// Nested directories are skipped.
    pub fn documents(&self) -> Result<Vec<PathBuf>, Error> {
        let mut documents: Vec<PathBuf> = list_dir(&self.path)?
            .filter(|path| {
                if path.is_file() {
                    true
                } else {
                    warn!("topic {}: skipping non-file {:?}", self.name, path);
                    false
                }
            })
            .collect();
        documents.sort();
        Ok(documents)
    }
}

pub struct Corpus {
    root: PathBuf,
}

impl Corpus {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// List topics.
    /// Entries of the root that are not directories are skipped.
    pub fn topics(&self) -> Result<Vec<Topic>, Error> {
        let mut topics: Vec<Topic> = list_dir(&self.root)?
            .filter_map(|path| {
                if !path.is_dir() {
                    debug!("skipping non-topic {:?}", path);
                    return None;
                }
                let name = path.file_name()?.to_string_lossy().to_string();
                Some(Topic { name, path })
            })
            .collect();
        topics.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(topics)
    }
}

/// list entries of a directory, logging and dropping the ones that can't be read.
fn list_dir(dir: &Path) -> Result<impl Iterator<Item = PathBuf> + '_, Error> {
    let results = std::fs::read_dir(dir)?
        .filter_map(move |entry| {
            entry.map_or_else(
                |e| {
                    error!("error reading directory {:?}: {}", dir, e);
                    None
                },
                Some,
            )
        })
        .map(|entry| entry.path());
    Ok(results)
}
