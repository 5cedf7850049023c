//! Working directory layout.
//!
//! ```text
//! <root>/
//! ├── cache/cache.json        words cache
//! ├── dict/dictionary.json    personal dictionary (user-written)
//! ├── dict/missing.txt        words without definition
//! ├── docs/<word>.adoc        generated documents
//! └── userdata/<topic>/…      source texts
//! ```
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::Error;

const README: &str = "Each directory is a topic. Give them a meaninful name\n";
const EXAMPLE_TOPIC: &str = "grundschule";
const EXAMPLE_FILE: &str = "info-20200901.txt";
const EXAMPLE_TEXT: &str = "Liebe Eltern.\n
                    Im Anhang finden Sie die Infos zum Infektionsschutzgesetz.\n
                    Vielen Dank und noch einen schönen Tag!\n
                    Grüße";

#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.root.join("cache")
    }

    pub fn cache_file(&self) -> PathBuf {
        self.cache_dir().join("cache.json")
    }

    pub fn docs_dir(&self) -> PathBuf {
        self.root.join("docs")
    }

    pub fn dict_dir(&self) -> PathBuf {
        self.root.join("dict")
    }

    pub fn dictionary_file(&self) -> PathBuf {
        self.dict_dir().join("dictionary.json")
    }

    pub fn missing_file(&self) -> PathBuf {
        self.dict_dir().join("missing.txt")
    }

    pub fn userdata_dir(&self) -> PathBuf {
        self.root.join("userdata")
    }

    /// Create missing directories.
    ///
    /// When the user data directory is created, it is seeded with a README
    /// and an example topic.
    pub fn ensure(&self) -> Result<(), Error> {
        for dir in [self.cache_dir(), self.docs_dir(), self.dict_dir()] {
            if !dir.exists() {
                fs::create_dir_all(&dir)?;
                debug!("directory {:?} created", dir);
            }
        }

        let userdata = self.userdata_dir();
        if !userdata.exists() {
            fs::create_dir_all(&userdata)?;
            fs::write(userdata.join("README"), README)?;

            let example = userdata.join(EXAMPLE_TOPIC);
            fs::create_dir_all(&example)?;
            fs::write(example.join(EXAMPLE_FILE), EXAMPLE_TEXT)?;
            info!("directory {:?} created with an example topic", userdata);
        }
        Ok(())
    }
}
