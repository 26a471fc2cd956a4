use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::atomic::replace_json;
use crate::{Result, ScoutError};

const LOG_PREFIX: &str = "[preferences]";

/// Named string sets, in insertion order.
pub type Entries = BTreeMap<String, Vec<String>>;

/// A small key/value document of string sets kept in a single JSON file.
///
/// Every `edit` rewrites the whole document atomically.
#[derive(Clone, Debug)]
pub struct Preferences {
    path: PathBuf,
}

impl Preferences {
    pub fn open<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every entry. A missing file reads as an empty document.
    pub fn entries(&self) -> Result<Entries> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!(
                    "{} {} does not exist yet",
                    LOG_PREFIX,
                    self.path.display()
                );
                return Ok(Entries::new());
            }
            Err(e) => return Err(e.into()),
        };
        if text.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&text).map_err(|e| {
            ScoutError::Storage(
                self.path.display().to_string(),
                format!("Malformed preferences: {}", e),
            )
        })
    }

    pub fn string_set(&self, key: &str) -> Result<Vec<String>> {
        Ok(self
            .entries()?
            .remove(key)
            .unwrap_or_default())
    }

    /// Apply `operator` to the current document and write the result
    /// back as one atomic replacement.
    pub fn edit(&self, operator: impl FnOnce(&mut Entries)) -> Result<()> {
        let mut entries = self.entries()?;
        operator(&mut entries);
        replace_json(&self.path, &entries)?;
        log::info!(
            "{} {} keys has been written",
            LOG_PREFIX,
            entries.len()
        );
        Ok(())
    }
}
