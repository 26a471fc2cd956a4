use std::collections::HashSet;
use std::path::PathBuf;

use crate::id::ProfileId;
use crate::prefs::Preferences;
use crate::Result;

/// Key holding the remembered ids.
pub const SAVED_IDS_KEY: &str = "saved_steam_ids";
/// Keys written by earlier versions. Never read, only cleared.
pub const LEGACY_KEYS: [&str; 2] = ["steam_ids", "saved_ids"];

/// The set of profile ids the user asked to remember.
///
/// A single insertion-ordered list is the source of truth; the
/// autocomplete suggestions are a view of it. Every mutation is written
/// to disk before the in-memory list changes.
#[derive(Debug)]
pub struct IdentifierStore {
    prefs: Preferences,
    ids: Vec<ProfileId>,
}

impl IdentifierStore {
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let prefs = Preferences::open(path);
        let mut ids: Vec<ProfileId> = Vec::new();
        for raw in prefs.string_set(SAVED_IDS_KEY)? {
            let id = ProfileId::new(raw);
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        log::info!(
            "loaded {} remembered ids from {}",
            ids.len(),
            prefs.path().display()
        );
        Ok(Self { prefs, ids })
    }

    pub fn contains(&self, id: &ProfileId) -> bool {
        self.ids.contains(id)
    }

    /// Remember `id`. Returns `false` if it was already known, in which
    /// case nothing is written.
    pub fn add(&mut self, id: ProfileId) -> Result<bool> {
        if self.contains(&id) {
            return Ok(false);
        }

        let mut updated: Vec<String> =
            self.ids.iter().map(|id| id.to_string()).collect();
        updated.push(id.to_string());
        self.prefs.edit(|entries| {
            entries.insert(SAVED_IDS_KEY.to_owned(), updated);
        })?;

        log::debug!("remembered {}", id);
        self.ids.push(id);
        Ok(true)
    }

    /// Forget every id, including those under legacy keys.
    pub fn clear(&mut self) -> Result<()> {
        self.prefs.edit(|entries| {
            entries.remove(SAVED_IDS_KEY);
            for key in LEGACY_KEYS {
                entries.remove(key);
            }
        })?;

        log::debug!("forgot {} ids", self.ids.len());
        self.ids.clear();
        Ok(())
    }

    pub fn all(&self) -> HashSet<ProfileId> {
        self.ids.iter().cloned().collect()
    }

    /// Remembered ids in the order they were added.
    pub fn suggestions(&self) -> &[ProfileId] {
        &self.ids
    }

    /// Suggestions starting with `prefix`, ignoring case.
    pub fn suggest<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = &'a ProfileId> + 'a {
        let prefix = prefix.to_lowercase();
        self.ids
            .iter()
            .filter(move |id| id.as_str().to_lowercase().starts_with(&prefix))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
