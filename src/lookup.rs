use crate::fetch::Fetcher;
use crate::id::ProfileId;
use crate::profile::ProfileSnapshot;
use crate::store::IdentifierStore;
use crate::{FetchError, Result};

/// Asks the user whether an unknown id should be remembered.
pub trait Confirm {
    fn remember(&mut self, id: &ProfileId) -> bool;
}

impl<F: FnMut(&ProfileId) -> bool> Confirm for F {
    fn remember(&mut self, id: &ProfileId) -> bool {
        self(id)
    }
}

/// Everything the frontend needs to render one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupReport {
    pub id: ProfileId,
    pub outcome: std::result::Result<ProfileSnapshot, FetchError>,
    /// Whether the id was newly added to the store by this lookup
    pub remembered: bool,
}

/// One lookup at a time: confirm, fetch, then update the store.
pub struct Lookup {
    fetcher: Fetcher,
    store: IdentifierStore,
}

impl Lookup {
    pub fn new(fetcher: Fetcher, store: IdentifierStore) -> Self {
        Self { fetcher, store }
    }

    pub fn store(&self) -> &IdentifierStore {
        &self.store
    }

    /// Run the lookup for `input`. Blank input does nothing.
    ///
    /// Unknown ids are offered to `confirm` before fetching; a refusal
    /// still fetches but leaves the store untouched. The store is only
    /// written after the fetch has completed.
    pub async fn submit(
        &mut self,
        input: &str,
        confirm: &mut impl Confirm,
    ) -> Option<LookupReport> {
        let id = ProfileId::from_input(input)?;
        let save = !self.store.contains(&id) && confirm.remember(&id);

        let outcome = self.fetcher.fetch(&id).await;

        let mut remembered = false;
        if save {
            match self.store.add(id.clone()) {
                Ok(added) => remembered = added,
                Err(e) => log::error!("failed to remember {}: {}", id, e),
            }
        }

        Some(LookupReport {
            id,
            outcome,
            remembered,
        })
    }

    pub fn clear(&mut self) -> Result<()> {
        self.store.clear()
    }

    pub fn suggestions(&self) -> &[ProfileId] {
        self.store.suggestions()
    }
}
