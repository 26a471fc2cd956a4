pub mod atomic;
pub mod config;
mod errors;
pub mod fetch;
pub mod id;
pub mod lookup;
pub mod prefs;
pub mod profile;
pub mod store;

pub use config::Config;
pub use errors::{FetchError, Result, ScoutError};
pub use fetch::Fetcher;
pub use id::ProfileId;
pub use lookup::{Confirm, Lookup, LookupReport};
pub use profile::{
    DisplayFields, Field, Profile, ProfileSnapshot, ScrapedFields, Visibility,
};
pub use store::IdentifierStore;

pub const SCOUT_FOLDER: &str = ".profile-scout";
pub const PREFERENCES_FILE: &str = "preferences.json";
pub const CONFIG_FILE: &str = "config.json";

/// Build the fetcher and open the store described by `config`.
pub fn open(config: &Config) -> Result<Lookup> {
    let fetcher = Fetcher::new(config.base_url.clone())?;
    let store = IdentifierStore::open(config.store_path.clone())?;
    Ok(Lookup::new(fetcher, store))
}

#[cfg(test)]
pub(crate) fn initialize() {
    let _ = env_logger::builder().is_test(true).try_init();
}
