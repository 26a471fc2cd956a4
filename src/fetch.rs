use url::Url;

use crate::id::ProfileId;
use crate::profile::{scrape, ProfileSnapshot};
use crate::{FetchError, Result, ScoutError};

const PROFILES_SEGMENT: &str = "profiles";

/// Retrieves profile pages and turns them into snapshots.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    base: Url,
}

impl Fetcher {
    pub fn new(base: Url) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Self::with_client(client, base)
    }

    /// Use a preconfigured client, e.g. one with proxies or timeouts set.
    pub fn with_client(client: reqwest::Client, base: Url) -> Result<Self> {
        if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base()
        {
            return Err(ScoutError::Config(format!(
                "Unsupported base url {}",
                base
            )));
        }
        Ok(Self { client, base })
    }

    /// `<base>/profiles/<id>`, with the id percent-encoded as a single
    /// path segment.
    ///
    /// Returns `None` for `.` and `..`: URL parsing folds dot segments,
    /// encoded or not, so no URL can carry them as the last segment.
    pub fn profile_url(&self, id: &ProfileId) -> Option<Url> {
        if matches!(id.as_str(), "." | "..") {
            return None;
        }
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push(PROFILES_SEGMENT)
                .push(id.as_str());
        }
        Some(url)
    }

    /// Look up one profile.
    ///
    /// Transport failures and unrecognized pages both end up as
    /// [FetchError::FetchFailed]; the cause is only logged.
    pub async fn fetch(
        &self,
        id: &ProfileId,
    ) -> std::result::Result<ProfileSnapshot, FetchError> {
        let Some(url) = self.profile_url(id) else {
            log::warn!("{:?} cannot be used as a profile path segment", id);
            return Err(FetchError::FetchFailed);
        };
        log::info!("fetching {}", url);

        let document = match self.document(&url).await {
            Ok(document) => document,
            Err(e) => {
                log::warn!("failed to retrieve {}: {}", url, e);
                return Err(FetchError::FetchFailed);
            }
        };

        let outcome = scrape(&document).classify(url);
        match &outcome {
            Ok(snapshot) => log::info!(
                "{} classified as {:?}",
                id,
                snapshot.visibility()
            ),
            Err(_) => log::warn!("no name or level found for {}", id),
        }
        outcome
    }

    /// Blocking variant of [Fetcher::fetch] for callers without a runtime.
    ///
    /// Spins up its own tokio runtime, so it must not be called from async
    /// code: `block_on` panics inside another runtime. Use [Fetcher::fetch]
    /// there instead.
    pub fn fetch_blocking(
        &self,
        id: &ProfileId,
    ) -> std::result::Result<ProfileSnapshot, FetchError> {
        let runtime = tokio::runtime::Runtime::new().map_err(|e| {
            log::error!("unable to create a runtime: {}", e);
            FetchError::FetchFailed
        })?;
        runtime.block_on(self.fetch(id))
    }

    async fn document(&self, url: &Url) -> Result<String> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}
