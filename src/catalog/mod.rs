//! Catalog loading and queue navigation.
//!
//! [`CatalogService`] owns the published catalog and the navigation cursor.
//! A load fetches the feed once; after the first non-empty build every caller
//! gets the same shared catalog without touching the network.

mod builder;
pub mod errors;
pub mod feed;
pub mod fetcher;
pub mod urls;


pub use builder::build_catalog;
pub use errors::CatalogError;
pub use fetcher::{FeedFetcher, HttpFeedFetcher};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use tracing::{debug, error, info, warn};

use crate::config::{Config, PrefixUrlSource};
use crate::models::{Catalog, Item, ItemId, PlaylistContext};

pub struct CatalogService {
    fetcher: Arc<dyn FeedFetcher>,
    prefix_source: Arc<dyn PrefixUrlSource>,
    feed_url: Option<String>,
    catalog: RwLock<Arc<Catalog>>,
    // serializes first-time builds so concurrent callers fetch once
    build_gate: tokio::sync::Mutex<()>,
    cursor: Mutex<PlaylistContext>,
}

impl CatalogService {
    pub fn new(fetcher: Arc<dyn FeedFetcher>, prefix_source: Arc<dyn PrefixUrlSource>) -> Self {
        Self {
            fetcher,
            prefix_source,
            feed_url: None,
            catalog: RwLock::new(Arc::new(Catalog::new())),
            build_gate: tokio::sync::Mutex::new(()),
            cursor: Mutex::new(PlaylistContext::Unset),
        }
    }

    /// Service fetching over HTTP with the timeout, prefix and feed URL from `config`
    pub fn from_config(config: Config) -> Result<Self, CatalogError> {
        let fetcher = HttpFeedFetcher::new(config.request_timeout())?;
        let feed_url = config.catalog.feed_url.clone();
        Ok(Self::new(Arc::new(fetcher), Arc::new(config)).with_feed_url(feed_url))
    }

    /// Feed used by [`CatalogService::load_configured`]
    pub fn with_feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed_url = Some(url.into());
        self
    }

    pub fn feed_url(&self) -> Option<&str> {
        self.feed_url.as_deref()
    }

    /// [`CatalogService::load`] from the configured feed URL
    pub async fn load_configured(&self) -> Result<Arc<Catalog>, CatalogError> {
        let url = self
            .feed_url
            .as_deref()
            .ok_or_else(|| CatalogError::Config("No feed URL configured".to_string()))?;
        self.load(url).await
    }

    /// Load the catalog from `url`, or return the already built one.
    ///
    /// On failure nothing is published and the error is returned; the
    /// previously published (empty) catalog stays in place.
    pub async fn load(&self, url: &str) -> Result<Arc<Catalog>, CatalogError> {
        if let Some(catalog) = self.built_catalog() {
            debug!("Catalog already built, skipping fetch of {}", url);
            return Ok(catalog);
        }

        let _gate = self.build_gate.lock().await;
        if let Some(catalog) = self.built_catalog() {
            debug!("Catalog built by a concurrent load, skipping fetch of {}", url);
            return Ok(catalog);
        }

        match self.fetch_catalog(url).await {
            Ok(catalog) => {
                info!(
                    "Loaded {} items in {} categories from {}",
                    catalog.len(),
                    catalog.categories().len(),
                    url
                );
                let catalog = Arc::new(catalog);
                *self.catalog.write().unwrap_or_else(PoisonError::into_inner) = catalog.clone();
                Ok(catalog)
            }
            Err(e) => {
                error!("An error occurred fetching videos from {}: {}", url, e);
                Err(e)
            }
        }
    }

    async fn fetch_catalog(&self, url: &str) -> Result<Catalog, CatalogError> {
        let prefix = self.prefix_source.prefix_url()?;
        debug!("Parse URL: {} (prefix {})", url, prefix);

        let bytes = self.fetcher.fetch(url).await?;
        let text = feed::decode_latin1(&bytes);
        let feed = feed::parse_feed(&text)?;
        build_catalog(&feed, &prefix)
    }

    fn built_catalog(&self) -> Option<Arc<Catalog>> {
        let catalog = self.catalog();
        (!catalog.is_empty()).then_some(catalog)
    }

    /// The published catalog, empty until a load succeeds
    pub fn catalog(&self) -> Arc<Catalog> {
        self.catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn lookup_by_id(&self, id: &ItemId) -> Option<Item> {
        self.catalog().get(id).cloned()
    }

    /// Make the category of `item` the current queue, positioned at `item`.
    ///
    /// With no catalog loaded the cursor is cleared. When no non-empty category
    /// matches, the current queue is kept.
    pub fn set_queue(&self, item: &Item) {
        let catalog = self.catalog();
        let mut cursor = self.cursor();

        if catalog.is_empty() {
            *cursor = PlaylistContext::Unset;
            return;
        }

        match PlaylistContext::for_item(&catalog, item) {
            Some(context) => *cursor = context,
            None => warn!(
                "No videos in category '{}', keeping current queue",
                item.category
            ),
        }
    }

    /// Move to the previous item in the queue, wrapping to the last.
    ///
    /// Returns `None` without moving when no queue is set.
    pub fn previous_id(&self) -> Option<ItemId> {
        self.cursor().previous_item()
    }

    /// Move to the next item in the queue, wrapping to the first.
    ///
    /// Returns `None` without moving when no queue is set.
    pub fn next_id(&self) -> Option<ItemId> {
        self.cursor().next_item()
    }

    pub fn current_queue(&self) -> Option<Vec<Item>> {
        let cursor = self.cursor();
        cursor.is_set().then(|| cursor.items().to_vec())
    }

    pub fn current_item(&self) -> Option<Item> {
        self.cursor().current_item().cloned()
    }

    /// Snapshot of the navigation cursor
    pub fn playlist_context(&self) -> PlaylistContext {
        self.cursor().clone()
    }

    fn cursor(&self) -> MutexGuard<'_, PlaylistContext> {
        self.cursor.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("fetcher", &self.fetcher)
            .field("items", &self.catalog().len())
            .finish()
    }
}
