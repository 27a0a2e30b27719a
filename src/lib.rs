//! Video catalog loading and queue navigation for TV-style media browsing.
//!
//! A [`CatalogService`] fetches a JSON feed once, indexes its videos by
//! category and by id, and keeps a cursor over the category being browsed.

pub mod catalog;
pub mod config;
pub mod models;

pub use catalog::{CatalogError, CatalogService, FeedFetcher, HttpFeedFetcher};
pub use config::{Config, ConfigFile, PrefixUrlSource};
pub use models::{Catalog, Item, ItemId, PlaylistContext};
