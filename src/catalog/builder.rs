use tracing::debug;
use url::Url;

use super::errors::CatalogError;
use super::feed::{Feed, FeedCategory, FeedVideo};
use super::urls;
use crate::models::{Catalog, Item};

/// Build a catalog from a decoded feed.
///
/// Videos without sources are dropped without consuming an id. Any other
/// problem aborts the whole build.
pub fn build_catalog(feed: &Feed, prefix: &Url) -> Result<Catalog, CatalogError> {
    let mut catalog = Catalog::new();
    debug!("Feed has {} categories", feed.categories.len());

    for category in &feed.categories {
        debug!(
            "Category '{}' lists {} videos",
            category.name,
            category.videos.len()
        );

        for index in 0..category.videos.len() {
            let Some(video) = category.video(index)? else {
                debug!(
                    "Skipping video {} in '{}': no sources",
                    index, category.name
                );
                continue;
            };

            let item = build_item(&catalog, category, &video, prefix)?;
            catalog.insert(item);
        }
    }

    Ok(catalog)
}

fn build_item(
    catalog: &Catalog,
    category: &FeedCategory,
    video: &FeedVideo,
    prefix: &Url,
) -> Result<Item, CatalogError> {
    let source = urls::decode_source_url(video.primary_source().unwrap_or_default());

    Ok(Item {
        id: catalog.next_id(),
        title: video.title.clone(),
        description: video.description.clone(),
        studio: video.studio.clone(),
        category: category.name.clone(),
        card_image_url: urls::image_url(prefix, &category.name, &video.title, &video.card)?,
        background_image_url: urls::image_url(
            prefix,
            &category.name,
            &video.title,
            &video.background,
        )?,
        video_url: urls::video_url(prefix, &category.name, &source)?,
    })
}
