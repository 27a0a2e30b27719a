mod identifiers;
pub mod playlist_context;

pub use identifiers::ItemId;
pub use playlist_context::PlaylistContext;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A playable catalog entry with fully composed media URLs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub studio: String,
    pub category: String,
    pub card_image_url: String,
    pub background_image_url: String,
    pub video_url: String,
}

/// In-memory catalog: items grouped by category plus a direct id index.
///
/// Both indices are filled in lockstep by [`Catalog::insert`]. Once published
/// by the catalog service a catalog is never mutated again; consumers share it
/// through an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: HashMap<String, Vec<Item>>,
    items_by_id: HashMap<ItemId, Item>,
    // first-appearance order of category names
    category_order: Vec<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next inserted item is expected to carry
    pub fn next_id(&self) -> ItemId {
        ItemId::from_position(self.items_by_id.len())
    }

    /// Append an item to its category list and index it by id
    pub fn insert(&mut self, item: Item) {
        self.items_by_id.insert(item.id.clone(), item.clone());

        match self.categories.get_mut(&item.category) {
            Some(list) => list.push(item),
            None => {
                self.category_order.push(item.category.clone());
                self.categories.insert(item.category.clone(), vec![item]);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of items in the id index
    pub fn len(&self) -> usize {
        self.items_by_id.len()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items_by_id.get(id)
    }

    pub fn category(&self, name: &str) -> Option<&[Item]> {
        self.categories.get(name).map(Vec::as_slice)
    }

    pub fn categories(&self) -> &HashMap<String, Vec<Item>> {
        &self.categories
    }

    pub fn items_by_id(&self) -> &HashMap<ItemId, Item> {
        &self.items_by_id
    }

    /// Category names in the order they first appeared in the feed
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.category_order.iter().map(String::as_str)
    }
}
