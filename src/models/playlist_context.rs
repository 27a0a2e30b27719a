use crate::models::{Catalog, Item, ItemId};
use std::sync::Arc;

/// Navigation cursor over the queue currently being browsed
#[derive(Debug, Clone, Default)]
pub enum PlaylistContext {
    /// No queue selected, navigation is unavailable
    #[default]
    Unset,

    /// Queue aliasing one category list of a published catalog
    Category {
        /// Catalog the queue belongs to
        catalog: Arc<Catalog>,
        /// Category whose list is the queue
        name: String,
        /// Position in the queue; `None` when the selected item was not in the
        /// list, so the next step lands on the first or last item
        current_index: Option<usize>,
    },
}

impl PlaylistContext {
    /// Queue for the category of `item`, positioned at the first item equal to it.
    ///
    /// Returns `None` when the catalog has no non-empty list for that category.
    pub fn for_item(catalog: &Arc<Catalog>, item: &Item) -> Option<Self> {
        let list = catalog
            .category(&item.category)
            .filter(|list| !list.is_empty())?;

        Some(PlaylistContext::Category {
            catalog: Arc::clone(catalog),
            name: item.category.clone(),
            current_index: list.iter().position(|candidate| candidate == item),
        })
    }

    pub fn is_set(&self) -> bool {
        matches!(self, PlaylistContext::Category { .. })
    }

    /// Items of the queue, empty when unset
    pub fn items(&self) -> &[Item] {
        match self {
            PlaylistContext::Unset => &[],
            PlaylistContext::Category { catalog, name, .. } => {
                catalog.category(name).unwrap_or(&[])
            }
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        match self {
            PlaylistContext::Unset => None,
            PlaylistContext::Category { current_index, .. } => *current_index,
        }
    }

    pub fn current_item(&self) -> Option<&Item> {
        self.current_index().and_then(|index| self.items().get(index))
    }

    /// Advance to the next item, wrapping to the first after the last
    pub fn next_item(&mut self) -> Option<ItemId> {
        let PlaylistContext::Category {
            catalog,
            name,
            current_index,
        } = self
        else {
            return None;
        };
        let items = catalog.category(name).filter(|items| !items.is_empty())?;

        let next = match *current_index {
            Some(index) if index + 1 < items.len() => index + 1,
            _ => 0,
        };
        *current_index = Some(next);
        Some(items[next].id.clone())
    }

    /// Step back to the previous item, wrapping to the last before the first
    pub fn previous_item(&mut self) -> Option<ItemId> {
        let PlaylistContext::Category {
            catalog,
            name,
            current_index,
        } = self
        else {
            return None;
        };
        let items = catalog.category(name).filter(|items| !items.is_empty())?;

        let previous = match *current_index {
            Some(index) if index > 0 => index - 1,
            _ => items.len() - 1,
        };
        *current_index = Some(previous);
        Some(items[previous].id.clone())
    }
}
