// In-memory knowledge base shared by the integration tests

#![allow(dead_code)]

use geotag_core::{Coordinate, KnowledgeBase};
use geotag_wiki::{ItemId, WikiError};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Default)]
pub struct FakeKnowledgeBase {
    items: HashMap<String, ItemId>,
    redirects: HashMap<String, String>,
    coordinates: HashMap<ItemId, Vec<Coordinate>>,
    broken_items: HashSet<ItemId>,
    lookups: Mutex<Vec<String>>,
}

impl FakeKnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page linked to `item` with the given coordinate claims
    pub fn with_page(mut self, title: &str, item: &str, coordinates: &[(f64, f64)]) -> Self {
        let item = ItemId::new(item);
        self.items.insert(title.to_string(), item.clone());
        self.coordinates.insert(
            item,
            coordinates
                .iter()
                .map(|&(lat, lon)| Coordinate::new(lat, lon))
                .collect(),
        );
        self
    }

    pub fn with_redirect(mut self, from: &str, to: &str) -> Self {
        self.redirects.insert(from.to_string(), to.to_string());
        self
    }

    /// Coordinate lookups for `item` fail with a server error
    pub fn with_broken_item(mut self, item: &str) -> Self {
        self.broken_items.insert(ItemId::new(item));
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.lookups.lock().unwrap().push(call);
    }
}

impl KnowledgeBase for FakeKnowledgeBase {
    async fn item_for_page(&self, title: &str) -> Result<ItemId, WikiError> {
        self.record(format!("item:{}", title));
        if title.is_empty() {
            return Err(WikiError::InvalidTitle(title.to_string()));
        }
        if self.redirects.contains_key(title) {
            return Err(WikiError::IsRedirect(title.to_string()));
        }
        self.items
            .get(title)
            .cloned()
            .ok_or_else(|| WikiError::PageMissing(title.to_string()))
    }

    async fn redirect_target(&self, title: &str) -> Result<String, WikiError> {
        self.record(format!("redirect:{}", title));
        if let Some(target) = self.redirects.get(title) {
            return Ok(target.clone());
        }
        if self.items.contains_key(title) {
            Err(WikiError::NotRedirect(title.to_string()))
        } else {
            Err(WikiError::PageMissing(title.to_string()))
        }
    }

    async fn coordinates(&self, item: &ItemId) -> Result<Vec<Coordinate>, WikiError> {
        self.record(format!("coordinates:{}", item));
        if self.broken_items.contains(item) {
            return Err(WikiError::Status(503));
        }
        Ok(self.coordinates.get(item).cloned().unwrap_or_default())
    }
}

/// Paris and Berlin resolve directly, NYC redirects to New York City,
/// Middle-earth has no coordinates.
pub fn sample_knowledge_base() -> FakeKnowledgeBase {
    FakeKnowledgeBase::new()
        .with_page("Paris", "Q90", &[(48.856944, 2.351389), (48.8567, 2.3508)])
        .with_page("Berlin", "Q64", &[(52.52, 13.405)])
        .with_page("New York City", "Q60", &[(40.712778, -74.006111)])
        .with_redirect("NYC", "New York City")
        .with_page("Middle-earth", "Q81015", &[])
}
