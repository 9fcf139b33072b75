// File: src/store.rs
// Purpose: In-memory item repository

use rusty_binding::Item;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Items keyed by id. Nothing is persisted across restarts.
#[derive(Debug, Default)]
pub struct ItemRepository {
    items: RwLock<BTreeMap<u64, Item>>,
}

impl ItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new item under the next free id and return it
    pub async fn save(&self, mut item: Item) -> Item {
        let mut items = self.items.write().await;
        let id = items.keys().next_back().map(|id| id + 1).unwrap_or(1);
        item.id = Some(id);
        items.insert(id, item.clone());
        item
    }

    pub async fn find_by_id(&self, id: u64) -> Option<Item> {
        self.items.read().await.get(&id).cloned()
    }

    pub async fn find_all(&self) -> Vec<Item> {
        self.items.read().await.values().cloned().collect()
    }

    /// Replace name, price and quantity of an existing item
    pub async fn update(&self, id: u64, param: Item) -> bool {
        let mut items = self.items.write().await;
        match items.get_mut(&id) {
            Some(item) => {
                item.item_name = param.item_name;
                item.price = param.price;
                item.quantity = param.quantity;
                true
            }
            None => false,
        }
    }
}
