//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::{ItemBoard, ResolveOutcome};
use crate::config::BoardConfig;
use crate::models::{Item, ItemId, NewItem};
use crate::query::ItemFilter;
use crate::seed::seed_items;

/// Application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// All reports, newest first
    pub board: ItemBoard,
    /// Browse-page filter (kept while navigating between pages)
    pub filter: ItemFilter,
}

impl AppState {
    pub fn new(config: &BoardConfig) -> Self {
        let board = if config.load_seed {
            ItemBoard::seeded(config.placeholder_image_url.clone(), seed_items())
        } else {
            ItemBoard::new(config.placeholder_image_url.clone())
        };
        log::info!("board loaded with {} items", board.len());
        Self {
            board,
            filter: ItemFilter::default(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a report to the board
pub fn store_add_item(store: &AppStore, new_item: NewItem) -> Item {
    let item = store.board().write().add(new_item);
    log::info!("added {} item {} ({})", item.status.as_str(), item.id, item.title);
    item
}

/// Mark a report as resolved
pub fn store_resolve_item(store: &AppStore, id: &ItemId) -> ResolveOutcome {
    let outcome = store.board().write().resolve(id);
    match outcome {
        ResolveOutcome::Resolved => log::info!("resolved item {}", id),
        ResolveOutcome::AlreadyResolved => log::debug!("item {} already resolved", id),
        ResolveOutcome::NotFound => log::warn!("resolve: no item {}", id),
    }
    outcome
}

/// Reset the browse filter
pub fn store_clear_filter(store: &AppStore) {
    *store.filter().write() = ItemFilter::default();
}
