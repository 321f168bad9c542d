//! Item Board
//!
//! Owns the ordered collection of reports (newest first). Items are only ever
//! added or resolved; nothing is removed.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::models::{Item, ItemId, NewItem};
use crate::query::{self, ItemFilter, Stats};

/// Result of a resolve call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    Resolved,
    AlreadyResolved,
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemBoard {
    items: Vec<Item>,
    placeholder_image: String,
    next_seq: u64,
}

impl ItemBoard {
    pub fn new(placeholder_image: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            placeholder_image: placeholder_image.into(),
            next_seq: 1,
        }
    }

    /// Board preloaded with `items`, ordered newest first
    ///
    /// Items whose id is already present are skipped.
    pub fn seeded(placeholder_image: impl Into<String>, items: Vec<Item>) -> Self {
        let mut seen = HashSet::new();
        let mut items: Vec<Item> = items
            .into_iter()
            .filter(|item| seen.insert(item.id.clone()))
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Self {
            items,
            ..Self::new(placeholder_image)
        }
    }

    pub fn add(&mut self, new_item: NewItem) -> Item {
        self.add_at(new_item, Utc::now())
    }

    /// Add a report created at `now`; the stored copy is returned
    pub fn add_at(&mut self, new_item: NewItem, now: DateTime<Utc>) -> Item {
        let id = self.next_id(now);
        let image_url = new_item
            .image_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.placeholder_image.clone());

        let item = Item {
            id,
            title: new_item.title,
            description: new_item.description,
            category: new_item.category,
            status: new_item.status,
            location: new_item.location,
            date: new_item.date,
            contact_email: new_item.contact_email,
            contact_name: new_item.contact_name,
            image_url,
            is_resolved: false,
            created_at: now,
        };
        self.items.insert(0, item.clone());
        item
    }

    pub fn resolve(&mut self, id: &ItemId) -> ResolveOutcome {
        match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) if item.is_resolved => ResolveOutcome::AlreadyResolved,
            Some(item) => {
                item.is_resolved = true;
                ResolveOutcome::Resolved
            }
            None => ResolveOutcome::NotFound,
        }
    }

    pub fn all(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_items(&self) -> Vec<&Item> {
        query::active_items(&self.items)
    }

    pub fn resolved_items(&self) -> Vec<&Item> {
        query::resolved_items(&self.items)
    }

    pub fn recent_active(&self, limit: usize) -> Vec<&Item> {
        query::recent_active(&self.items, limit)
    }

    pub fn stats(&self) -> Stats {
        query::stats(&self.items)
    }

    pub fn filter(&self, filter: &ItemFilter) -> Vec<&Item> {
        query::filter(&self.items, filter)
    }

    fn next_id(&mut self, now: DateTime<Utc>) -> ItemId {
        loop {
            let seq = self.next_seq.max(1);
            self.next_seq = seq + 1;
            let id = ItemId::new(format!("{}-{}", now.timestamp_millis(), seq));
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ItemStatus};
    use chrono::{Duration, NaiveDate, TimeZone};

    const PLACEHOLDER: &str = "https://example.com/placeholder.jpg";

    fn draft(title: &str, status: ItemStatus) -> NewItem {
        NewItem {
            title: title.to_string(),
            description: "Brown leather, two cards inside".to_string(),
            category: Category::Accessories,
            status,
            location: "Cafeteria".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
            contact_email: "sam@university.edu".to_string(),
            contact_name: "Sam".to_string(),
            image_url: None,
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 10, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut board = ItemBoard::new(PLACEHOLDER);
        for i in 0..20 {
            board.add_at(draft(&format!("Item {}", i), ItemStatus::Lost), t0());
        }

        assert_eq!(board.len(), 20);
        let ids: HashSet<_> = board.all().iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_add_sets_defaults() {
        let mut board = ItemBoard::new(PLACEHOLDER);
        let item = board.add_at(draft("Wallet", ItemStatus::Lost), t0());

        assert!(!item.is_resolved);
        assert_eq!(item.created_at, t0());
        assert_eq!(item.image_url, PLACEHOLDER);
        assert_eq!(board.get(&item.id), Some(&item));

        let mut with_image = draft("Umbrella", ItemStatus::Found);
        with_image.image_url = Some("https://example.com/u.jpg".to_string());
        assert_eq!(board.add_at(with_image, t0()).image_url, "https://example.com/u.jpg");

        let mut blank_image = draft("Scarf", ItemStatus::Found);
        blank_image.image_url = Some("  ".to_string());
        assert_eq!(board.add_at(blank_image, t0()).image_url, PLACEHOLDER);
    }

    #[test]
    fn test_newest_first() {
        let mut board = ItemBoard::new(PLACEHOLDER);
        let a = board.add_at(draft("A", ItemStatus::Lost), t0());
        let b = board.add_at(draft("B", ItemStatus::Found), t0() + Duration::seconds(1));

        assert_eq!(board.all()[0].id, b.id);
        assert_eq!(board.all()[1].id, a.id);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut board = ItemBoard::new(PLACEHOLDER);
        let item = board.add_at(draft("Wallet", ItemStatus::Lost), t0());

        assert_eq!(board.resolve(&item.id), ResolveOutcome::Resolved);
        let once = board.clone();
        assert_eq!(board.resolve(&item.id), ResolveOutcome::AlreadyResolved);
        assert_eq!(board, once);
    }

    #[test]
    fn test_resolve_unknown_id_is_noop() {
        let mut board = ItemBoard::new(PLACEHOLDER);
        board.add_at(draft("Wallet", ItemStatus::Lost), t0());
        let before = board.clone();

        assert_eq!(board.resolve(&ItemId::new("missing")), ResolveOutcome::NotFound);
        assert_eq!(board, before);
    }

    #[test]
    fn test_wallet_scenario() {
        let mut board = ItemBoard::new(PLACEHOLDER);
        let wallet = board.add(draft("Wallet", ItemStatus::Lost));

        assert_eq!(board.stats(), Stats { active_lost: 1, active_found: 0, resolved: 0 });
        assert_eq!(board.filter(&ItemFilter::text("wallet")).len(), 1);
        assert!(board.filter(&ItemFilter::text("xyz")).is_empty());

        board.resolve(&wallet.id);
        assert_eq!(board.stats(), Stats { active_lost: 0, active_found: 0, resolved: 1 });
        assert!(board.filter(&ItemFilter::text("wallet")).is_empty());

        let with_resolved = ItemFilter { include_resolved: true, ..ItemFilter::text("wallet") };
        assert_eq!(board.filter(&with_resolved).len(), 1);
    }

    #[test]
    fn test_stats_agree_with_active_items() {
        let mut board = ItemBoard::new(PLACEHOLDER);
        let mut ids = Vec::new();
        for i in 0..9 {
            let status = if i % 3 == 0 { ItemStatus::Found } else { ItemStatus::Lost };
            ids.push(board.add_at(draft("x", status), t0()).id);
        }
        board.resolve(&ids[0]);
        board.resolve(&ids[4]);

        let stats = board.stats();
        assert_eq!(stats.active_lost + stats.active_found, board.active_items().len());
        assert_eq!(stats.resolved, board.resolved_items().len());
        assert_eq!(board.active_items().len() + board.resolved_items().len(), board.len());
    }

    #[test]
    fn test_seeded_orders_and_dedups() {
        let mut source = ItemBoard::new(PLACEHOLDER);
        let older = source.add_at(draft("Older", ItemStatus::Lost), t0());
        let newer = source.add_at(draft("Newer", ItemStatus::Found), t0() + Duration::hours(2));

        let mut duplicate = older.clone();
        duplicate.title = "Duplicate".to_string();

        let board = ItemBoard::seeded(PLACEHOLDER, vec![older.clone(), newer.clone(), duplicate]);
        assert_eq!(board.len(), 2);
        assert_eq!(board.all()[0].id, newer.id);
        assert_eq!(board.all()[1].title, "Older");
    }

    #[test]
    fn test_generated_ids_skip_existing() {
        let mut source = ItemBoard::new(PLACEHOLDER);
        let taken = source.add_at(draft("Taken", ItemStatus::Lost), t0());

        let mut board = ItemBoard::seeded(PLACEHOLDER, vec![taken.clone()]);
        let fresh = board.add_at(draft("Fresh", ItemStatus::Lost), t0());
        assert_ne!(fresh.id, taken.id);
        assert_eq!(board.len(), 2);
    }
}
