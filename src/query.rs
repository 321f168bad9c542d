//! Derived Views
//!
//! Pure queries over a snapshot of board items: active/resolved subsets,
//! aggregate counts and the browse-page filter.

use crate::models::{Category, Item, ItemStatus};

/// Aggregate counts at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub active_lost: usize,
    pub active_found: usize,
    pub resolved: usize,
}

/// Browse-page filter criteria
///
/// `None` for category or status means "all".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemFilter {
    pub query: String,
    pub category: Option<Category>,
    pub status: Option<ItemStatus>,
    pub include_resolved: bool,
}

impl ItemFilter {
    /// Free-text filter with every other criterion left at its default
    pub fn text(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// True when anything differs from the cleared state
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    pub fn matches(&self, item: &Item) -> bool {
        if !self.include_resolved && item.is_resolved {
            return false;
        }

        if !self.query.is_empty() {
            let needle = self.query.to_lowercase();
            let hit = [&item.title, &item.description, &item.location]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        if self.category.is_some_and(|c| c != item.category) {
            return false;
        }

        if self.status.is_some_and(|s| s != item.status) {
            return false;
        }

        true
    }
}

pub fn active_items(items: &[Item]) -> Vec<&Item> {
    items.iter().filter(|item| item.is_active()).collect()
}

pub fn resolved_items(items: &[Item]) -> Vec<&Item> {
    items.iter().filter(|item| item.is_resolved).collect()
}

/// First `limit` active items, in collection order
pub fn recent_active(items: &[Item], limit: usize) -> Vec<&Item> {
    items.iter().filter(|item| item.is_active()).take(limit).collect()
}

pub fn stats(items: &[Item]) -> Stats {
    items.iter().fold(Stats::default(), |mut stats, item| {
        match (item.is_resolved, item.status) {
            (true, _) => stats.resolved += 1,
            (false, ItemStatus::Lost) => stats.active_lost += 1,
            (false, ItemStatus::Found) => stats.active_found += 1,
        }
        stats
    })
}

pub fn filter<'a>(items: &'a [Item], filter: &ItemFilter) -> Vec<&'a Item> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemId;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn make_item(id: &str, title: &str, category: Category, status: ItemStatus, resolved: bool) -> Item {
        Item {
            id: ItemId::new(id),
            title: title.to_string(),
            description: format!("{} description", title),
            category,
            status,
            location: "Student Union".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            contact_email: "someone@university.edu".to_string(),
            contact_name: "Someone".to_string(),
            image_url: String::new(),
            is_resolved: resolved,
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            make_item("1", "Wallet", Category::Accessories, ItemStatus::Lost, false),
            make_item("2", "Calculus textbook", Category::Books, ItemStatus::Found, false),
            make_item("3", "AirPods", Category::Electronics, ItemStatus::Lost, true),
            make_item("4", "Dorm keys", Category::Keys, ItemStatus::Found, false),
            make_item("5", "Blue hoodie", Category::Clothing, ItemStatus::Lost, false),
        ]
    }

    fn ids(items: Vec<&Item>) -> Vec<&str> {
        items.into_iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_stats_counts() {
        let items = sample();
        let stats = stats(&items);
        assert_eq!(stats, Stats { active_lost: 2, active_found: 2, resolved: 1 });
        assert_eq!(stats.active_lost + stats.active_found, active_items(&items).len());
        assert_eq!(stats.resolved, resolved_items(&items).len());
    }

    #[test]
    fn test_text_query_is_case_insensitive_across_fields() {
        let mut items = sample();
        items[3].location = "Engineering Building".to_string();

        assert_eq!(ids(filter(&items, &ItemFilter::text("WALLET"))), vec!["1"]);
        assert_eq!(ids(filter(&items, &ItemFilter::text("textbook desc"))), vec!["2"]);
        assert_eq!(ids(filter(&items, &ItemFilter::text("engineering"))), vec!["4"]);
        assert!(filter(&items, &ItemFilter::text("xyz")).is_empty());
    }

    #[test]
    fn test_empty_query_matches_all_active() {
        let items = sample();
        assert_eq!(ids(filter(&items, &ItemFilter::text(""))), vec!["1", "2", "4", "5"]);
    }

    #[test]
    fn test_whitespace_in_query_is_literal() {
        let mut items = sample();
        assert!(filter(&items, &ItemFilter::text("   ")).is_empty());
        // "Wallet description" contains "wallet "
        assert_eq!(ids(filter(&items, &ItemFilter::text("wallet "))), vec!["1"]);
        assert_eq!(ids(filter(&items, &ItemFilter::text("blue hoodie"))), vec!["5"]);

        items[0].description = "Brown leather".to_string();
        assert!(filter(&items, &ItemFilter::text("wallet ")).is_empty());
        assert_eq!(ids(filter(&items, &ItemFilter::text("wallet"))), vec!["1"]);
    }

    #[test]
    fn test_resolved_excluded_before_other_criteria() {
        let items = sample();
        let mut f = ItemFilter {
            query: "airpods".to_string(),
            category: Some(Category::Electronics),
            status: Some(ItemStatus::Lost),
            include_resolved: false,
        };
        assert!(filter(&items, &f).is_empty());

        f.include_resolved = true;
        assert_eq!(ids(filter(&items, &f)), vec!["3"]);
    }

    #[test]
    fn test_category_and_status() {
        let items = sample();
        let by_status = ItemFilter { status: Some(ItemStatus::Lost), ..Default::default() };
        assert_eq!(ids(filter(&items, &by_status)), vec!["1", "5"]);

        let by_both = ItemFilter {
            category: Some(Category::Keys),
            status: Some(ItemStatus::Found),
            ..Default::default()
        };
        assert_eq!(ids(filter(&items, &by_both)), vec!["4"]);

        let mismatch = ItemFilter {
            category: Some(Category::Keys),
            status: Some(ItemStatus::Lost),
            ..Default::default()
        };
        assert!(filter(&items, &mismatch).is_empty());
    }

    #[test]
    fn test_filter_is_active() {
        assert!(!ItemFilter::default().is_active());
        assert!(ItemFilter::text("a").is_active());
        assert!(ItemFilter { include_resolved: true, ..Default::default() }.is_active());
        assert!(ItemFilter { category: Some(Category::Bags), ..Default::default() }.is_active());
    }

    #[test]
    fn test_recent_active_limit() {
        let items = sample();
        assert_eq!(ids(recent_active(&items, 2)), vec!["1", "2"]);
        assert_eq!(ids(recent_active(&items, 10)), vec!["1", "2", "4", "5"]);
        assert!(recent_active(&items, 0).is_empty());
    }
}
