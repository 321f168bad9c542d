//! Board Models
//!
//! Lost/found item records and their closed vocabularies.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

/// Characters escaped inside a mailto query value
const MAILTO_QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'=');

/// Opaque item identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Item category (fixed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Books,
    Clothing,
    Accessories,
    #[serde(rename = "ID & Cards")]
    IdCards,
    Keys,
    Bags,
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 8] = [
        Category::Electronics,
        Category::Books,
        Category::Clothing,
        Category::Accessories,
        Category::IdCards,
        Category::Keys,
        Category::Bags,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Books => "Books",
            Category::Clothing => "Clothing",
            Category::Accessories => "Accessories",
            Category::IdCards => "ID & Cards",
            Category::Keys => "Keys",
            Category::Bags => "Bags",
            Category::Other => "Other",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == s)
    }
}

/// Whether the reporter lost or found the item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Lost,
    Found,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Lost => "lost",
            ItemStatus::Found => "found",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Lost => "Lost",
            ItemStatus::Found => "Found",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "lost" => Some(ItemStatus::Lost),
            "found" => Some(ItemStatus::Found),
            _ => None,
        }
    }
}

/// A lost/found report as stored on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub status: ItemStatus,
    pub location: String,
    /// Day the item was lost or found
    pub date: NaiveDate,
    pub contact_email: String,
    pub contact_name: String,
    pub image_url: String,
    pub is_resolved: bool,
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn is_active(&self) -> bool {
        !self.is_resolved
    }

    /// `mailto:` link that opens a message to the reporter
    pub fn contact_mailto(&self) -> String {
        let subject = format!("Regarding your {} item: {}", self.status.as_str(), self.title);
        format!(
            "mailto:{}?subject={}",
            self.contact_email,
            utf8_percent_encode(&subject, MAILTO_QUERY)
        )
    }

    /// Event date as shown on cards, e.g. `Jan 5, 2025`
    pub fn display_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }
}

/// Fields supplied by the reporter; id, timestamp and resolution are assigned by the board
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub status: ItemStatus,
    pub location: String,
    pub date: NaiveDate,
    pub contact_email: String,
    pub contact_name: String,
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet() -> Item {
        Item {
            id: ItemId::new("1"),
            title: "Black Wallet".to_string(),
            description: "Leather, has a student ID inside".to_string(),
            category: Category::Accessories,
            status: ItemStatus::Lost,
            location: "Main Library".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            contact_email: "jane@university.edu".to_string(),
            contact_name: "Jane".to_string(),
            image_url: "https://example.com/w.jpg".to_string(),
            is_resolved: false,
            created_at: DateTime::parse_from_rfc3339("2025-01-05T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    #[test]
    fn test_category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::from_label("all"), None);
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(ItemStatus::from_str("found"), Some(ItemStatus::Found));
        assert_eq!(ItemStatus::from_str("Found"), None);
        assert_eq!(ItemStatus::Lost.label(), "Lost");
    }

    #[test]
    fn test_serde_shape() {
        let value = serde_json::to_value(wallet()).unwrap();
        assert_eq!(value["id"], "1");
        assert_eq!(value["status"], "lost");
        assert_eq!(value["category"], "Accessories");
        assert_eq!(value["date"], "2025-01-05");
        assert_eq!(value["contactEmail"], "jane@university.edu");
        assert_eq!(value["isResolved"], false);

        let mut ids = wallet();
        ids.category = Category::IdCards;
        let value = serde_json::to_value(&ids).unwrap();
        assert_eq!(value["category"], "ID & Cards");
        let back: Item = serde_json::from_value(value).unwrap();
        assert_eq!(back, ids);
    }

    #[test]
    fn test_contact_mailto() {
        assert_eq!(
            wallet().contact_mailto(),
            "mailto:jane@university.edu?subject=Regarding%20your%20lost%20item:%20Black%20Wallet"
        );
    }

    #[test]
    fn test_display_date() {
        assert_eq!(wallet().display_date(), "Jan 5, 2025");
    }
}
