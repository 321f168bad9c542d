//! Seed Collection
//!
//! The fixed set of reports the board starts with on every load.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{Category, Item, ItemId, ItemStatus};

struct SeedRow {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: Category,
    status: ItemStatus,
    location: &'static str,
    date: &'static str,
    contact_name: &'static str,
    contact_email: &'static str,
    image_url: &'static str,
    resolved: bool,
    created_at: &'static str,
}

impl SeedRow {
    fn to_item(&self) -> Option<Item> {
        let date = NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()?;
        let created_at = DateTime::parse_from_rfc3339(self.created_at).ok()?.with_timezone(&Utc);
        Some(Item {
            id: ItemId::new(self.id),
            title: self.title.to_string(),
            description: self.description.to_string(),
            category: self.category,
            status: self.status,
            location: self.location.to_string(),
            date,
            contact_email: self.contact_email.to_string(),
            contact_name: self.contact_name.to_string(),
            image_url: self.image_url.to_string(),
            is_resolved: self.resolved,
            created_at,
        })
    }
}

const SEED: &[SeedRow] = &[
    SeedRow {
        id: "seed-1",
        title: "Black iPhone 15 Pro",
        description: "Black iPhone in a clear case with a sticker of a mountain on the back. Lock screen shows a photo of a golden retriever.",
        category: Category::Electronics,
        status: ItemStatus::Lost,
        location: "Main Library, 2nd Floor",
        date: "2025-01-14",
        contact_name: "Aarav Patel",
        contact_email: "aarav.patel@university.edu",
        image_url: "https://images.unsplash.com/photo-1695048133142-1a20484d2569?w=400&h=300&fit=crop",
        resolved: false,
        created_at: "2025-01-14T15:30:00Z",
    },
    SeedRow {
        id: "seed-2",
        title: "Student ID Card",
        description: "Found a student ID card near the vending machines. Name starts with 'M'. Handed to the front desk is also an option.",
        category: Category::IdCards,
        status: ItemStatus::Found,
        location: "Engineering Block A, Ground Floor",
        date: "2025-01-13",
        contact_name: "Priya Shah",
        contact_email: "priya.shah@university.edu",
        image_url: "https://images.unsplash.com/photo-1578670812003-60745e2c2ea9?w=400&h=300&fit=crop",
        resolved: false,
        created_at: "2025-01-13T10:05:00Z",
    },
    SeedRow {
        id: "seed-3",
        title: "Blue JanSport Backpack",
        description: "Navy blue backpack with a laptop sleeve and a keychain shaped like a cat. Contains lecture notes for Thermodynamics.",
        category: Category::Bags,
        status: ItemStatus::Lost,
        location: "Cafeteria",
        date: "2025-01-12",
        contact_name: "Rohan Mehta",
        contact_email: "rohan.mehta@university.edu",
        image_url: "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=400&h=300&fit=crop",
        resolved: false,
        created_at: "2025-01-12T13:45:00Z",
    },
    SeedRow {
        id: "seed-4",
        title: "Set of Keys with Red Lanyard",
        description: "Three keys and a small bottle opener on a red lanyard. Found on a bench outside the auditorium.",
        category: Category::Keys,
        status: ItemStatus::Found,
        location: "Auditorium Entrance",
        date: "2025-01-11",
        contact_name: "Neha Joshi",
        contact_email: "neha.joshi@university.edu",
        image_url: "https://images.unsplash.com/photo-1582139329536-e7284fece509?w=400&h=300&fit=crop",
        resolved: false,
        created_at: "2025-01-11T17:20:00Z",
    },
    SeedRow {
        id: "seed-5",
        title: "Engineering Mathematics Textbook",
        description: "B.S. Grewal, 44th edition. Name written on the inside cover and lots of pencil notes in chapter 4.",
        category: Category::Books,
        status: ItemStatus::Lost,
        location: "Lecture Hall 3",
        date: "2025-01-10",
        contact_name: "Karan Desai",
        contact_email: "karan.desai@university.edu",
        image_url: "https://images.unsplash.com/photo-1544947950-fa07a98d237f?w=400&h=300&fit=crop",
        resolved: false,
        created_at: "2025-01-10T09:15:00Z",
    },
    SeedRow {
        id: "seed-6",
        title: "Grey Hoodie",
        description: "Grey zip-up hoodie, size M, with the college logo on the chest. Left on a chair in the computer lab.",
        category: Category::Clothing,
        status: ItemStatus::Found,
        location: "Computer Lab 2",
        date: "2025-01-09",
        contact_name: "Ananya Rao",
        contact_email: "ananya.rao@university.edu",
        image_url: "https://images.unsplash.com/photo-1556821840-3a63f95609a7?w=400&h=300&fit=crop",
        resolved: false,
        created_at: "2025-01-09T16:00:00Z",
    },
    SeedRow {
        id: "seed-7",
        title: "Silver Wristwatch",
        description: "Analog watch with a metal strap. Engraving on the back reads 'To V, with love'.",
        category: Category::Accessories,
        status: ItemStatus::Lost,
        location: "Sports Complex Locker Room",
        date: "2025-01-07",
        contact_name: "Vikram Nair",
        contact_email: "vikram.nair@university.edu",
        image_url: "https://images.unsplash.com/photo-1524592094714-0f0654e20314?w=400&h=300&fit=crop",
        resolved: true,
        created_at: "2025-01-07T11:10:00Z",
    },
    SeedRow {
        id: "seed-8",
        title: "Wireless Earbuds Case",
        description: "White charging case, no earbuds inside. Found under a desk after the morning lab session.",
        category: Category::Electronics,
        status: ItemStatus::Found,
        location: "Electronics Lab",
        date: "2025-01-06",
        contact_name: "Sneha Kulkarni",
        contact_email: "sneha.kulkarni@university.edu",
        image_url: "https://images.unsplash.com/photo-1606220588913-b3aacb4d2f46?w=400&h=300&fit=crop",
        resolved: true,
        created_at: "2025-01-06T08:40:00Z",
    },
];

/// The seed reports, in table order
pub fn seed_items() -> Vec<Item> {
    SEED.iter().filter_map(SeedRow::to_item).collect()
}
