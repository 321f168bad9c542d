//! UI Components
//!
//! Reusable Leptos components.

mod filter_bar;
mod footer;
mod hero_section;
mod item_card;
mod nav_bar;
mod recent_reports;
mod report_form;
mod stats_section;

pub use filter_bar::FilterBar;
pub use footer::Footer;
pub use hero_section::HeroSection;
pub use item_card::ItemCard;
pub use nav_bar::NavBar;
pub use recent_reports::RecentReports;
pub use report_form::ReportItemForm;
pub use stats_section::StatsSection;
