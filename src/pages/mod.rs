//! Pages
//!
//! One component per top-level route.

mod dashboard;
mod home;
mod report;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use report::ReportPage;
