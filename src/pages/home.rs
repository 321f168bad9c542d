//! Home Page

use leptos::prelude::*;

use crate::components::{HeroSection, RecentReports, StatsSection};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <HeroSection />
        <StatsSection />
        <RecentReports />
    }
}
