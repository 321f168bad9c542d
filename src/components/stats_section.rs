//! Stats Section Component
//!
//! Home page counters: active lost, active found, resolved.

use leptos::prelude::*;

use crate::query::Stats;
use crate::store::{use_app_store, AppStateStoreFields};

/// (label, tone class, count accessor) per card, in display order
const STAT_CARDS: [(&str, &str, fn(&Stats) -> usize); 3] = [
    ("Active Lost Items", "tone-lost", |s| s.active_lost),
    ("Active Found Items", "tone-found", |s| s.active_found),
    ("Resolved Items", "tone-resolved", |s| s.resolved),
];

#[component]
fn StatCard(value: Signal<usize>, label: &'static str, tone: &'static str) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class=format!("stat-icon {}", tone)></div>
            <span class="stat-value">{move || value.get()}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

/// Live board statistics
#[component]
pub fn StatsSection() -> impl IntoView {
    let store = use_app_store();
    let stats = Memo::new(move |_| store.board().read().stats());

    view! {
        <section class="stats-section">
            <h2 class="stats-title">"Campus Statistics"</h2>
            <div class="stats-grid">
                {STAT_CARDS
                    .into_iter()
                    .map(|(label, tone, count)| {
                        view! {
                            <StatCard
                                value=Signal::derive(move || count(&stats.get()))
                                label=label
                                tone=tone
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
