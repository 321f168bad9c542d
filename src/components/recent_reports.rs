//! Recent Reports Component
//!
//! Newest active reports on the home page.

use leptos::prelude::*;

use crate::components::ItemCard;
use crate::config::BoardConfig;
use crate::context::{use_app_context, Page};
use crate::models::Item;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RecentReports() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let limit = expect_context::<BoardConfig>().recent_limit;

    let recent = Memo::new(move |_| {
        store
            .board()
            .read()
            .recent_active(limit)
            .into_iter()
            .cloned()
            .collect::<Vec<Item>>()
    });

    view! {
        <section class="recent-reports">
            <div class="section-header">
                <div>
                    <h2>"Recent Reports"</h2>
                    <p class="muted">"Latest lost and found items from the campus community"</p>
                </div>
                <button class="btn btn-ghost" on:click=move |_| ctx.navigate(Page::Browse)>
                    "View All →"
                </button>
            </div>

            <Show
                when=move || !recent.get().is_empty()
                fallback=|| view! {
                    <div class="empty-state">
                        <p class="empty-title">"No active reports yet"</p>
                        <p class="muted">"Be the first to report a lost or found item!"</p>
                    </div>
                }
            >
                <div class="item-grid">
                    <For
                        each=move || recent.get()
                        key=|item| (item.id.clone(), item.is_resolved)
                        children=move |item| view! { <ItemCard item=item /> }
                    />
                </div>
            </Show>
        </section>
    }
}
