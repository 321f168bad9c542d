//! Browse Page
//!
//! Filterable grid of every report on the board.

use leptos::prelude::*;

use crate::components::{FilterBar, ItemCard};
use crate::models::Item;
use crate::store::{store_clear_filter, use_app_store, AppStateStoreFields};

fn showing_label(count: usize) -> String {
    format!("Showing {} item{}", count, if count == 1 { "" } else { "s" })
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_app_store();

    let filtered = Memo::new(move |_| {
        let filter = store.filter().get();
        store
            .board()
            .read()
            .filter(&filter)
            .into_iter()
            .cloned()
            .collect::<Vec<Item>>()
    });
    let has_filters = Memo::new(move |_| store.filter().read().is_active());

    view! {
        <div class="page dashboard">
            <div class="page-header">
                <h1>"Browse Items"</h1>
                <p class="muted">"Search and filter lost and found items from the campus community"</p>
            </div>

            <FilterBar />

            <p class="result-count">{move || showing_label(filtered.get().len())}</p>

            <Show
                when=move || !filtered.get().is_empty()
                fallback=move || view! {
                    <div class="empty-state">
                        <p class="empty-title">"No items found"</p>
                        <p class="muted">"Try adjusting your search or filters"</p>
                        <Show when=move || has_filters.get()>
                            <button class="btn btn-outline" on:click=move |_| store_clear_filter(&store)>
                                "Clear all filters"
                            </button>
                        </Show>
                    </div>
                }
            >
                <div class="item-grid">
                    <For
                        each=move || filtered.get()
                        key=|item| (item.id.clone(), item.is_resolved)
                        children=move |item| view! { <ItemCard item=item /> }
                    />
                </div>
            </Show>
        </div>
    }
}
