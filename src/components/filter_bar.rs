//! Filter Bar Component
//!
//! Search box, category/status selects and the resolved toggle for the browse page.

use leptos::prelude::*;

use crate::models::{Category, ItemStatus};
use crate::store::{store_clear_filter, use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    let is_active = Memo::new(move |_| store.filter().read().is_active());

    view! {
        <div class="filter-bar">
            <div class="filter-row">
                <input
                    type="text"
                    class="filter-search"
                    placeholder="Search items by title, description, or location..."
                    prop:value=move || store.filter().read().query.clone()
                    on:input=move |ev| {
                        store.filter().write().query = event_target_value(&ev);
                    }
                />

                <select
                    class="filter-select"
                    on:change=move |ev| {
                        store.filter().write().category = Category::from_label(&event_target_value(&ev));
                    }
                >
                    <option value="all" prop:selected=move || store.filter().read().category.is_none()>
                        "All Categories"
                    </option>
                    {Category::ALL.into_iter().map(|category| view! {
                        <option
                            value=category.label()
                            prop:selected=move || store.filter().read().category == Some(category)
                        >
                            {category.label()}
                        </option>
                    }).collect_view()}
                </select>

                <select
                    class="filter-select"
                    on:change=move |ev| {
                        store.filter().write().status = ItemStatus::from_str(&event_target_value(&ev));
                    }
                >
                    <option value="all" prop:selected=move || store.filter().read().status.is_none()>
                        "All Status"
                    </option>
                    {[ItemStatus::Lost, ItemStatus::Found].into_iter().map(|status| view! {
                        <option
                            value=status.as_str()
                            prop:selected=move || store.filter().read().status == Some(status)
                        >
                            {status.label()}
                        </option>
                    }).collect_view()}
                </select>
            </div>

            <div class="filter-row filter-footer">
                <label class="filter-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || store.filter().read().include_resolved
                        on:change=move |ev| {
                            store.filter().write().include_resolved = event_target_checked(&ev);
                        }
                    />
                    "Show resolved items"
                </label>

                <Show when=move || is_active.get()>
                    <button class="btn btn-ghost" on:click=move |_| store_clear_filter(&store)>
                        "Clear filters"
                    </button>
                </Show>
            </div>
        </div>
    }
}
