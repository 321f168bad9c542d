//! Item Card Component
//!
//! One report on the board: image, badges, details and the owner actions.

use leptos::prelude::*;

use crate::models::{Item, ItemStatus};
use crate::store::{store_resolve_item, use_app_store};

/// Card for a single lost/found report
#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let store = use_app_store();

    let id = item.id.clone();
    let resolved = item.is_resolved;
    let mailto = item.contact_mailto();
    let date = item.display_date();
    let card_class = if resolved { "item-card resolved" } else { "item-card" };

    let status_badge = match item.status {
        ItemStatus::Lost => view! { <span class="badge badge-lost">"Lost"</span> }.into_any(),
        ItemStatus::Found => view! { <span class="badge badge-found">"Found"</span> }.into_any(),
    };

    view! {
        <div class=card_class>
            <Show when=move || resolved>
                <span class="badge badge-claimed claimed-corner">"Claimed"</span>
            </Show>

            <div class="item-card-image">
                <img src=item.image_url.clone() alt=item.title.clone() />
            </div>

            <div class="item-card-body">
                <div class="item-card-badges">
                    {status_badge}
                    <span class="badge badge-category">{item.category.label()}</span>
                </div>

                <h3 class="item-card-title">{item.title.clone()}</h3>
                <p class="item-card-description">{item.description.clone()}</p>

                <div class="item-card-meta">
                    <span class="meta-location">{item.location.clone()}</span>
                    <span class="meta-date">{date}</span>
                </div>

                {if resolved {
                    view! {
                        <div class="reunited-note">"Successfully Reunited"</div>
                    }.into_any()
                } else {
                    view! {
                        <div class="item-card-actions">
                            <a class="btn btn-primary" href=mailto>"Contact Owner"</a>
                            <button
                                class="btn btn-ghost"
                                on:click=move |_| {
                                    store_resolve_item(&store, &id);
                                }
                            >
                                "Mark as Reunited"
                            </button>
                        </div>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
