//! Hero Section Component

use leptos::prelude::*;

use crate::context::{use_app_context, Page};
use crate::models::ItemStatus;

#[component]
pub fn HeroSection() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="hero">
            <div class="hero-inner">
                <span class="hero-badge">"BVM Engineering Campus"</span>
                <h1 class="hero-title">"Lost something on campus?"</h1>
                <p class="hero-text">
                    "BVM CampusFind helps college students reconnect with their lost belongings. \
                     Report lost items or help others find theirs, building a helpful campus community together."
                </p>
                <div class="hero-actions">
                    <button
                        class="btn btn-accent"
                        on:click=move |_| ctx.navigate(Page::Report(Some(ItemStatus::Lost)))
                    >
                        "Report Lost Item"
                    </button>
                    <button
                        class="btn btn-outline"
                        on:click=move |_| ctx.navigate(Page::Report(Some(ItemStatus::Found)))
                    >
                        "Report Found Item"
                    </button>
                </div>
            </div>
        </section>
    }
}
