//! Footer Component

use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::context::{use_app_context, Page};

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let year = Utc::now().year();

    view! {
        <footer class="footer">
            <button class="logo small" on:click=move |_| ctx.navigate(Page::Home)>
                <span class="logo-mark"></span>
                <span class="logo-text">"Campus"<span class="logo-accent">"Find"</span></span>
            </button>
            <p class="muted">
                {format!("© {} CampusFind. Helping students reconnect with their belongings.", year)}
            </p>
        </footer>
    }
}
