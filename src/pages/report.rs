//! Report Page

use leptos::prelude::*;

use crate::components::ReportItemForm;
use crate::models::ItemStatus;

#[component]
pub fn ReportPage(preset: Option<ItemStatus>) -> impl IntoView {
    view! {
        <div class="page report">
            <div class="page-header centered">
                <h1>"Report an Item"</h1>
                <p class="muted">"Fill out the form below to report a lost or found item"</p>
            </div>
            <ReportItemForm preset=preset />
        </div>
    }
}
