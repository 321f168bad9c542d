//! Report Form Component
//!
//! Collects a lost/found report, validates it and adds it to the board after
//! the configured delay.

use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::BoardConfig;
use crate::context::{use_app_context, Page};
use crate::models::{Category, ItemStatus};
use crate::report::ReportForm;
use crate::store::{store_add_item, use_app_store};

fn field_value(form: RwSignal<ReportForm>, get: fn(&ReportForm) -> &String) -> Signal<String> {
    Signal::derive(move || form.with(|f| get(f).clone()))
}

/// Labelled single-line input
#[component]
fn FormField(
    label: &'static str,
    name: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=name>{label}</label>
            <input
                id=name
                name=name
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn ReportItemForm(preset: Option<ItemStatus>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let delay_ms = expect_context::<BoardConfig>().submit_delay_ms;

    let form = RwSignal::new(ReportForm::new(
        preset.unwrap_or(ItemStatus::Lost),
        Utc::now().date_naive(),
    ));
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let new_item = match form.with_untracked(|f| f.validate()) {
            Ok(new_item) => new_item,
            Err(e) => {
                log::debug!("report rejected: {}", e);
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        submitting.set(true);

        spawn_local(async move {
            if delay_ms > 0 {
                TimeoutFuture::new(delay_ms).await;
            }
            store_add_item(&store, new_item);
            submitting.set(false);
            ctx.navigate(Page::Browse);
        });
    };

    let status_class = move |status: ItemStatus| {
        let selected = form.with(|f| f.status == status);
        match (status, selected) {
            (ItemStatus::Lost, true) => "status-choice lost selected",
            (ItemStatus::Found, true) => "status-choice found selected",
            _ => "status-choice",
        }
    };

    view! {
        <form class="report-form" on:submit=on_submit>
            <div class="form-field">
                <span class="form-label">"What are you reporting?"</span>
                <div class="status-choices">
                    <button
                        type="button"
                        class=move || status_class(ItemStatus::Lost)
                        on:click=move |_| form.update(|f| f.status = ItemStatus::Lost)
                    >
                        "Lost Item"
                    </button>
                    <button
                        type="button"
                        class=move || status_class(ItemStatus::Found)
                        on:click=move |_| form.update(|f| f.status = ItemStatus::Found)
                    >
                        "Found Item"
                    </button>
                </div>
            </div>

            <FormField
                label="Item Title *"
                name="title"
                placeholder="e.g., Black iPhone 15 Pro"
                value=field_value(form, |f| &f.title)
                on_input=Callback::new(move |v: String| form.update(|f| f.title = v))
            />

            <div class="form-field">
                <label for="description">"Description *"</label>
                <textarea
                    id="description"
                    name="description"
                    placeholder="Describe the item in detail. Include any distinguishing features..."
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>
            </div>

            <div class="form-field">
                <label for="category">"Category *"</label>
                <select
                    id="category"
                    name="category"
                    on:change=move |ev| {
                        if let Some(category) = Category::from_label(&event_target_value(&ev)) {
                            form.update(|f| f.category = category);
                        }
                    }
                >
                    {Category::ALL.into_iter().map(|category| view! {
                        <option
                            value=category.label()
                            prop:selected=move || form.with(|f| f.category == category)
                        >
                            {category.label()}
                        </option>
                    }).collect_view()}
                </select>
            </div>

            <FormField
                label="Location *"
                name="location"
                placeholder="e.g., Main Library, 2nd Floor"
                value=field_value(form, |f| &f.location)
                on_input=Callback::new(move |v: String| form.update(|f| f.location = v))
            />

            <div class="form-field">
                <label for="date">
                    {move || form.with(|f| format!("Date {} *", f.status.label()))}
                </label>
                <input
                    id="date"
                    name="date"
                    type="date"
                    prop:value=move || form.with(|f| f.date.clone())
                    on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))
                />
            </div>

            <div class="form-row">
                <FormField
                    label="Your Name *"
                    name="contactName"
                    placeholder="John Doe"
                    value=field_value(form, |f| &f.contact_name)
                    on_input=Callback::new(move |v: String| form.update(|f| f.contact_name = v))
                />
                <FormField
                    label="Your Email *"
                    name="contactEmail"
                    input_type="email"
                    placeholder="john@university.edu"
                    value=field_value(form, |f| &f.contact_email)
                    on_input=Callback::new(move |v: String| form.update(|f| f.contact_email = v))
                />
            </div>

            <FormField
                label="Image URL (Optional)"
                name="imageUrl"
                placeholder="https://example.com/image.jpg"
                value=field_value(form, |f| &f.image_url)
                on_input=Callback::new(move |v: String| form.update(|f| f.image_url = v))
            />
            <p class="form-hint">
                "Paste a URL to an image of the item. A default image will be used if left empty."
            </p>

            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}

            <button type="submit" class="btn btn-primary btn-block" disabled=move || submitting.get()>
                {move || if submitting.get() { "Submitting..." } else { "Submit Report" }}
            </button>
        </form>
    }
}
