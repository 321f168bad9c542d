//! Navigation Bar Component
//!
//! Logo, page links and the report call-to-action; collapses into a menu on
//! narrow screens.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};

const NAV_LINKS: &[(&str, Page)] = &[
    ("Home", Page::Home),
    ("Browse Items", Page::Browse),
    ("Report Item", Page::Report(None)),
];

/// Whether `current` belongs to the section of `link`
fn is_section(current: Page, link: Page) -> bool {
    matches!(
        (current, link),
        (Page::Home, Page::Home) | (Page::Browse, Page::Browse) | (Page::Report(_), Page::Report(_))
    )
}

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let (menu_open, set_menu_open) = signal(false);

    let links = move |class: &'static str| {
        NAV_LINKS
            .iter()
            .map(|(label, target)| {
                let target = *target;
                let link_class = move || {
                    if is_section(ctx.page.get(), target) {
                        format!("{} active", class)
                    } else {
                        class.to_string()
                    }
                };
                view! {
                    <button
                        class=link_class
                        on:click=move |_| {
                            set_menu_open.set(false);
                            ctx.navigate(target);
                        }
                    >
                        {*label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <button class="logo" on:click=move |_| ctx.navigate(Page::Home)>
                    <span class="logo-mark"></span>
                    <span class="logo-text">"Campus"<span class="logo-accent">"Find"</span></span>
                </button>

                <div class="nav-links">{links("nav-link")}</div>

                <button class="btn btn-primary nav-cta" on:click=move |_| ctx.navigate(Page::Report(None))>
                    "Report Item"
                </button>

                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="mobile-menu">{links("mobile-link")}</div>
            </Show>
        </nav>
    }
}
