//! CampusFind App
//!
//! Root component: provides the store, config and navigation context, then
//! renders the current page between the navbar and footer.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Footer, NavBar};
use crate::config::BoardConfig;
use crate::context::{initial_page, AppContext, Page};
use crate::pages::{DashboardPage, HomePage, ReportPage};
use crate::store::AppState;

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::new(&config));
    let (page, set_page) = signal(initial_page());

    // Provide context to all children
    provide_context(store);
    provide_context(config);
    provide_context(AppContext::new((page, set_page)));

    // Back/forward buttons
    let _ = window_event_listener(leptos::ev::popstate, move |_| {
        let page = initial_page();
        log::debug!("popstate -> {:?}", page);
        set_page.set(page);
    });

    view! {
        <div class="app-layout">
            <NavBar />

            <main class="main-content">
                {move || match page.get() {
                    Page::Home => view! { <HomePage /> }.into_any(),
                    Page::Browse => view! { <DashboardPage /> }.into_any(),
                    Page::Report(preset) => view! { <ReportPage preset=preset /> }.into_any(),
                }}
            </main>

            <Footer />
        </div>
    }
}
