//! Application Context
//!
//! Navigation state shared via Leptos Context API.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::models::ItemStatus;

/// Top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Browse,
    /// Report form, optionally preset to lost or found
    Report(Option<ItemStatus>),
}

impl Page {
    /// Map a URL path and query string to a page; unknown paths go home
    pub fn from_location(path: &str, search: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Page::Home,
            "/dashboard" => Page::Browse,
            "/report" => {
                let preset = search
                    .trim_start_matches('?')
                    .split('&')
                    .filter_map(|pair| pair.split_once('='))
                    .find(|(key, _)| *key == "type")
                    .and_then(|(_, value)| ItemStatus::from_str(value));
                Page::Report(preset)
            }
            _ => Page::Home,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Page::Home => "/".to_string(),
            Page::Browse => "/dashboard".to_string(),
            Page::Report(None) => "/report".to_string(),
            Page::Report(Some(status)) => format!("/report?type={}", status.as_str()),
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
        }
    }

    /// Switch page and record it in browser history
    pub fn navigate(&self, page: Page) {
        let path = page.path();
        log::debug!("navigate to {}", path);
        if let Ok(history) = window().history() {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path.as_str())) {
                log::warn!("history push failed: {:?}", e);
            }
        }
        self.set_page.set(page);
    }
}

/// Page implied by the browser's current URL
pub fn initial_page() -> Page {
    let location = window().location();
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    Page::from_location(&path, &search)
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
