//! Reactive store for the download tabs, shared via Leptos context.

use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use super::state::{TabKey, TabSelection};
use crate::platform::Os;

#[derive(Clone, Copy)]
pub struct DownloadTabsContext {
    pub selection: RwSignal<TabSelection>,
}

impl DownloadTabsContext {
    pub fn new() -> Self {
        Self {
            selection: RwSignal::new(TabSelection::new()),
        }
    }

    pub fn select_tab(&self, key: TabKey) {
        leptos::logging::log!("select_tab: '{}'", key.panel_id());
        self.selection.update(|selection| selection.select(key));
    }

    /// Forced first transition, run once at setup.
    ///
    /// An explicit `?tab=` query parameter wins; otherwise the tab mapped
    /// from the detected platform is selected. Also starts mirroring the
    /// active tab back into the URL.
    pub fn init_default_selection(&self, os: Os) {
        match tab_from_query() {
            Some(key) => self.select_tab(key),
            None => self.select_tab(TabKey::default_for_os(os)),
        }
        self.init_url_sync();
    }

    fn init_url_sync(&self) {
        let this = *self;
        Effect::new(move |_| {
            if let Some(key) = this.selection.get().active() {
                let query_string = serde_qs::to_string(&HashMap::from([(
                    "tab".to_string(),
                    key.panel_id().to_string(),
                )]))
                .unwrap_or_default();

                let new_url = format!("?{}", query_string);

                // Use untracked reads so the URL itself never becomes a
                // reactive dependency.
                let current_search = window()
                    .and_then(|w| w.location().search().ok())
                    .unwrap_or_default();

                if current_search != new_url {
                    if let Some(w) = window() {
                        if let Ok(history) = w.history() {
                            let _ = history.replace_state_with_url(
                                &wasm_bindgen::JsValue::NULL,
                                "",
                                Some(&new_url),
                            );
                        }
                    }
                }
            }
        });
    }
}

fn tab_from_query() -> Option<TabKey> {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_tab_param(&search)
}

/// Extracts the requested tab from a raw query string, if any.
fn parse_tab_param(search: &str) -> Option<TabKey> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("tab").and_then(|value| TabKey::from_panel_id(value))
}
