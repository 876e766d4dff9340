//! Container wiring the tab strip, the content panels and the initial
//! platform-based selection.

use leptos::logging::log;
use leptos::prelude::*;

use super::context::DownloadTabsContext;
use super::registry::render_panel_content;
use super::state::{TabKey, ALL_TABS};
use super::tab::TabHandle;
use crate::platform::Os;

/// Content panel for one tab. Hidden unless its key is active.
#[component]
fn TabPanel(key: TabKey, tabs_store: DownloadTabsContext) -> impl IntoView {
    let is_active = move || tabs_store.selection.get().is_active(key);

    view! {
        <div
            class="tab__content"
            class:active=is_active
            id=key.panel_id()
            data-tab-info=""
        >
            {render_panel_content(key)}
        </div>
    }
}

#[component]
pub fn DownloadTabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<DownloadTabsContext>()
        .expect("DownloadTabsContext context not found");

    // Setup runs synchronously, so the default selection is in place before
    // any click handler can fire.
    let os = Os::from_navigator();
    log!("initial platform: {}", os.as_str());
    tabs_store.init_default_selection(os);

    view! {
        <div class="tabs">
            <div class="tabs__bar">
                {ALL_TABS
                    .into_iter()
                    .map(|key| view! { <TabHandle key=key /> })
                    .collect_view()}
            </div>
            <div class="tabs__panels">
                {ALL_TABS
                    .into_iter()
                    .map(|key| view! { <TabPanel key=key tabs_store=tabs_store /> })
                    .collect_view()}
            </div>
        </div>
    }
}
