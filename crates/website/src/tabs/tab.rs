use leptos::prelude::*;

use super::context::DownloadTabsContext;
use super::labels::tab_label;
use super::state::TabKey;

/// Clickable tab handle. Activates its content panel on click.
#[component]
pub fn TabHandle(key: TabKey) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<DownloadTabsContext>()
        .expect("DownloadTabsContext context not found");

    let is_active = Memo::new(move |_| tabs_store.selection.get().is_active(key));
    let on_click = move |_| tabs_store.select_tab(key);

    view! {
        <div
            class="tab"
            class:active=is_active
            on:click=on_click
            data-tab-value=format!("#{}", key.panel_id())
        >
            <span>{tab_label(key)}</span>
        </div>
    }
}
