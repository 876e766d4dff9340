use leptos::prelude::*;

use crate::layout::{Footer, Header};
use crate::tabs::{DownloadTabs, DownloadTabsContext};

#[component]
pub fn App() -> impl IntoView {
    // Provide the tabs store to the whole page via context.
    provide_context(DownloadTabsContext::new());

    view! {
        <Header />
        <main class="page">
            <DownloadTabs />
        </main>
        <Footer />
    }
}
