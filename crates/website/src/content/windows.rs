use leptos::prelude::*;

/// Install instructions shown to Windows visitors.
#[component]
pub fn WindowsInstall() -> impl IntoView {
    view! {
        <section class="install">
            <h2>"Install on Windows"</h2>
            <ol>
                <li>"Download the installer below."</li>
                <li>"Run " <code>"launcher-setup.exe"</code> " and follow the prompts."</li>
                <li>"Start the launcher from the Start menu."</li>
            </ol>
            <a class="download-button" href="/downloads/launcher-setup.exe">
                "Download for Windows"
            </a>
        </section>
    }
}
