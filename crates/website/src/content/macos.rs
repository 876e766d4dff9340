use leptos::prelude::*;

/// Install instructions shown to macOS visitors.
#[component]
pub fn MacosInstall() -> impl IntoView {
    view! {
        <section class="install">
            <h2>"Install on macOS"</h2>
            <ol>
                <li>"Download the disk image below."</li>
                <li>"Open " <code>"launcher.dmg"</code> " and drag the app into Applications."</li>
                <li>"On first start, allow the app in System Settings if Gatekeeper blocks it."</li>
            </ol>
            <a class="download-button" href="/downloads/launcher.dmg">
                "Download for macOS"
            </a>
        </section>
    }
}
