use leptos::prelude::*;

/// Install instructions shown to Linux visitors. Also the fallback panel
/// for platforms the user-agent heuristic cannot place.
#[component]
pub fn LinuxInstall() -> impl IntoView {
    view! {
        <section class="install">
            <h2>"Install on Linux"</h2>
            <ol>
                <li>"Download the AppImage below."</li>
                <li>"Make it executable: " <code>"chmod +x launcher.AppImage"</code></li>
                <li>"Run it: " <code>"./launcher.AppImage"</code></li>
            </ol>
            <a class="download-button" href="/downloads/launcher.AppImage">
                "Download for Linux"
            </a>
        </section>
    }
}
