//! Panel content registry - single source of truth for tab key → view.

use leptos::prelude::*;

use super::state::TabKey;
use crate::content::linux::LinuxInstall;
use crate::content::macos::MacosInstall;
use crate::content::windows::WindowsInstall;

/// Returns the install-instructions view for the given tab key.
pub fn render_panel_content(key: TabKey) -> AnyView {
    match key {
        TabKey::Windows => view! { <WindowsInstall /> }.into_any(),
        TabKey::Macos => view! { <MacosInstall /> }.into_any(),
        TabKey::Linux => view! { <LinuxInstall /> }.into_any(),
    }
}
