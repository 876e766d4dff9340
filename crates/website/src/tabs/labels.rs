//! Tab labels - single source of truth for handle captions.

use super::state::TabKey;

pub fn tab_label(key: TabKey) -> &'static str {
    match key {
        TabKey::Windows => "Windows",
        TabKey::Macos => "macOS",
        TabKey::Linux => "Linux",
    }
}
