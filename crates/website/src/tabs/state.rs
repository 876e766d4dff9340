//! Selection state for the download tabs.
//!
//! Pure data, no DOM: components observe this through the reactive context,
//! so the logic itself stays testable without a browser.

use crate::platform::Os;

/// Identifier of one tab handle / content panel pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabKey {
    Windows,
    Macos,
    Linux,
}

/// Every tab rendered on the page, in display order.
pub const ALL_TABS: [TabKey; 3] = [TabKey::Windows, TabKey::Macos, TabKey::Linux];

impl TabKey {
    /// Markup identifier of the content panel this key selects.
    pub fn panel_id(&self) -> &'static str {
        match self {
            TabKey::Windows => "tab_windows",
            TabKey::Macos => "tab_macos",
            TabKey::Linux => "tab_linux",
        }
    }

    /// Parses a panel identifier back to a key (used by the `?tab=` query
    /// parameter). Unknown identifiers yield `None`.
    pub fn from_panel_id(value: &str) -> Option<Self> {
        match value {
            "tab_windows" => Some(TabKey::Windows),
            "tab_macos" => Some(TabKey::Macos),
            "tab_linux" => Some(TabKey::Linux),
            _ => None,
        }
    }

    /// Tab pre-selected for a detected platform.
    ///
    /// Linux and Unknown share the fallback tab; that is the behavior the
    /// page has always had.
    pub fn default_for_os(os: Os) -> Self {
        match os {
            Os::Windows => TabKey::Windows,
            Os::Mac => TabKey::Macos,
            Os::Linux | Os::Unknown => TabKey::Linux,
        }
    }
}

/// Single-selection state across the fixed tab set.
///
/// Starts with nothing selected. The first transition is the forced default
/// selection at setup; every later one comes from a click. Once something
/// is selected, exactly one key stays active for the page's lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabSelection {
    active: Option<TabKey>,
}

impl TabSelection {
    pub fn new() -> Self {
        Self { active: None }
    }

    pub fn select(&mut self, key: TabKey) {
        self.active = Some(key);
    }

    pub fn active(&self) -> Option<TabKey> {
        self.active
    }

    pub fn is_active(&self, key: TabKey) -> bool {
        self.active == Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_for_os() {
        assert_eq!(TabKey::default_for_os(Os::Windows), TabKey::Windows);
        assert_eq!(TabKey::default_for_os(Os::Mac), TabKey::Macos);
        assert_eq!(TabKey::default_for_os(Os::Linux), TabKey::Linux);
        // unknown platforms land on the same tab as linux
        assert_eq!(TabKey::default_for_os(Os::Unknown), TabKey::Linux);
    }

    #[test]
    fn test_panel_id_round_trip() {
        for key in ALL_TABS {
            assert_eq!(TabKey::from_panel_id(key.panel_id()), Some(key));
        }
        assert_eq!(TabKey::from_panel_id("tab_freebsd"), None);
        assert_eq!(TabKey::from_panel_id(""), None);
    }

    #[test]
    fn test_selection_starts_empty() {
        let selection = TabSelection::new();
        assert_eq!(selection.active(), None);
        for key in ALL_TABS {
            assert!(!selection.is_active(key));
        }
    }

    #[test]
    fn test_select_activates_exactly_one() {
        let mut selection = TabSelection::new();
        selection.select(TabKey::Macos);
        let active: Vec<_> = ALL_TABS
            .into_iter()
            .filter(|key| selection.is_active(*key))
            .collect();
        assert_eq!(active, vec![TabKey::Macos]);
    }

    #[test]
    fn test_select_replaces_previous() {
        let mut selection = TabSelection::new();
        selection.select(TabKey::Windows);
        selection.select(TabKey::Linux);
        assert!(selection.is_active(TabKey::Linux));
        assert!(!selection.is_active(TabKey::Windows));
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut selection = TabSelection::new();
        selection.select(TabKey::Windows);
        let before = selection;
        selection.select(TabKey::Windows);
        assert_eq!(selection, before);
    }
}
