//! Platform detection from the browser user-agent string.

use web_sys::window;

/// Platform label, derived once per page load and not persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Os {
    Windows,
    Mac,
    Linux,
    Unknown,
}

impl Os {
    /// Best-effort guess from a user-agent string.
    ///
    /// Ordered, first-match-wins substring search on the literal tokens.
    /// "Win" is checked before "Mac", so a string carrying both resolves
    /// to Windows. Every input yields a label, the empty string included.
    pub fn from_user_agent(agent: &str) -> Self {
        if agent.contains("Win") {
            Os::Windows
        } else if agent.contains("Mac") {
            Os::Mac
        } else if agent.contains("X11") || agent.contains("Linux") {
            Os::Linux
        } else {
            Os::Unknown
        }
    }

    /// Reads `navigator.userAgent` and guesses the visitor's platform.
    ///
    /// Degrades to `Unknown` when the navigator is unavailable.
    pub fn from_navigator() -> Self {
        let agent = window()
            .and_then(|w| w.navigator().user_agent().ok())
            .unwrap_or_default();
        let os = Self::from_user_agent(&agent);
        log::debug!("detected platform {} from user agent '{}'", os.as_str(), agent);
        os
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Os::Windows => "windows",
            Os::Mac => "mac",
            Os::Linux => "linux",
            Os::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_agents() {
        assert_eq!(
            Os::from_user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64)"),
            Os::Windows
        );
        // "Win" is checked first, even when other platform tokens appear
        assert_eq!(Os::from_user_agent("Win Mac Linux"), Os::Windows);
    }

    #[test]
    fn test_mac_agents() {
        assert_eq!(
            Os::from_user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)"),
            Os::Mac
        );
        assert_eq!(Os::from_user_agent("Mac Linux"), Os::Mac);
    }

    #[test]
    fn test_linux_agents() {
        assert_eq!(
            Os::from_user_agent("Mozilla/5.0 (X11; Linux x86_64)"),
            Os::Linux
        );
        assert_eq!(Os::from_user_agent("Mozilla/5.0 (X11; CrOS x86_64)"), Os::Linux);
        assert_eq!(Os::from_user_agent("something Linux something"), Os::Linux);
    }

    #[test]
    fn test_unknown_agents() {
        assert_eq!(Os::from_user_agent(""), Os::Unknown);
        assert_eq!(Os::from_user_agent("Mozilla/5.0 (iPhone; CPU iPhone OS)"), Os::Unknown);
    }

    #[test]
    fn test_case_sensitive_tokens() {
        // lowercase tokens do not match
        assert_eq!(Os::from_user_agent("windows"), Os::Unknown);
        assert_eq!(Os::from_user_agent("linux"), Os::Unknown);
    }
}
