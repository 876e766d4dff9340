//! Tab management for the download page.
//!
//! - `state` - tab keys and the selection state machine
//! - `context` - reactive store shared via Leptos context
//! - `registry` - mapping tab key → panel view (single source of truth)
//! - `labels` - single source of truth for handle captions
//! - `tab` / `tabs` - the clickable handle and the container components

pub mod context;
pub mod labels;
pub mod registry;
pub mod state;
pub mod tab;
pub mod tabs;

pub use context::DownloadTabsContext;
pub use state::{TabKey, TabSelection, ALL_TABS};
pub use tabs::DownloadTabs;
