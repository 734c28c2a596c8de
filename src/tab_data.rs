/// Data structures exchanged with the host browser
use serde::{Deserialize, Serialize};

/// Information about a browser tab, as reported by `windows.getAll`/`getCurrent`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TabInfo {
    pub url: Option<String>,
    pub title: Option<String>,
    pub active: bool,
    pub discarded: bool,
}

impl TabInfo {
    pub fn new(url: &str, title: &str) -> TabInfo {
        TabInfo {
            url: Some(url.to_string()),
            title: Some(title.to_string()),
            ..TabInfo::default()
        }
    }

    /// URL used for filtering; a tab without one matches as the empty string.
    pub fn url_or_empty(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }
}

/// A browser window with its tabs populated
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowInfo {
    pub id: Option<i32>,
    pub tabs: Vec<TabInfo>,
}

impl WindowInfo {
    pub fn with_tabs(tabs: Vec<TabInfo>) -> WindowInfo {
        WindowInfo { id: None, tabs }
    }
}

/// Which windows a refresh enumerates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowScope {
    /// Only the focused window the popup belongs to
    Current,
    /// Every open window
    All,
}

impl WindowScope {
    pub fn from_flag(include_other_windows: bool) -> WindowScope {
        if include_other_windows {
            WindowScope::All
        } else {
            WindowScope::Current
        }
    }
}

/// `getInfo` argument of `windows.getAll` / `windows.getCurrent`
#[derive(Debug, Clone, Serialize)]
pub struct GetInfo {
    pub populate: bool,
}

/// `createProperties` argument of `tabs.create`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateProperties {
    pub url: String,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discarded: Option<bool>,
}
