/// Popup configuration, resolved once at startup from the runtime environment

/// The browser the extension is running in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    Chrome,
    Firefox,
}

impl HostKind {
    /// Identify the host from the user agent string.
    ///
    /// Chrome is checked first; Chromium derivatives report "Chrome" too.
    pub fn detect(user_agent: &str) -> Option<HostKind> {
        if user_agent.contains("Chrome") {
            Some(HostKind::Chrome)
        } else if user_agent.contains("Firefox") {
            Some(HostKind::Firefox)
        } else {
            None
        }
    }

    /// Global holding the extension API on this host
    pub fn namespace(&self) -> &'static str {
        match self {
            HostKind::Chrome => "chrome",
            HostKind::Firefox => "browser",
        }
    }

    pub fn supports_discarded(&self) -> bool {
        matches!(self, HostKind::Firefox)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupConfig {
    pub host: Option<HostKind>,
}

impl PopupConfig {
    pub fn from_user_agent(user_agent: &str) -> PopupConfig {
        PopupConfig {
            host: HostKind::detect(user_agent),
        }
    }
}

/// Console log level: verbose in debug builds
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
