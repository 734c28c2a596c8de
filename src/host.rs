/// Capability shim over the two host tab APIs (`chrome.*` and `browser.*`)
use std::rc::Rc;

use async_trait::async_trait;
use wasm_bindgen::prelude::*;

use crate::config::HostKind;
use crate::error::HostError;
use crate::tab_data::{CreateProperties, GetInfo, WindowInfo, WindowScope};

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    pub(crate) fn userAgent() -> String;

    #[wasm_bindgen(catch)]
    async fn windowsGetAll(namespace: &str, get_info: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn windowsGetCurrent(namespace: &str, get_info: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn tabsCreate(namespace: &str, create_properties: JsValue) -> Result<JsValue, JsValue>;
}

/// The host operations the popup needs
#[async_trait(?Send)]
pub trait TabHost {
    /// Whether tabs can be created without loading them
    fn supports_discarded(&self) -> bool;

    /// Enumerate windows with their tabs populated
    async fn list_windows(&self, scope: WindowScope) -> Result<Vec<WindowInfo>, HostError>;

    /// Create one tab
    async fn open_url(&self, url: &str, active: bool, discarded: bool) -> Result<(), HostError>;
}

/// Pick the implementation for the detected host
pub fn select(kind: Option<HostKind>) -> Rc<dyn TabHost> {
    match kind {
        Some(HostKind::Chrome) => Rc::new(ChromeHost),
        Some(HostKind::Firefox) => Rc::new(FirefoxHost),
        None => Rc::new(UnsupportedHost),
    }
}

pub struct ChromeHost;

#[async_trait(?Send)]
impl TabHost for ChromeHost {
    fn supports_discarded(&self) -> bool {
        HostKind::Chrome.supports_discarded()
    }

    async fn list_windows(&self, scope: WindowScope) -> Result<Vec<WindowInfo>, HostError> {
        list_windows(HostKind::Chrome, scope).await
    }

    async fn open_url(&self, url: &str, active: bool, discarded: bool) -> Result<(), HostError> {
        if discarded {
            log::debug!("discarded tabs unsupported on chrome, opening {} normally", url);
        }
        create_tab(HostKind::Chrome, create_properties(HostKind::Chrome, url, active, discarded)).await
    }
}

pub struct FirefoxHost;

#[async_trait(?Send)]
impl TabHost for FirefoxHost {
    fn supports_discarded(&self) -> bool {
        HostKind::Firefox.supports_discarded()
    }

    async fn list_windows(&self, scope: WindowScope) -> Result<Vec<WindowInfo>, HostError> {
        list_windows(HostKind::Firefox, scope).await
    }

    async fn open_url(&self, url: &str, active: bool, discarded: bool) -> Result<(), HostError> {
        create_tab(HostKind::Firefox, create_properties(HostKind::Firefox, url, active, discarded)).await
    }
}

/// Stand-in when neither host API was detected; every call fails
pub struct UnsupportedHost;

#[async_trait(?Send)]
impl TabHost for UnsupportedHost {
    fn supports_discarded(&self) -> bool {
        false
    }

    async fn list_windows(&self, _scope: WindowScope) -> Result<Vec<WindowInfo>, HostError> {
        Err(HostError::UnsupportedHost)
    }

    async fn open_url(&self, _url: &str, _active: bool, _discarded: bool) -> Result<(), HostError> {
        Err(HostError::UnsupportedHost)
    }
}

// Helper functions

/// `tabs.create` arguments for this host; the discarded key is only sent
/// where the host understands it, and only when set.
pub fn create_properties(kind: HostKind, url: &str, active: bool, discarded: bool) -> CreateProperties {
    CreateProperties {
        url: url.to_string(),
        active,
        discarded: (discarded && kind.supports_discarded()).then_some(true),
    }
}

async fn list_windows(kind: HostKind, scope: WindowScope) -> Result<Vec<WindowInfo>, HostError> {
    let get_info = serde_wasm_bindgen::to_value(&GetInfo { populate: true })
        .map_err(|e| HostError::Decode(e.to_string()))?;

    match scope {
        WindowScope::All => {
            let windows_js = windowsGetAll(kind.namespace(), get_info)
                .await
                .map_err(HostError::from_js)?;
            serde_wasm_bindgen::from_value(windows_js).map_err(|e| HostError::Decode(e.to_string()))
        }
        WindowScope::Current => {
            let window_js = windowsGetCurrent(kind.namespace(), get_info)
                .await
                .map_err(HostError::from_js)?;
            let window: WindowInfo = serde_wasm_bindgen::from_value(window_js)
                .map_err(|e| HostError::Decode(e.to_string()))?;
            Ok(vec![window])
        }
    }
}

async fn create_tab(kind: HostKind, properties: CreateProperties) -> Result<(), HostError> {
    let properties_js = serde_wasm_bindgen::to_value(&properties)
        .map_err(|e| HostError::Decode(e.to_string()))?;

    tabsCreate(kind.namespace(), properties_js)
        .await
        .map_err(HostError::from_js)?;

    Ok(())
}
