/// Error types for the popup
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure of a call into the host browser API
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("unsupported host: neither the chrome nor the browser tabs API is available")]
    UnsupportedHost,
    #[error("host call failed: {0}")]
    Bridge(String),
    #[error("unexpected host payload: {0}")]
    Decode(String),
}

impl HostError {
    /// Convert a rejected bridge promise into a host error
    pub fn from_js(value: JsValue) -> HostError {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|message| message.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        HostError::Bridge(message)
    }
}

/// Startup failures that leave the popup unusable
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("no window or document available")]
    NoDocument,
    #[error("mount point `{0}` not found in popup page")]
    MissingMountPoint(&'static str),
}

impl From<DomError> for JsValue {
    fn from(error: DomError) -> JsValue {
        JsValue::from_str(&error.to_string())
    }
}
