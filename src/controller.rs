/// Popup controller: binds the scratchpad text to the host's tabs
use std::rc::Rc;

use futures_util::future::join_all;

use crate::error::HostError;
use crate::host::TabHost;
use crate::scratchpad::{RenderOptions, extract_urls, render_windows};
use crate::tab_data::WindowScope;

/// Result of opening one URL from a batch
#[derive(Debug, Clone, PartialEq)]
pub struct OpenOutcome {
    pub url: String,
    pub result: Result<(), HostError>,
}

/// Inputs of a scratchpad refresh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefreshRequest {
    pub filter: String,
    pub include_title: bool,
    pub include_other_windows: bool,
}

pub struct PopupController {
    host: Rc<dyn TabHost>,
}

impl PopupController {
    pub fn new(host: Rc<dyn TabHost>) -> PopupController {
        PopupController { host }
    }

    pub fn supports_discarded(&self) -> bool {
        self.host.supports_discarded()
    }

    /// Build the scratchpad text for the current filter and flags
    pub async fn refresh_scratchpad(&self, request: &RefreshRequest) -> Result<String, HostError> {
        let scope = WindowScope::from_flag(request.include_other_windows);
        let windows = self.host.list_windows(scope).await?;

        log::debug!("rendering {} window(s) with filter {:?}", windows.len(), request.filter);

        let options = RenderOptions {
            include_title: request.include_title,
        };
        Ok(render_windows(&windows, &request.filter, options))
    }

    /// Open every URL in the scratchpad as a background tab
    ///
    /// All requests are issued at once; a failing URL never stops the others.
    pub async fn open_urls(&self, scratchpad: &str, discarded: bool) -> Vec<OpenOutcome> {
        let urls = extract_urls(scratchpad);
        log::debug!("opening {} url(s), discarded={}", urls.len(), discarded);

        let host = &self.host;
        join_all(urls.into_iter().map(|url| async move {
            let result = host.open_url(&url, false, discarded).await;
            OpenOutcome { url, result }
        }))
        .await
    }
}
