/// UI module exports
use web_sys::Element;

use crate::error::DomError;

pub mod components;
pub mod popup;

/// Element of the popup page the app renders into
pub const MOUNT_POINT: &str = "#popup";

/// Locate the mount point; the popup cannot start without it
pub fn mount_point() -> Result<Element, DomError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(DomError::NoDocument)?;

    document
        .query_selector(MOUNT_POINT)
        .ok()
        .flatten()
        .ok_or(DomError::MissingMountPoint(MOUNT_POINT))
}
