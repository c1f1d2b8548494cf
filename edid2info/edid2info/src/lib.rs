//! Monitor identity records decoded from EDID, with pluggable platform
//! backends for output enumeration and live state.
//!
//! The decoding itself lives in [`edid2info_core`]; this crate merges a
//! decoded EDID with an [`OutputSource`](edid2info_core::OutputSource)
//! into the user-facing [`Monitor`] record and wires in the platform
//! backends behind cargo features.

mod error;
mod monitor;

pub use edid2info_core as core;
pub use error::MonitorError;
pub use monitor::Monitor;

#[cfg(feature = "drm")]
pub use edid2info_drm as drm;
#[cfg(feature = "x11")]
pub use edid2info_x11 as x11;

/// A [`Monitor`] for every connected DRM output.
///
/// Outputs whose EDID cannot be acquired are skipped with a diagnostic;
/// only the sysfs scan itself is fatal.
#[cfg(feature = "drm")]
pub fn connected_monitors_drm() -> Result<Vec<Monitor>, MonitorError> {
    let outputs = edid2info_drm::connected_outputs().map_err(MonitorError::Source)?;
    Ok(probe_all(outputs))
}

/// A [`Monitor`] for every connected X11 RandR output.
///
/// Outputs whose EDID cannot be acquired are skipped with a diagnostic;
/// only the display connection and resource query are fatal.
#[cfg(feature = "x11")]
pub fn connected_monitors_x11() -> Result<Vec<Monitor>, MonitorError> {
    let outputs = edid2info_x11::connected_outputs().map_err(MonitorError::Source)?;
    Ok(probe_all(outputs))
}

#[cfg(any(feature = "drm", feature = "x11"))]
fn probe_all<S>(outputs: Vec<S>) -> Vec<Monitor>
where
    S: edid2info_core::OutputSource + 'static,
{
    outputs
        .into_iter()
        .filter_map(|output| match Monitor::probe(Box::new(output)) {
            Ok(monitor) => Some(monitor),
            Err(e) => {
                tracing::debug!(error = %e, "skipping output without usable EDID");
                None
            }
        })
        .collect()
}
