pub mod list;
pub mod show;

use anyhow::Result;
use clap::ValueEnum;
use edid2info::Monitor;

/// Platform backend used to enumerate outputs.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Backend {
    /// Linux DRM sysfs (`/sys/class/drm`)
    Drm,
    /// X11 RandR
    X11,
}

pub fn monitors(backend: Backend) -> Result<Vec<Monitor>> {
    let monitors = match backend {
        Backend::Drm => edid2info::connected_monitors_drm()?,
        Backend::X11 => edid2info::connected_monitors_x11()?,
    };
    Ok(monitors)
}
