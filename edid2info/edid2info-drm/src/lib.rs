//! Linux DRM sysfs output source.
//!
//! Serves the [`OutputSource`] capability from the per-connector files
//! the kernel exposes under `/sys/class/drm` (`edid`, `modes`,
//! `enabled`, `status`). Everything here is a one-shot small-file read;
//! nothing is watched or cached.

use std::fs;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use edid2info_core::{Geometry, OutputSource, PowerStatus, SourceError};

const DRM_SYSFS_ROOT: &str = "/sys/class/drm";

/// All connectors whose `status` file reports `connected`.
pub fn connected_outputs() -> Result<Vec<DrmOutput>, SourceError> {
    connected_outputs_in(Path::new(DRM_SYSFS_ROOT))
}

/// Like [`connected_outputs`], against an alternate sysfs root.
pub fn connected_outputs_in(root: &Path) -> Result<Vec<DrmOutput>, SourceError> {
    let mut outputs = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        let status = path.join("status");
        if !status.is_file() {
            // card0 itself, `version`, render nodes
            continue;
        }
        match fs::read_to_string(&status) {
            Ok(s) if s.trim() == "connected" => outputs.push(DrmOutput::new(path)),
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(path = %status.display(), error = %e, "skipping unreadable connector");
            }
        }
    }
    outputs.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(outputs)
}

/// One connector directory, e.g. `/sys/class/drm/card0-HDMI-A-1`.
#[derive(Debug, Clone)]
pub struct DrmOutput {
    path: PathBuf,
}

impl DrmOutput {
    /// Wrap a connector directory path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn no_data(&self, detail: impl Into<String>) -> SourceError {
        SourceError::NoData {
            output: self.path.display().to_string(),
            detail: detail.into(),
        }
    }
}

impl OutputSource for DrmOutput {
    fn edid(&self) -> Result<Bytes, SourceError> {
        let bytes = fs::read(self.path.join("edid"))?;
        if bytes.is_empty() {
            // the kernel exposes an empty file when the monitor
            // reported nothing
            return Err(self.no_data("empty edid file"));
        }
        Ok(Bytes::from(bytes))
    }

    fn output_name(&self) -> Result<String, SourceError> {
        // `card0-HDMI-A-1` -> `HDMI-A-1`
        let base = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| self.no_data("connector directory has no name"))?;
        let name = base.split_once('-').map_or(base, |(_, rest)| rest);
        Ok(name.to_string())
    }

    fn resolution(&self) -> Result<(u32, u32), SourceError> {
        let modes = fs::read_to_string(self.path.join("modes"))?;
        let first = modes
            .lines()
            .next()
            .ok_or_else(|| self.no_data("no modes"))?;
        parse_mode_line(first).ok_or_else(|| self.no_data(format!("unparsable mode '{first}'")))
    }

    fn geometry(&self) -> Result<Geometry, SourceError> {
        // sysfs has no CRTC placement information
        Err(SourceError::Unsupported {
            capability: "geometry",
        })
    }

    fn status(&self) -> Result<PowerStatus, SourceError> {
        let enabled = fs::read_to_string(self.path.join("enabled"))?;
        Ok(match enabled.trim() {
            "enabled" => PowerStatus::On,
            _ => PowerStatus::Off,
        })
    }
}

/// Parse a sysfs mode line like `1920x1080` into `(width, height)`.
/// Interlaced modes are suffixed with `i`.
fn parse_mode_line(line: &str) -> Option<(u32, u32)> {
    let (w, h) = line.trim().split_once('x')?;
    let h = h.trim_end_matches('i');
    Some((w.parse().ok()?, h.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::parse_mode_line;

    #[test]
    fn mode_line_parses_width_and_height() {
        assert_eq!(parse_mode_line("1920x1080"), Some((1920, 1080)));
        assert_eq!(parse_mode_line("  3840x2160\n"), Some((3840, 2160)));
    }

    #[test]
    fn interlaced_suffix_is_tolerated() {
        assert_eq!(parse_mode_line("1920x1080i"), Some((1920, 1080)));
    }

    #[test]
    fn garbage_mode_lines_are_rejected() {
        assert_eq!(parse_mode_line("preferred"), None);
        assert_eq!(parse_mode_line("1920x"), None);
        assert_eq!(parse_mode_line(""), None);
    }
}
