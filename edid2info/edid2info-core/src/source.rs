//! Capability contract implemented by platform output backends.

use std::fmt;

use bytes::Bytes;

use crate::error::SourceError;

/// Placement of an output in the screen coordinate space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub x: i16,
    pub y: i16,
    pub width: u16,
    pub height: u16,
}

impl fmt::Display for Geometry {
    /// X geometry string, `WIDTHxHEIGHT+X+Y`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// Whether an output is actively driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerStatus {
    On,
    Off,
}

impl fmt::Display for PowerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::On => "on",
            Self::Off => "off",
        })
    }
}

/// A connected display output as seen by a platform backend.
///
/// Implementations are selected by the caller at startup; the decoding
/// core never inspects which backend it is talking to. Calls may block
/// and may fail; the core neither retries nor times out them.
pub trait OutputSource: Send + Sync {
    /// Raw EDID bytes of the output.
    fn edid(&self) -> Result<Bytes, SourceError>;

    /// Platform name of the output (e.g. `HDMI-A-1`).
    fn output_name(&self) -> Result<String, SourceError>;

    /// Active (or preferred) pixel resolution as `(width, height)`.
    fn resolution(&self) -> Result<(u32, u32), SourceError>;

    /// Position and size of the output in the screen space.
    fn geometry(&self) -> Result<Geometry, SourceError>;

    /// Whether the output is currently driven.
    fn status(&self) -> Result<PowerStatus, SourceError>;
}
