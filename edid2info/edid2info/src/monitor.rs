//! The user-facing monitor record.

use std::fmt;
use std::sync::OnceLock;

use edid2info_core::{
    Descriptor, FieldSet, Geometry, OutputSource, PowerStatus, RawEdid, decode_descriptors,
};
use uuid::Uuid;

use crate::error::MonitorError;

/// A connected monitor: decoded EDID identity merged with live output
/// state from a platform backend.
///
/// EDID-derived and platform-delegated values are computed on first
/// access and cached for the record's lifetime. EDID contents are
/// treated as immutable while an output stays connected, so there is no
/// invalidation path; the `OnceLock` cells make concurrent first access
/// compute each value exactly once.
pub struct Monitor {
    source: Box<dyn OutputSource>,
    raw: RawEdid,
    fields: OnceLock<FieldSet>,
    descriptors: OnceLock<[Descriptor; 4]>,
    output_name: OnceLock<String>,
    resolution: OnceLock<(u32, u32)>,
    geometry: OnceLock<Geometry>,
    status: OnceLock<PowerStatus>,
}

impl Monitor {
    /// Acquire the EDID from `source` and build a record around it.
    ///
    /// This is the only fatal path: without EDID bytes the record has
    /// no identity. Every later backend failure degrades to a default
    /// value instead.
    pub fn probe(source: Box<dyn OutputSource>) -> Result<Self, MonitorError> {
        let bytes = source.edid()?;
        let raw = RawEdid::new(bytes)?;
        Ok(Self {
            source,
            raw,
            fields: OnceLock::new(),
            descriptors: OnceLock::new(),
            output_name: OnceLock::new(),
            resolution: OnceLock::new(),
            geometry: OnceLock::new(),
            status: OnceLock::new(),
        })
    }

    /// The raw EDID buffer this record was built from.
    pub fn edid(&self) -> &RawEdid {
        &self.raw
    }

    /// Decoded scalar fields.
    pub fn fields(&self) -> &FieldSet {
        self.fields.get_or_init(|| FieldSet::decode(&self.raw))
    }

    /// The four descriptor blocks, in EDID order.
    pub fn descriptors(&self) -> &[Descriptor; 4] {
        self.descriptors
            .get_or_init(|| decode_descriptors(&self.raw))
    }

    /// Model name from the first `Name` descriptor, or `""`.
    pub fn name(&self) -> &str {
        self.descriptors()
            .iter()
            .find_map(|d| match d {
                Descriptor::Name(s) => Some(s.as_str()),
                _ => None,
            })
            .unwrap_or("")
    }

    /// Serial string from the first `SerialNumber` descriptor, or `""`.
    pub fn serial_no(&self) -> &str {
        self.descriptors()
            .iter()
            .find_map(|d| match d {
                Descriptor::SerialNumber(s) => Some(s.as_str()),
                _ => None,
            })
            .unwrap_or("")
    }

    /// All free-text descriptor payloads, joined with `"; "`.
    pub fn text(&self) -> String {
        let texts: Vec<&str> = self
            .descriptors()
            .iter()
            .filter_map(|d| match d {
                Descriptor::Text(s) => Some(s.as_str()),
                _ => None,
            })
            .collect();
        texts.join("; ")
    }

    pub fn manufacturer_id(&self) -> &str {
        &self.fields().manufacturer_id
    }

    pub fn manufacture_year(&self) -> u16 {
        self.fields().manufacture_year
    }

    pub fn manufacture_week(&self) -> u8 {
        self.fields().manufacture_week
    }

    pub fn edid_version(&self) -> u8 {
        self.fields().edid_version
    }

    pub fn edid_revision(&self) -> u8 {
        self.fields().edid_revision
    }

    /// Vendor-assigned product code, raw bytes.
    pub fn product_code(&self) -> [u8; 2] {
        self.fields().product_code
    }

    /// 32-bit serial number field, raw bytes (the descriptor string is
    /// [`Monitor::serial_no`]).
    pub fn serial_number_raw(&self) -> [u8; 4] {
        self.fields().serial_number
    }

    pub fn width_in_cm(&self) -> u8 {
        self.fields().horizontal_size_cm
    }

    pub fn height_in_cm(&self) -> u8 {
        self.fields().vertical_size_cm
    }

    /// Platform name of the output, or `""` when the backend cannot say.
    pub fn output_name(&self) -> &str {
        self.output_name.get_or_init(|| {
            self.source.output_name().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "output name unavailable");
                String::new()
            })
        })
    }

    fn resolution(&self) -> (u32, u32) {
        *self.resolution.get_or_init(|| {
            self.source.resolution().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "resolution unavailable");
                (0, 0)
            })
        })
    }

    pub fn width_in_pixels(&self) -> u32 {
        self.resolution().0
    }

    pub fn height_in_pixels(&self) -> u32 {
        self.resolution().1
    }

    /// Placement in the screen space; all-zero when the backend has no
    /// CRTC information for this output.
    pub fn geometry(&self) -> Geometry {
        *self.geometry.get_or_init(|| {
            self.source.geometry().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "geometry unavailable");
                Geometry::default()
            })
        })
    }

    /// Whether the output is driven; `Off` when the backend cannot say.
    pub fn status(&self) -> PowerStatus {
        *self.status.get_or_init(|| {
            self.source.status().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "status unavailable");
                PowerStatus::Off
            })
        })
    }

    /// Content-derived stable identifier of the EDID bytes.
    ///
    /// Survives platform re-enumeration; suitable as a map key for
    /// deduplicating records that reference the same physical monitor.
    pub fn stable_id(&self) -> Uuid {
        self.raw.stable_id()
    }
}

/// Identity is the EDID content, never the platform handle.
impl PartialEq for Monitor {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Monitor {}

impl fmt::Debug for Monitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Monitor")
            .field("stable_id", &self.raw.stable_id())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Monitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Monitor({})", self.output_name())?;
        if !self.name().is_empty() {
            write!(f, " -> {}", self.name())?;
        }
        Ok(())
    }
}
