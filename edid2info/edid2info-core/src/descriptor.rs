//! Classification and decoding of the four 18-byte descriptor blocks.

use crate::segment::{RawEdid, Segment};

/// Length of one descriptor block.
pub const DESCRIPTOR_LEN: usize = 18;

/// One decoded "other monitor descriptor" block.
///
/// Text-bearing variants carry the printable-ASCII payload of bytes
/// 5..18 with surrounding whitespace stripped; the remaining variants
/// are classification-only and carry no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descriptor {
    /// The block encodes a detailed timing mode, not a descriptor.
    /// Timing tables are not decoded here.
    DetailedTiming,
    /// Display serial number string (type `0xFF`).
    SerialNumber(String),
    /// Unspecified free text (type `0xFE`).
    Text(String),
    /// Monitor range limits (type `0xFD`); payload not decoded.
    MonitorRangeLimits,
    /// Display product name (type `0xFC`).
    Name(String),
    /// Additional white point data (type `0xFB`); payload not decoded.
    WhitePointData,
    /// Additional standard timings (type `0xFA`); payload not decoded.
    StandardTiming,
    /// Unrecognized descriptor type byte. Reported, never fatal.
    Unknown(u8),
}

impl Descriptor {
    /// Classify and decode one 18-byte block.
    pub fn decode(block: &[u8; DESCRIPTOR_LEN]) -> Self {
        if block[0] != 0 {
            return Self::DetailedTiming;
        }
        match block[3] {
            0xFF => Self::SerialNumber(printable_text(&block[5..])),
            0xFE => Self::Text(printable_text(&block[5..])),
            0xFD => Self::MonitorRangeLimits,
            0xFC => Self::Name(printable_text(&block[5..])),
            0xFB => Self::WhitePointData,
            0xFA => Self::StandardTiming,
            other => {
                tracing::debug!(type_byte = other, "unknown EDID descriptor type");
                Self::Unknown(other)
            }
        }
    }

    /// Text payload of the text-bearing variants.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::SerialNumber(s) | Self::Text(s) | Self::Name(s) => Some(s),
            _ => None,
        }
    }

    /// Short variant name, for diagnostics and display.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DetailedTiming => "detailed_timing",
            Self::SerialNumber(_) => "serial_number",
            Self::Text(_) => "text",
            Self::MonitorRangeLimits => "monitor_range_limits",
            Self::Name(_) => "name",
            Self::WhitePointData => "white_point_data",
            Self::StandardTiming => "standard_timing",
            Self::Unknown(_) => "unknown",
        }
    }
}

/// Decode all four descriptor blocks in EDID order.
pub fn decode_descriptors(raw: &RawEdid) -> [Descriptor; 4] {
    Segment::DESCRIPTORS.map(|segment| {
        let mut block = [0u8; DESCRIPTOR_LEN];
        block.copy_from_slice(raw.segment(segment));
        Descriptor::decode(&block)
    })
}

/// Printable-ASCII bytes of `bytes`, with surrounding whitespace
/// stripped.
fn printable_text(bytes: &[u8]) -> String {
    let text: String = bytes
        .iter()
        .copied()
        .filter(|b| (0x20..=0x7E).contains(b))
        .map(char::from)
        .collect();
    text.trim().to_string()
}
