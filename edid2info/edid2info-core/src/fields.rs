//! Scalar field decoding over a segmented EDID buffer.

use crate::error::FormatError;
use crate::segment::{RawEdid, Segment};

/// Decoded scalar fields of the EDID base block.
///
/// Every field is a pure function of the buffer bytes: the same
/// [`RawEdid`] always decodes to the same `FieldSet`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    /// Three-letter PNP vendor code, e.g. `"TSB"`.
    pub manufacturer_id: String,
    /// Vendor-assigned product code, raw bytes.
    pub product_code: [u8; 2],
    /// 32-bit serial number field, raw bytes.
    pub serial_number: [u8; 4],
    /// Week of manufacture; 0 and 255 mean "unspecified".
    pub manufacture_week: u8,
    /// Year of manufacture (raw byte + 1990).
    pub manufacture_year: u16,
    pub edid_version: u8,
    pub edid_revision: u8,
    /// Horizontal screen size in cm; 0 means undefined/variable.
    pub horizontal_size_cm: u8,
    /// Vertical screen size in cm; 0 means undefined/variable.
    pub vertical_size_cm: u8,
}

impl FieldSet {
    /// Decode every scalar field from the buffer.
    pub fn decode(raw: &RawEdid) -> Self {
        let mid = raw.segment(Segment::ManufacturerId);
        let product = raw.segment(Segment::ProductCode);
        let serial = raw.segment(Segment::SerialNumber);
        Self {
            manufacturer_id: decode_manufacturer_id([mid[0], mid[1]]),
            product_code: [product[0], product[1]],
            serial_number: [serial[0], serial[1], serial[2], serial[3]],
            manufacture_week: raw.segment(Segment::ManufactureWeek)[0],
            manufacture_year: 1990 + u16::from(raw.segment(Segment::ManufactureYear)[0]),
            edid_version: raw.segment(Segment::EdidVersion)[0],
            edid_revision: raw.segment(Segment::EdidRevision)[0],
            horizontal_size_cm: raw.segment(Segment::HorizontalSize)[0],
            vertical_size_cm: raw.segment(Segment::VerticalSize)[0],
        }
    }
}

/// Split the big-endian 2-byte vendor field into its three 5-bit
/// groups. Bit 15 is reserved and dropped.
fn manufacturer_groups(bytes: [u8; 2]) -> [u8; 3] {
    let packed = u16::from_be_bytes(bytes) & 0x7FFF;
    [
        ((packed >> 10) & 0x1F) as u8,
        ((packed >> 5) & 0x1F) as u8,
        (packed & 0x1F) as u8,
    ]
}

/// Best-effort decode of the packed vendor id.
///
/// Each 5-bit group maps to the letter at that position of the
/// alphabet (1 is `A`, 26 is `Z`). Out-of-range groups go through the
/// same mapping (`0x40 + group`), so the result is always three
/// characters; strict callers use [`validate_manufacturer_id`].
pub fn decode_manufacturer_id(bytes: [u8; 2]) -> String {
    manufacturer_groups(bytes)
        .iter()
        .map(|&v| char::from(0x40 + v))
        .collect()
}

/// Strict check of the packed vendor id: every 5-bit group must be in
/// the letter range 1-26.
///
/// [`FieldSet::decode`] never performs this check; whether a malformed
/// id is an error is a caller policy.
pub fn validate_manufacturer_id(bytes: [u8; 2]) -> Result<(), FormatError> {
    for (group, &value) in manufacturer_groups(bytes).iter().enumerate() {
        if !(1..=26).contains(&value) {
            return Err(FormatError::InvalidManufacturerId { group, value });
        }
    }
    Ok(())
}
