//! Fixed-offset byte segmentation of a raw EDID buffer.

use bytes::Bytes;
use uuid::Uuid;

use crate::error::FormatError;

/// The 8-byte magic pattern at the start of every EDID base block.
pub const FIXED_HEADER: [u8; 8] = [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];

/// Bytes covered by the fixed segment table (up to the end of the
/// fourth descriptor block). Standard buffers are 128 bytes.
pub const BASE_LEN: usize = 126;

/// Byte windows of the EDID base block, per the VESA 1.3/1.4 layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    FixedHeader,
    ManufacturerId,
    ProductCode,
    SerialNumber,
    ManufactureWeek,
    ManufactureYear,
    EdidVersion,
    EdidRevision,
    HorizontalSize,
    VerticalSize,
    Descriptor1,
    Descriptor2,
    Descriptor3,
    Descriptor4,
}

impl Segment {
    /// The four descriptor windows in EDID order.
    pub const DESCRIPTORS: [Segment; 4] = [
        Segment::Descriptor1,
        Segment::Descriptor2,
        Segment::Descriptor3,
        Segment::Descriptor4,
    ];

    /// `(offset, length)` of this window in the base block.
    pub const fn span(self) -> (usize, usize) {
        match self {
            Self::FixedHeader => (0, 8),
            Self::ManufacturerId => (8, 2),
            Self::ProductCode => (10, 2),
            Self::SerialNumber => (12, 4),
            Self::ManufactureWeek => (16, 1),
            Self::ManufactureYear => (17, 1),
            Self::EdidVersion => (18, 1),
            Self::EdidRevision => (19, 1),
            Self::HorizontalSize => (21, 1),
            Self::VerticalSize => (22, 1),
            Self::Descriptor1 => (54, 18),
            Self::Descriptor2 => (72, 18),
            Self::Descriptor3 => (90, 18),
            Self::Descriptor4 => (108, 18),
        }
    }
}

/// An owned, immutable EDID byte buffer.
///
/// Construction validates the [`BASE_LEN`]-byte base block, so every
/// fixed [`Segment`] window is in-bounds afterwards. The buffer is
/// never copied or mutated; clones share the underlying storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEdid {
    bytes: Bytes,
}

impl RawEdid {
    /// Wrap an acquired EDID blob.
    ///
    /// Returns [`FormatError::OutOfRange`] if the buffer is shorter
    /// than the base block.
    pub fn new(bytes: impl Into<Bytes>) -> Result<Self, FormatError> {
        let bytes = bytes.into();
        if bytes.len() < BASE_LEN {
            return Err(FormatError::OutOfRange {
                offset: 0,
                length: BASE_LEN,
                buffer_len: bytes.len(),
            });
        }
        Ok(Self { bytes })
    }

    /// The whole buffer, extension blocks included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Bytes `[offset, offset + length)`.
    ///
    /// This is the generic segmenter contract; use [`RawEdid::segment`]
    /// for the fixed base-block windows.
    pub fn get(&self, offset: usize, length: usize) -> Result<&[u8], FormatError> {
        let out_of_range = || FormatError::OutOfRange {
            offset,
            length,
            buffer_len: self.bytes.len(),
        };
        let end = offset.checked_add(length).ok_or_else(out_of_range)?;
        self.bytes.get(offset..end).ok_or_else(out_of_range)
    }

    /// Bytes of a fixed segment window.
    pub fn segment(&self, segment: Segment) -> &[u8] {
        let (offset, length) = segment.span();
        // The constructor guarantees the base block that bounds the table.
        &self.bytes[offset..offset + length]
    }

    /// Whether the buffer starts with [`FIXED_HEADER`].
    ///
    /// Surfaced as a sanity check for callers; decoding itself does not
    /// require it.
    pub fn has_valid_header(&self) -> bool {
        self.segment(Segment::FixedHeader) == FIXED_HEADER
    }

    /// Content-derived stable identifier: a UUID v5 over the raw bytes.
    ///
    /// Equal buffers always hash to the same id, so it survives
    /// platform re-enumeration and works as a map key.
    pub fn stable_id(&self) -> Uuid {
        Uuid::new_v5(&Uuid::NAMESPACE_OID, &self.bytes)
    }
}
