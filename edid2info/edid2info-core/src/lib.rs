//! Platform-independent EDID decoding core for `edid2info`.
//!
//! This crate provides the fixed-offset segmenter ([`RawEdid`]), the
//! scalar field decoder ([`FieldSet`]), the descriptor classifier
//! ([`Descriptor`]) and the [`OutputSource`] capability implemented by
//! platform backends.

mod descriptor;
mod error;
mod fields;
mod segment;
mod source;

pub use descriptor::{DESCRIPTOR_LEN, Descriptor, decode_descriptors};
pub use error::{FormatError, SourceError};
pub use fields::{FieldSet, decode_manufacturer_id, validate_manufacturer_id};
pub use segment::{BASE_LEN, FIXED_HEADER, RawEdid, Segment};
pub use source::{Geometry, OutputSource, PowerStatus};
