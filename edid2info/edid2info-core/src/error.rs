//! Error types for the decoding core and the platform capability.

/// Error produced while segmenting or decoding an EDID buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A requested byte range does not fit in the buffer.
    #[error(
        "EDID range out of bounds: offset {offset} + length {length} exceeds buffer of {buffer_len} bytes"
    )]
    OutOfRange {
        offset: usize,
        length: usize,
        buffer_len: usize,
    },

    /// A 5-bit manufacturer-id group is outside the letter range 1-26.
    #[error("invalid manufacturer id: 5-bit group {group} has value {value}, expected 1-26")]
    InvalidManufacturerId { group: usize, value: u8 },
}

/// Error returned by [`OutputSource`](crate::OutputSource) implementations.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The backend cannot provide this capability at all.
    #[error("{capability} is not available from this output source")]
    Unsupported { capability: &'static str },

    /// The output exists but has no usable data for this query.
    #[error("no data for output '{output}': {detail}")]
    NoData { output: String, detail: String },

    /// An underlying platform call failed.
    #[error("platform query failed: {source}")]
    Platform {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// I/O error while reading platform state.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
