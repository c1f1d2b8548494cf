//! Error types for monitor records.

use edid2info_core::{FormatError, SourceError};

/// Errors produced while building a [`Monitor`](crate::Monitor).
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    /// The platform backend could not deliver EDID bytes.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The delivered buffer does not hold an EDID base block.
    #[error(transparent)]
    Format(#[from] FormatError),
}
