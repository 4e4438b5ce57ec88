//! Error type shared by validation, encoding and persistence.

use thiserror::Error;

/// Everything that can go wrong between a font description and a `.fnt` file.
#[derive(Error, Debug)]
pub enum Error {
    /// The font description cannot be represented in the binary format.
    #[error("invalid `{field}`: {reason}")]
    Validation {
        /// Path of the offending field, e.g. `info.face` or `pages[2]`.
        field: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A write primitive would have run past the end of the output buffer.
    #[error("write of {len} bytes at offset {offset} overruns {capacity}-byte buffer")]
    Overrun {
        /// Cursor position of the failed write.
        offset: usize,
        /// Width of the value being written.
        len: usize,
        /// Size of the pre-allocated buffer.
        capacity: usize,
    },

    /// A block's payload did not match the length written in its header.
    #[error("{block} block declared {declared} bytes but wrote {written}")]
    BlockLength {
        /// Name of the block.
        block: &'static str,
        /// Length stored in the block header.
        declared: usize,
        /// Bytes actually emitted.
        written: usize,
    },

    /// The final cursor position differs from the pre-computed file size.
    #[error("encoded {written} bytes into a {expected}-byte buffer")]
    SizeMismatch {
        /// Size computed by the sizing pass.
        expected: usize,
        /// Final cursor position after the writing pass.
        written: usize,
    },

    /// Reading the description or persisting the output failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The font description could not be deserialized.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The description format could not be deduced from the input path.
    #[error("unknown description format: {0}")]
    UnknownFormat(String),
}

impl Error {
    pub(crate) fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience Result type alias for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
