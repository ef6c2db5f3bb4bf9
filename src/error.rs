//! Error types produced by the decoder, the time resolver and the record
//! constructors.
//!
//! All errors are typed, cloneable and comparable so callers (and tests) can
//! match on the exact failure.
//!
//! # Error Categories
//!
//! | Error | Stage | Description |
//! |-------|-------|-------------|
//! | [`MalformedInput`](DecodeError::MalformedInput) | decode | Buffer is not a JSON array of objects |
//! | [`BufferTooLarge`](DecodeError::BufferTooLarge) | decode | Buffer exceeds the configured size limit |
//! | [`TypeConversion`](DecodeError::TypeConversion) | convert | A rewritten record does not fit the target type |
//! | [`InBuffer`](DecodeError::InBuffer) | (wrapped) | One buffer of a merge failed |
//!
//! A timestamp that cannot be parsed is *not* an error during decoding: the
//! original string is left in place and the typed conversion decides whether
//! it is acceptable.
//!
//! # Pattern Matching
//!
//! ```rust
//! use hsds_types::{DecodeError, DecodeStage};
//!
//! fn describe(err: &DecodeError) -> String {
//!     match err.stage() {
//!         DecodeStage::Decode => format!("bad payload: {err}"),
//!         DecodeStage::Convert => format!("schema mismatch: {err}"),
//!     }
//! }
//! ```
use thiserror::Error;

/// Stage of the decode pipeline an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeStage {
    /// Parsing raw bytes into generic records.
    Decode,
    /// Converting a rewritten generic record into the target type.
    Convert,
}

/// Errors that can occur while decoding one or more JSON buffers.
///
/// The enum is marked `#[non_exhaustive]`; match with a catch-all arm.
///
/// # Examples
///
/// ```rust
/// use hsds_types::DecodeError;
///
/// let err = DecodeError::MalformedInput {
///     message: "expected value at line 1 column 1".to_string(),
/// };
/// assert!(err.to_string().starts_with("malformed input"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// The buffer is not valid UTF-8 JSON shaped as an array of objects.
    #[error("malformed input: {message}")]
    MalformedInput {
        /// Parser message, including line and column.
        message: String,
    },

    /// The buffer exceeds [`DecodeConfig::max_buffer_bytes`](crate::DecodeConfig::max_buffer_bytes).
    #[error("buffer of {size} bytes exceeds limit of {limit} bytes")]
    BufferTooLarge {
        /// Size of the rejected buffer, in bytes.
        size: usize,
        /// Configured limit, in bytes.
        limit: usize,
    },

    /// A record could not populate the target type (missing field, type mismatch).
    #[error("record {record} does not match target type: {message}")]
    TypeConversion {
        /// Zero-based position of the record within its buffer.
        record: usize,
        /// Deserializer message.
        message: String,
    },

    /// A buffer of a multi-buffer merge failed.
    #[error("buffer {buffer}: {source}")]
    InBuffer {
        /// Zero-based position of the failing buffer.
        buffer: usize,
        /// The underlying failure.
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Returns the pipeline stage that produced this error.
    ///
    /// ```rust
    /// use hsds_types::{DecodeError, DecodeStage};
    ///
    /// let err = DecodeError::TypeConversion { record: 0, message: "x".into() };
    /// assert_eq!(err.stage(), DecodeStage::Convert);
    /// ```
    pub fn stage(&self) -> DecodeStage {
        match self {
            DecodeError::MalformedInput { .. } | DecodeError::BufferTooLarge { .. } => {
                DecodeStage::Decode
            }
            DecodeError::TypeConversion { .. } => DecodeStage::Convert,
            DecodeError::InBuffer { source, .. } => source.stage(),
        }
    }

    /// Index of the failing buffer, when the error came out of a merge.
    pub fn buffer_index(&self) -> Option<usize> {
        match self {
            DecodeError::InBuffer { buffer, .. } => Some(*buffer),
            _ => None,
        }
    }

    pub(crate) fn in_buffer(self, buffer: usize) -> Self {
        DecodeError::InBuffer {
            buffer,
            source: Box::new(self),
        }
    }
}

/// Errors returned by the record constructors.
///
/// Constructors check required-field presence and that every foreign key is
/// a UUIDv4. Decoding never produces these; a decoded record is trusted to be
/// whatever its source said.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    /// A required string field was empty or whitespace-only.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A foreign key is not a UUIDv4.
    #[error("invalid {field} format: must be UUIDv4")]
    InvalidReference {
        /// Name of the offending field.
        field: &'static str,
    },

    /// Country codes are ISO 3166-1 alpha-2.
    #[error("country must be a 2-letter code (got {0:?})")]
    InvalidCountryCode(String),

    /// The generated identifier failed its own UUIDv4 check.
    #[error("failed to generate valid UUIDv4")]
    IdGeneration,
}

/// Error returned by [`parse_time`](crate::time::parse_time) when no layout matches.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeParseError {
    /// None of the candidate layouts accepted the input.
    #[error("could not parse time: {0}")]
    Unrecognized(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_error_reports_inner_stage() {
        let inner = DecodeError::TypeConversion {
            record: 3,
            message: "invalid type: integer `7`, expected a string".into(),
        };
        let wrapped = inner.clone().in_buffer(2);

        assert_eq!(wrapped.stage(), DecodeStage::Convert);
        assert_eq!(wrapped.buffer_index(), Some(2));
        assert_eq!(inner.buffer_index(), None);
        assert!(wrapped.to_string().starts_with("buffer 2: record 3"));
    }

    #[test]
    fn decode_stage_for_size_limit() {
        let err = DecodeError::BufferTooLarge { size: 10, limit: 4 };
        assert_eq!(err.stage(), DecodeStage::Decode);
        assert_eq!(err.to_string(), "buffer of 10 bytes exceeds limit of 4 bytes");
    }

    #[test]
    fn validation_messages() {
        let err = ValidationError::InvalidReference {
            field: "organization_id",
        };
        assert_eq!(
            err.to_string(),
            "invalid organization_id format: must be UUIDv4"
        );
        assert_eq!(
            ValidationError::MissingField("name").to_string(),
            "name is required"
        );
    }
}
