//! The error taxonomy and the result shapes every public operation returns.

/// Why a source sequence failed to decode.
///
/// One kind per failure; the scan loop never reports compound errors
/// and stops at the first one it finds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An unpaired high or low UTF-16 surrogate.
    SurrogateMismatch,
    /// A multi-byte UTF-8 sequence encoding a value representable in fewer bytes.
    OverlongSequence,
    /// A scalar value above `0x10FFFF` (UTF-32) or above `0xFF` into a LATIN-1 destination.
    TooLarge,
    /// A UTF-8 continuation byte was expected but the input ended first.
    TooShort,
    /// A UTF-8 byte whose top bits match no legal leading or continuation pattern.
    HeaderBits,
    /// A value in `[0xD800, 0xDFFF]` where a scalar value is required.
    SurrogateInScalar,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ErrorKind::SurrogateMismatch => "unpaired utf-16 surrogate",
            ErrorKind::OverlongSequence => "overlong utf-8 sequence",
            ErrorKind::TooLarge => "scalar value out of range for destination",
            ErrorKind::TooShort => "truncated utf-8 sequence",
            ErrorKind::HeaderBits => "invalid utf-8 leading byte",
            ErrorKind::SurrogateInScalar => "surrogate value where a scalar is required",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for ErrorKind {}

/// Result of [`crate::convert::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidateResult {
    /// `None` on success.
    pub error: Option<ErrorKind>,
    /// Number of source elements consumed. On success, equals the
    /// input length; on failure, the offset of the first invalid
    /// source element.
    pub input_consumed: usize,
}

/// Result of [`crate::convert::convert`] and [`crate::convert::convert_pure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertResult {
    pub error: Option<ErrorKind>,
    pub input_consumed: usize,
    pub output_written: usize,
}
