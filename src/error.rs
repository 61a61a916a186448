//! Error types.

use core::fmt;

/// Errors raised on malformed inputs.
///
/// Every variant is a programmer error in the sense of RFC 9380: the call is
/// aborted and nothing is retried or silently patched up.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The domain separation tag is empty.
    ZeroLengthDst,
    /// The requested output length exceeds 65535 bytes, or requires more
    /// than 255 hash blocks from `expand_message_xmd`.
    RequestedLengthTooLarge,
    /// The I2OSP output length is outside `1..=4`.
    LengthInvalid,
    /// The I2OSP input does not fit in the requested number of octets.
    ValueOutOfRange,
    /// The oversize-DST rewrite needs a digest of at most 255 bytes, but the
    /// hash produces more.
    HashTooLong,
    /// The oversize-DST rewrite via XOF would need `ceil(2k / 8)` output
    /// bytes, which exceeds 255 for the requested security level.
    SecurityLevelTooHigh,
    /// The per-element byte length passed to `hash_to_field` is zero or
    /// larger than the reduction buffer.
    InvalidFieldByteLength,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroLengthDst => f.write_str("zero-length domain separation tag"),
            Error::RequestedLengthTooLarge => f.write_str("requested byte length is too high"),
            Error::LengthInvalid => f.write_str("I2OSP length must lie in 1..=4"),
            Error::ValueOutOfRange => f.write_str("I2OSP value is too high for the length"),
            Error::HashTooLong => f.write_str("hash output size is too long to rewrite the DST"),
            Error::SecurityLevelTooHigh => {
                f.write_str("XOF security level is too high to rewrite the DST")
            }
            Error::InvalidFieldByteLength => {
                f.write_str("per-element byte length is invalid for field reduction")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result type for this crate.
pub type Result<T> = core::result::Result<T, Error>;
