use super::MajorType;
use thiserror::Error;

/// Errors raised by the encoder, decoder and structural walker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Not enough data for encoded value: needed {needed} bytes, {remaining} remaining")]
    NotEnoughData { needed: usize, remaining: usize },

    #[error("Invalid minor-type value {0}")]
    InvalidMinorValue(u8),

    #[error("Incorrect type, expected {0}, found {1}")]
    IncorrectType(&'static str, MajorType),

    #[error("Negative integers must have a non-zero magnitude")]
    ZeroMagnitude,

    #[error("Integer with encoded value {0} does not fit in an i64")]
    IntegerOverflow(u64),

    #[error("Length {0} is too large for this platform")]
    TooLarge(u64),

    #[error("Unsupported simple or floating-point value {0}")]
    Unsupported(u8),

    #[error("Maximum nesting depth exceeded")]
    MaxRecursion,

    #[error("Failed to allocate {0} bytes")]
    AllocFailed(usize),

    #[error("Text string is not valid UTF-8")]
    InvalidUtf8,
}
