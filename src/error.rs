use thiserror::Error;

/// Result type alias for fallible `BigInt` operations.
pub type Result<T> = std::result::Result<T, BigIntError>;

/// Failures reported by `BigInt` operations.
///
/// Zero operands, negative operands and large length skew between operands
/// are all valid inputs and never produce an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BigIntError {
    /// The growth formula for the word buffer does not fit in `usize`.
    #[error("word buffer capacity overflow: {capacity} + {additional} words")]
    AllocationOverflow { capacity: usize, additional: usize },

    /// The allocator refused a word buffer of the requested size.
    #[error("couldn't allocate a word buffer of {words} words")]
    AllocationFailure { words: usize },

    /// The text is not an optionally negative run of ASCII decimal digits.
    #[error("invalid decimal integer {input:?}: {reason}")]
    InvalidFormat { input: String, reason: &'static str },

    /// The text has more digits than the configured limit allows.
    #[error("decimal integer has {digits} digits, limit is {max}")]
    TooManyDigits { digits: usize, max: usize },

    #[error("division by zero")]
    DivisionByZero,
}
