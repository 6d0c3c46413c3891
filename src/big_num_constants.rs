/// Bits in one word of a magnitude.
pub const WORD_BITS: usize = u32::BITS as usize;

/// Largest absolute value kept in the small-value cache.
pub const MAX_CONSTANT: usize = 16;

/// `log2(10)` scaled by 1024, rounded up. Used to size the word buffer
/// before parsing a decimal string.
pub const BITS_PER_DECIMAL_DIGIT: usize = 3402;

/// Default cap on the number of digits accepted by the decimal parser.
pub const DEFAULT_MAX_DECIMAL_DIGITS: usize = 1_000_000;

/// Growth increments for the word buffer: `(min_cap >> 3) + SMALL or LARGE`.
pub const GROWTH_SMALL_EXTRA: usize = 3;
pub const GROWTH_LARGE_EXTRA: usize = 6;

/// Capacities below this use `GROWTH_SMALL_EXTRA`.
pub const GROWTH_SMALL_LIMIT: usize = 9;
