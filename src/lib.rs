//! Big Num \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision signed integers in sign-magnitude form, with
//!   schoolbook multiplication, Knuth long division and decimal text conversion.
//!
//! Named methods (`try_add`, `div_rem`, `from_decimal_str`, ...) report failures as
//! [`BigIntError`]. The arithmetic operators are shorthand for them and panic on error,
//! the way integer division by zero does.
//!
//! ```
//! use big_num::BigInt;
//!
//! let a: BigInt = "-10000000000000000000000".parse().unwrap();
//! let b = BigInt::from(7);
//! let (q, r) = a.div_rem(&b).unwrap();
//! assert_eq!(q.to_string(), "-1428571428571428571428");
//! assert_eq!(r, BigInt::from(-4));
//! ```

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod decimal;
mod division;
mod error;
mod magnitude;
mod shift;
mod word_buf;

pub use big_int::{BigInt, Sign};
pub use decimal::DecimalLimits;
pub use error::{BigIntError, Result};
