//! # BigInt
//! Arbitrary-precision signed integers in sign-magnitude form.
//! The magnitude is a run of base `2^32` words, least significant first.
//! # Example
//! ```
//! use big_num::BigInt;
//!
//! let a: BigInt = "-123406489791".parse().unwrap();
//! let b = BigInt::from(-10);
//! assert_eq!((&a * &b).to_string(), "1234064897910");
//! assert_eq!(&a - &a, BigInt::default());
//! assert_eq!(a.mul_int(4).unwrap(), &a << 2);
//! assert_eq!(a.bit_length(), 37);
//! ```
//!
//! Named methods such as [`BigInt::try_add`] and [`BigInt::div_rem`] report
//! failures as [`BigIntError`](crate::BigIntError). The operator forms behave like the primitive
//! integer operators and panic instead.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    Neg,
};

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::error::Result;
use crate::magnitude::*;
use crate::word_buf::WordBuf;

pub(crate) const ZERO: BigInt = BigInt { sign: Sign::Positive, mag: WordBuf::new() };

macro_rules! bit_length_u32 {
    ($n: expr) => {
        (32 - $n.leading_zeros()) as usize
    };
}

/// Sign of a [`BigInt`]. Zero is always `Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Sign {
    Negative,
    #[default]
    Positive,
}

impl Sign {
    fn of(val: i64) -> Sign {
        if val < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }
}

/// Sign of a product or quotient.
impl Mul for Sign {
    type Output = Sign;

    fn mul(self, other: Sign) -> Sign {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

#[derive(Clone, Default)]
pub struct BigInt {
    sign: Sign,
    mag: WordBuf,
}

// 杂项辅助函数
impl BigInt {
    /// Builds a value from a clamped magnitude, forcing zero to `Positive`.
    pub(crate) fn from_parts(sign: Sign, mag: WordBuf) -> BigInt {
        let sign = if mag.is_empty() { Sign::Positive } else { sign };
        BigInt { sign, mag }
    }

    /// A zero value with `capacity` preallocated words, used as a scratch or
    /// result buffer.
    pub(crate) fn with_capacity(capacity: usize) -> Result<BigInt> {
        Ok(BigInt { sign: Sign::Positive, mag: WordBuf::with_capacity(capacity)? })
    }

    #[inline]
    pub(crate) fn mag(&self) -> &[u32] {
        self.mag.as_slice()
    }

    #[inline]
    pub(crate) fn mag_buf_mut(&mut self) -> &mut WordBuf {
        &mut self.mag
    }

    /// Restores the positive sign after the magnitude was cleared in place.
    pub(crate) fn canonicalize_zero(&mut self) {
        if self.mag.is_empty() {
            self.sign = Sign::Positive;
        }
    }

    /// Copy that reports allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<BigInt> {
        Ok(BigInt { sign: self.sign, mag: WordBuf::from_slice(self.mag())? })
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn is_zero(&self) -> bool {
        self.mag.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Number of significant words.
    pub fn word_len(&self) -> usize {
        self.mag.len()
    }

    /// Number of allocated word slots, never less than [`BigInt::word_len`].
    pub fn capacity(&self) -> usize {
        self.mag.capacity()
    }

    /// Bits needed for the magnitude, 0 for zero.
    pub fn bit_length(&self) -> usize {
        match self.mag().last() {
            None => 0,
            Some(top) => (self.mag.len() - 1) * WORD_BITS + bit_length_u32!(top),
        }
    }
}

// 实现构造
macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64, Sign::Positive)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::from_int(val as i64)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);
impl_signed_to_big_int!(i8, i16, i32, isize, i64);

impl BigInt {
    pub fn from_int(val: i64) -> BigInt {
        BigInt::value_of(val.unsigned_abs(), Sign::of(val))
    }

    pub(crate) fn from_word(word: u32, sign: Sign) -> BigInt {
        BigInt::from_parts(sign, WordBuf::from_vec(vec![word]))
    }

    fn value_of(val: u64, sign: Sign) -> BigInt {
        if val <= MAX_CONSTANT as u64 {
            match sign {
                Sign::Positive => POS_CACHE[val as usize].clone(),
                Sign::Negative => NEG_CACHE[val as usize].clone(),
            }
        } else {
            let mag = WordBuf::from_vec(vec![val as u32, (val >> u32::BITS) as u32]);
            BigInt::from_parts(sign, mag)
        }
    }

    /// Overwrites the value, reusing the word buffer when it is large enough.
    pub fn set_int(&mut self, val: i64) -> &mut Self {
        if self.mag.capacity() >= 2 {
            let abs = val.unsigned_abs();
            let slots = self.mag.slots_mut();
            slots[0] = abs as u32;
            slots[1] = (abs >> u32::BITS) as u32;
            self.mag.set_len(2);
            self.mag.clamp();
            self.sign = if self.mag.is_empty() { Sign::Positive } else { Sign::of(val) };
        } else {
            *self = BigInt::from_int(val);
        }
        self
    }

    /// The value as `i64`, or `None` when it does not fit.
    pub fn to_i64(&self) -> Option<i64> {
        let abs = match *self.mag() {
            [] => 0,
            [lo] => lo as u64,
            [lo, hi] => ((hi as u64) << u32::BITS) | lo as u64,
            _ => return None,
        };
        match self.sign {
            Sign::Positive => i64::try_from(abs).ok(),
            Sign::Negative if abs <= i64::MIN.unsigned_abs() => Some((abs as i64).wrapping_neg()),
            Sign::Negative => None,
        }
    }
}

// 实现大小比较
fn cmp_signed(a_sign: Sign, a_mag: &[u32], b_sign: Sign, b_mag: &[u32]) -> Ordering {
    match a_sign.cmp(&b_sign) {
        Ordering::Equal => {}
        ord => return ord,
    }
    let ord = cmp_mag(a_mag, b_mag);
    match a_sign {
        Sign::Positive => ord,
        Sign::Negative => ord.reverse(),
    }
}

impl BigInt {
    /// Compares magnitudes only.
    pub fn compare_magnitude(&self, other: &BigInt) -> Ordering {
        cmp_mag(self.mag(), other.mag())
    }

    pub fn compare_to_int(&self, val: i64) -> Ordering {
        let abs = val.unsigned_abs();
        let words = [abs as u32, (abs >> u32::BITS) as u32];
        let len = if words[1] != 0 {
            2
        } else if words[0] != 0 {
            1
        } else {
            0
        };
        cmp_signed(self.sign, self.mag(), Sign::of(val), &words[..len])
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.mag() == other.mag()
    }
}
impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_signed(self.sign, self.mag(), other.sign, other.mag())
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.mag().hash(state);
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BigInt").field(&format_args!("{}", self)).finish()
    }
}

// 实现绝对值
impl BigInt {
    pub fn abs(&self) -> BigInt {
        let mut abs = self.clone();
        abs.sign = Sign::Positive;
        abs
    }

    pub fn negate(&self) -> BigInt {
        self.clone().neg()
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let BigInt { sign, mag } = self;
        BigInt::from_parts(-sign, mag)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现加法
impl BigInt {
    pub fn try_add(&self, other: &BigInt) -> Result<BigInt> {
        let cmp = self.compare_magnitude(other);
        let (hi, lo) = if cmp == Ordering::Less { (other, self) } else { (self, other) };

        if self.sign == other.sign {
            let mag = add_mag(hi.mag(), lo.mag())?;
            return Ok(BigInt::from_parts(self.sign, mag));
        }

        match cmp {
            Ordering::Equal => Ok(ZERO),
            Ordering::Greater => Ok(BigInt::from_parts(self.sign, sub_mag(hi.mag(), lo.mag())?)),
            Ordering::Less => Ok(BigInt::from_parts(other.sign, sub_mag(hi.mag(), lo.mag())?)),
        }
    }

    pub fn add_int(&self, val: i64) -> Result<BigInt> {
        if val == 0 {
            return self.try_clone();
        }
        self.try_add(&BigInt::from_int(val))
    }
}

// 实现减法
impl BigInt {
    pub fn try_sub(&self, other: &BigInt) -> Result<BigInt> {
        let cmp = self.compare_magnitude(other);
        let (hi, lo) = if cmp == Ordering::Less { (other, self) } else { (self, other) };

        if self.sign != other.sign {
            // a - (-b) == a + b, -a - b == -(a + b)
            let mag = add_mag(hi.mag(), lo.mag())?;
            return Ok(BigInt::from_parts(self.sign, mag));
        }

        match cmp {
            Ordering::Equal => Ok(ZERO),
            Ordering::Greater => Ok(BigInt::from_parts(self.sign, sub_mag(hi.mag(), lo.mag())?)),
            Ordering::Less => Ok(BigInt::from_parts(-other.sign, sub_mag(hi.mag(), lo.mag())?)),
        }
    }

    pub fn sub_int(&self, val: i64) -> Result<BigInt> {
        if val == 0 {
            return self.try_clone();
        }
        self.try_sub(&BigInt::from_int(val))
    }
}

// 实现乘法
impl BigInt {
    pub fn try_mul(&self, other: &BigInt) -> Result<BigInt> {
        if self.is_zero() || other.is_zero() {
            return Ok(ZERO);
        }
        // longer operand in the outer loop
        let (x, y) = if self.word_len() >= other.word_len() { (self, other) } else { (other, self) };
        let mag = mul_mag(x.mag(), y.mag())?;
        Ok(BigInt::from_parts(self.sign * other.sign, mag))
    }

    pub fn mul_int(&self, val: i64) -> Result<BigInt> {
        if self.is_zero() || val == 0 {
            return Ok(ZERO);
        }
        let sign = self.sign * Sign::of(val);
        match u32::try_from(val.unsigned_abs()) {
            Ok(word) => Ok(BigInt::from_parts(sign, mul_small(self.mag(), word)?)),
            Err(_) => self.try_mul(&BigInt::from_int(val)),
        }
    }
}

// 实现位访问
impl BigInt {
    /// Bit `n` of the magnitude.
    pub fn bit(&self, n: usize) -> bool {
        match self.mag().get(n / WORD_BITS) {
            Some(word) => (word >> (n % WORD_BITS)) & 1 == 1,
            None => false,
        }
    }

    /// Sets or clears bit `n` of the magnitude. The sign is kept unless the
    /// value becomes zero.
    pub fn set_bit(&mut self, n: usize, value: bool) -> Result<()> {
        let index = n / WORD_BITS;
        let mask = 1u32 << (n % WORD_BITS);
        let len = self.mag.len();

        if value {
            if index >= len {
                self.mag.reserve_total(index + 1)?;
                self.mag.slots_mut()[len..=index].fill(0);
                self.mag.set_len(index + 1);
            }
            self.mag.slots_mut()[index] |= mask;
        } else if index < len {
            self.mag.slots_mut()[index] &= !mask;
            self.mag.clamp();
            self.canonicalize_zero();
        }
        Ok(())
    }
}

// 实现运算符
macro_rules! impl_binary_op {
    ($($Op: ident, $op: ident, $OpAssign: ident, $op_assign: ident, $method: ident;)*) => {
    $(
    impl $Op<&BigInt> for &BigInt {
        type Output = BigInt;

        fn $op(self, rhs: &BigInt) -> Self::Output {
            self.$method(rhs).unwrap_or_else(|err| panic!("{}", err))
        }
    }

    impl $Op for BigInt {
        type Output = BigInt;

        fn $op(self, rhs: Self) -> Self::Output {
            <&BigInt as $Op<&BigInt>>::$op(&self, &rhs)
        }
    }

    impl $Op<&BigInt> for BigInt {
        type Output = BigInt;

        fn $op(self, rhs: &BigInt) -> Self::Output {
            <&BigInt as $Op<&BigInt>>::$op(&self, rhs)
        }
    }

    impl $Op<BigInt> for &BigInt {
        type Output = BigInt;

        fn $op(self, rhs: BigInt) -> Self::Output {
            <&BigInt as $Op<&BigInt>>::$op(self, &rhs)
        }
    }

    impl $OpAssign<&BigInt> for BigInt {
        fn $op_assign(&mut self, rhs: &BigInt) {
            *self = <&BigInt as $Op<&BigInt>>::$op(&*self, rhs);
        }
    }

    impl $OpAssign for BigInt {
        fn $op_assign(&mut self, rhs: Self) {
            *self = <&BigInt as $Op<&BigInt>>::$op(&*self, &rhs);
        }
    }
    )*
    };
}

// # Panics
// Division and remainder panic on a zero divisor; every operator panics if
// the allocator refuses a word buffer.
impl_binary_op! {
    Add, add, AddAssign, add_assign, try_add;
    Sub, sub, SubAssign, sub_assign, try_sub;
    Mul, mul, MulAssign, mul_assign, try_mul;
    Div, div, DivAssign, div_assign, try_div;
    Rem, rem, RemAssign, rem_assign, try_rem;
}

// 实现左移
impl Shl<usize> for BigInt {
    type Output = BigInt;

    fn shl(mut self, n: usize) -> Self::Output {
        self <<= n;
        self
    }
}

impl Shl<usize> for &BigInt {
    type Output = BigInt;

    fn shl(self, n: usize) -> Self::Output {
        self.clone() << n
    }
}

impl ShlAssign<usize> for BigInt {
    fn shl_assign(&mut self, n: usize) {
        if let Err(err) = self.lshift(n) {
            panic!("{}", err);
        }
    }
}

// 实现右移
impl Shr<usize> for BigInt {
    type Output = BigInt;

    fn shr(mut self, n: usize) -> Self::Output {
        self >>= n;
        self
    }
}

impl Shr<usize> for &BigInt {
    type Output = BigInt;

    fn shr(self, n: usize) -> Self::Output {
        self.clone() >> n
    }
}

impl ShrAssign<usize> for BigInt {
    fn shr_assign(&mut self, n: usize) {
        self.rshift(n);
    }
}

#[cfg(test)]
fn big(s: &str) -> BigInt {
    BigInt::from_decimal_str(s).unwrap()
}

#[test]
fn test_from() {
    let big: BigInt = 12_i8.into();
    assert_eq!(big.mag(), &[12]);
    assert_eq!(big.sign(), Sign::Positive);

    let big: BigInt = (-100_i16).into();
    assert_eq!(big.mag(), &[100]);
    assert_eq!(big.sign(), Sign::Negative);

    let big: BigInt = i64::MIN.into();
    assert_eq!(big.mag(), &[0, 0x8000_0000]);
    assert_eq!(big.to_i64(), Some(i64::MIN));

    let big: BigInt = u64::MAX.into();
    assert_eq!(big.mag(), &[u32::MAX, u32::MAX]);
    assert_eq!(big.to_i64(), None);

    let zero = BigInt::from_int(0);
    assert!(zero.is_zero());
    assert_eq!(zero, ZERO);
    assert_eq!(BigInt::from_int(-7), NEG_CACHE[7]);
}

#[test]
fn test_set_int_reuses_buffer() {
    let mut a = big("-123456789012345678901234567890");
    let capacity = a.capacity();
    a.set_int(-5_000_000_000);
    assert_eq!(a.to_i64(), Some(-5_000_000_000));
    assert_eq!(a.capacity(), capacity);
    a.set_int(0);
    assert!(a.is_zero());
    assert_eq!(a.sign(), Sign::Positive);

    let mut b = BigInt::from_int(3);
    b.set_int(i64::MAX);
    assert_eq!(b.to_i64(), Some(i64::MAX));
}

#[test]
fn test_compare() {
    let a = big("-100000000000000000000");
    let b = big("-99999999999999999999");
    let c = big("5");
    assert!(a < b);
    assert!(b < ZERO);
    assert!(ZERO < c);
    assert!(a < c);
    assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    assert_eq!(a.compare_magnitude(&b), Ordering::Greater);

    assert_eq!(c.compare_to_int(5), Ordering::Equal);
    assert_eq!(c.compare_to_int(-5), Ordering::Greater);
    assert_eq!(ZERO.compare_to_int(0), Ordering::Equal);
    assert_eq!(ZERO.compare_to_int(1), Ordering::Less);
    assert_eq!(b.compare_to_int(i64::MIN), Ordering::Less);
    assert_eq!(BigInt::from_int(i64::MIN).compare_to_int(i64::MIN), Ordering::Equal);
    assert_eq!(BigInt::from_int(-3).compare_to_int(-4), Ordering::Greater);
}

#[test]
fn test_add() {
    assert_eq!(big("4294967295") + big("1"), big("4294967296"));
    assert_eq!(big("-4294967296") + big("1"), big("-4294967295"));
    assert_eq!(big("1") + big("-4294967296"), big("-4294967295"));
    assert_eq!(big("-7") + big("-8"), big("-15"));
    assert_eq!(big("12345678901234567890") + big("-12345678901234567890"), ZERO);
    assert!((big("-5") + big("5")).sign() == Sign::Positive);
    assert_eq!(big("99").add_int(-100).unwrap(), big("-1"));
    assert_eq!(big("99").add_int(0).unwrap(), big("99"));
}

#[test]
fn test_sub_all_sign_cases() {
    // equal signs, |a| >= |b|
    assert_eq!(big("12340000000000000") - big("10000000000000000"), big("2340000000000000"));
    assert_eq!(big("-30") - big("-20"), big("-10"));
    // equal signs, |a| < |b|
    assert_eq!(big("20") - big("30"), big("-10"));
    assert_eq!(big("-20") - big("-30000000000"), big("29999999980"));
    // different signs, |a| >= |b|
    assert_eq!(big("30") - big("-20"), big("50"));
    assert_eq!(big("-30") - big("20"), big("-50"));
    // different signs, |a| < |b|
    assert_eq!(big("20") - big("-30"), big("50"));
    assert_eq!(big("-20") - big("30"), big("-50"));
    // |a| == |b|
    assert_eq!(big("-18446744073709551616") - big("-18446744073709551616"), ZERO);
    assert_eq!(big("7") - big("-7"), big("14"));
    assert_eq!(big("10").sub_int(i64::MIN).unwrap(), big("9223372036854775818"));
}

#[test]
fn test_mul() {
    assert_eq!(big("-123406489791") * big("-10"), big("1234064897910"));
    assert_eq!(big("10000000000000000") * big("3001"), big("30010000000000000000"));
    assert_eq!(big("3001") * big("10000000000000000"), big("30010000000000000000"));
    assert_eq!(
        big("10000000000000000") * big("-30000000000000000"),
        big("-300000000000000000000000000000000")
    );
    let product = big("-98765432109876543210") * ZERO;
    assert_eq!(product, ZERO);
    assert_eq!(product.capacity(), 0);
    assert_eq!(big("-4294967296").mul_int(-4294967296).unwrap(), big("18446744073709551616"));
    assert_eq!(big("4294967295").mul_int(-4294967295).unwrap(), big("-18446744065119617025"));
}

#[test]
fn test_bits() {
    let mut a = ZERO;
    a.set_bit(64, true).unwrap();
    assert_eq!(a, big("18446744073709551616"));
    assert!(a.bit(64));
    assert!(!a.bit(63));
    assert!(!a.bit(1000));
    assert_eq!(a.bit_length(), 65);

    let mut b = -a;
    b.set_bit(0, true).unwrap();
    assert_eq!(b, big("-18446744073709551617"));
    b.set_bit(64, false).unwrap();
    assert_eq!(b, big("-1"));
    assert_eq!(b.word_len(), 1);
    b.set_bit(0, false).unwrap();
    assert_eq!(b, ZERO);
    assert_eq!(b.sign(), Sign::Positive);
}

#[test]
fn test_neg_abs() {
    let a = big("-42");
    assert_eq!(-&a, big("42"));
    assert_eq!(a.abs(), big("42"));
    assert_eq!(a.negate().negate(), a);
    assert_eq!((-ZERO).sign(), Sign::Positive);
}
