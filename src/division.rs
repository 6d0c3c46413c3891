//! Truncating division: the quotient rounds toward zero and a nonzero
//! remainder takes the sign of the dividend, as with `/` and `%` on the
//! primitive integers.

use std::cmp::Ordering;

use tracing::trace;

use crate::big_int::BigInt;
use crate::error::{BigIntError, Result};
use crate::magnitude::cmp_mag;
use crate::shift::shl_bits_into;
use crate::word_buf::WordBuf;

const BASE: u64 = 1 << u32::BITS;
const LOW_MASK: u64 = BASE - 1;

impl BigInt {
    /// Returns `(quotient, remainder)` with `self == quotient * divisor + remainder`
    /// and `|remainder| < |divisor|`.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok((BigInt::default(), BigInt::default()));
        }

        let q_sign = self.sign() * divisor.sign();
        let r_sign = self.sign();

        if let [d] = *divisor.mag() {
            trace!(dividend_words = self.word_len(), "single-word division");
            let (q, r) = div_rem_word(self.mag(), d)?;
            let r = WordBuf::from_vec(vec![r]);
            return Ok((BigInt::from_parts(q_sign, q), BigInt::from_parts(r_sign, r)));
        }

        if cmp_mag(self.mag(), divisor.mag()) == Ordering::Less {
            return Ok((BigInt::default(), self.try_clone()?));
        }

        trace!(
            dividend_words = self.word_len(),
            divisor_words = divisor.word_len(),
            "long division"
        );
        let (q, r) = div_rem_knuth(self.mag(), divisor.mag())?;
        Ok((BigInt::from_parts(q_sign, q), BigInt::from_parts(r_sign, r)))
    }

    pub fn try_div(&self, divisor: &BigInt) -> Result<BigInt> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    pub fn try_rem(&self, divisor: &BigInt) -> Result<BigInt> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    pub fn div_rem_int(&self, divisor: i64) -> Result<(BigInt, BigInt)> {
        self.div_rem(&BigInt::from_int(divisor))
    }

    pub fn div_int(&self, divisor: i64) -> Result<BigInt> {
        self.div_rem_int(divisor).map(|(q, _)| q)
    }

    pub fn rem_int(&self, divisor: i64) -> Result<BigInt> {
        self.div_rem_int(divisor).map(|(_, r)| r)
    }
}

/// `u / d` and `u % d` for a single nonzero word `d`.
pub(crate) fn div_rem_word(u: &[u32], d: u32) -> Result<(WordBuf, u32)> {
    let mut q = WordBuf::from_slice(u)?;
    let r = div_rem_word_in_place(&mut q, d);
    Ok((q, r))
}

/// Replaces `buf` with `buf / d` and returns `buf % d`.
pub(crate) fn div_rem_word_in_place(buf: &mut WordBuf, d: u32) -> u32 {
    debug_assert!(d != 0);
    let d = d as u64;
    let len = buf.len();
    let mut k: u64 = 0;
    for word in buf.slots_mut()[..len].iter_mut().rev() {
        k = (k << u32::BITS) | *word as u64;
        let q = k / d;
        k -= q * d;
        *word = q as u32;
    }
    buf.clamp();
    k as u32
}

/// Knuth, The Art of Computer Programming Vol. 2, section 4.3.1, Algorithm D.
///
/// Requires `v.len() >= 2` and `u >= v`. Both inputs are clamped, little
/// endian, and left untouched.
fn div_rem_knuth(u: &[u32], v: &[u32]) -> Result<(WordBuf, WordBuf)> {
    let n = v.len();
    let m = u.len();
    debug_assert!(n >= 2 && m >= n);

    // D1 normalize: shift so the top divisor word has its high bit set.
    // The dividend gets one extra word for the bits pushed out of its top.
    let shift = v[n - 1].leading_zeros();
    let mut vn = WordBuf::with_capacity(n)?;
    shl_bits_into(v, shift, vn.slots_mut());
    vn.set_len(n);
    let mut un = WordBuf::with_capacity(m + 1)?;
    let top = shl_bits_into(u, shift, un.slots_mut());
    un.slots_mut()[m] = top;

    let mut q = WordBuf::with_capacity(m - n + 1)?;
    {
        let vn = vn.as_slice();
        let un = un.slots_mut();
        let qs = q.slots_mut();
        let v_top = vn[n - 1] as u64;
        let v_next = vn[n - 2] as u64;

        // D2..D7
        for j in (0..=m - n).rev() {
            // D3 estimate qhat from the top two words of the window
            let num = ((un[j + n] as u64) << u32::BITS) | un[j + n - 1] as u64;
            let mut qhat = num / v_top;
            let mut rhat = num % v_top;
            while qhat >= BASE || qhat * v_next > ((rhat << u32::BITS) | un[j + n - 2] as u64) {
                qhat -= 1;
                rhat += v_top;
                if rhat >= BASE {
                    break;
                }
            }

            // D4 multiply and subtract
            let borrow = mul_sub(&mut un[j..=j + n], vn, qhat);

            // D5, D6 the estimate was one too large: add back
            if borrow {
                qhat -= 1;
                add_back(&mut un[j..=j + n], vn);
            }
            qs[j] = qhat as u32;
        }
    }
    q.set_len(m - n + 1);
    q.clamp();

    // D8 unnormalize the remainder
    let mut r = WordBuf::with_capacity(n)?;
    {
        let un = un.slots_mut();
        let rs = r.slots_mut();
        for i in 0..n - 1 {
            // a u64 shift so that shift == 0 moves nothing in from above
            rs[i] = (un[i] >> shift) | ((un[i + 1] as u64) << (u32::BITS - shift)) as u32;
        }
        rs[n - 1] = un[n - 1] >> shift;
    }
    r.set_len(n);
    r.clamp();
    Ok((q, r))
}

/// `window -= qhat * v` where `window` has `v.len() + 1` words. Returns
/// whether the subtraction went below zero.
fn mul_sub(window: &mut [u32], v: &[u32], qhat: u64) -> bool {
    let n = v.len();
    let mut k: i64 = 0;
    for i in 0..n {
        let product = qhat * v[i] as u64;
        let t = window[i] as i64 - k - (product & LOW_MASK) as i64;
        window[i] = t as u32;
        k = (product >> u32::BITS) as i64 - (t >> u32::BITS);
    }
    let t = window[n] as i64 - k;
    window[n] = t as u32;
    t < 0
}

/// `window += v`, dropping the carry out of the top word.
fn add_back(window: &mut [u32], v: &[u32]) {
    let n = v.len();
    let mut carry: u64 = 0;
    for i in 0..n {
        let sum = window[i] as u64 + v[i] as u64 + carry;
        window[i] = sum as u32;
        carry = sum >> u32::BITS;
    }
    window[n] = window[n].wrapping_add(carry as u32);
}
