//! Multi-word bit shifts.
//!
//! [`BigInt::lshift`] and [`BigInt::rshift`] rewrite the value in place and
//! hand the same value back; the `<<` and `>>` operators are the pure forms.
//! Shifting works on the magnitude, so a right shift of a negative value
//! truncates toward zero.

use crate::big_int::BigInt;
use crate::big_num_constants::*;
use crate::error::Result;
use crate::word_buf::WordBuf;

impl BigInt {
    /// Multiplies by `2^n` in place.
    pub fn lshift(&mut self, n: usize) -> Result<&mut Self> {
        shl_in_place(self.mag_buf_mut(), n)?;
        Ok(self)
    }

    /// Divides the magnitude by `2^n` in place, discarding the shifted-out
    /// bits. A value shifted down to zero becomes positive zero.
    pub fn rshift(&mut self, n: usize) -> &mut Self {
        shr_in_place(self.mag_buf_mut(), n);
        self.canonicalize_zero();
        self
    }
}

pub(crate) fn shl_in_place(buf: &mut WordBuf, n: usize) -> Result<()> {
    if n == 0 || buf.is_empty() {
        return Ok(());
    }
    let n_words = n / WORD_BITS;
    let n_bits = (n % WORD_BITS) as u32;
    let len = buf.len();

    // one spare word for the carry out of the bit shift
    buf.reserve_total(len + n_words + 1)?;
    let words = buf.slots_mut();

    if n_words != 0 {
        words.copy_within(0..len, n_words);
        words[..n_words].fill(0);
    }
    let mut new_len = len + n_words;

    if n_bits != 0 {
        let carry = shl_bits(&mut words[n_words..new_len], n_bits);
        if carry != 0 {
            words[new_len] = carry;
            new_len += 1;
        }
    }
    buf.set_len(new_len);
    Ok(())
}

pub(crate) fn shr_in_place(buf: &mut WordBuf, n: usize) {
    if n == 0 || buf.is_empty() {
        return;
    }
    let n_words = n / WORD_BITS;
    let n_bits = (n % WORD_BITS) as u32;
    let len = buf.len();

    if n_words >= len {
        buf.clear();
        return;
    }
    let bit_len = match buf.as_slice().last() {
        Some(top) => (len - 1) * WORD_BITS + (WORD_BITS - top.leading_zeros() as usize),
        None => 0,
    };
    if bit_len <= n {
        buf.clear();
        return;
    }

    let words = buf.slots_mut();
    if n_words != 0 {
        words.copy_within(n_words..len, 0);
    }
    let kept = len - n_words;
    if n_bits != 0 {
        let mut carry = 0u32;
        for word in words[..kept].iter_mut().rev() {
            let low = *word << (u32::BITS - n_bits);
            *word = (*word >> n_bits) | carry;
            carry = low;
        }
    }
    buf.set_len((bit_len - n + WORD_BITS - 1) / WORD_BITS);
}

/// Shifts `words` left by `n_bits` (< 32) in place and returns the bits
/// pushed out of the top word.
fn shl_bits(words: &mut [u32], n_bits: u32) -> u32 {
    debug_assert!(n_bits < u32::BITS);
    if n_bits == 0 {
        return 0;
    }
    let mut carry = 0u32;
    for word in words.iter_mut() {
        let high = *word >> (u32::BITS - n_bits);
        *word = (*word << n_bits) | carry;
        carry = high;
    }
    carry
}

/// Copies `src` shifted left by `n_bits` (< 32) into `dst[..src.len()]` and
/// returns the carry out of the top word.
pub(crate) fn shl_bits_into(src: &[u32], n_bits: u32, dst: &mut [u32]) -> u32 {
    let dst = &mut dst[..src.len()];
    dst.copy_from_slice(src);
    shl_bits(dst, n_bits)
}
