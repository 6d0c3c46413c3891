//! Unsigned kernels over little-endian word slices.
//!
//! None of these look at a sign. Inputs are assumed clamped; outputs are
//! clamped before they are returned.

use std::cmp::Ordering;

use crate::error::Result;
use crate::word_buf::WordBuf;

const LOW_MASK: u64 = 0xffff_ffff;

/// Compares two clamped magnitudes: word count first, then words from the
/// most significant end.
pub(crate) fn cmp_mag(a: &[u32], b: &[u32]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {}
        ord => return ord,
    }
    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        if x != y {
            return x.cmp(y);
        }
    }
    Ordering::Equal
}

/// `hi + lo`. Requires `hi.len() >= lo.len()`.
pub(crate) fn add_mag(hi: &[u32], lo: &[u32]) -> Result<WordBuf> {
    debug_assert!(hi.len() >= lo.len());
    let mut result = WordBuf::with_capacity(hi.len() + 1)?;
    let out = result.slots_mut();

    let mut carry: u64 = 0;
    for i in 0..lo.len() {
        let sum = hi[i] as u64 + lo[i] as u64 + carry;
        out[i] = sum as u32;
        carry = sum >> u32::BITS;
    }
    for i in lo.len()..hi.len() {
        let sum = hi[i] as u64 + carry;
        out[i] = sum as u32;
        carry = sum >> u32::BITS;
    }

    if carry != 0 {
        out[hi.len()] = carry as u32;
        result.set_len(hi.len() + 1);
    } else {
        result.set_len(hi.len());
    }
    Ok(result)
}

/// `hi - lo`. Requires `|hi| >= |lo|` numerically.
pub(crate) fn sub_mag(hi: &[u32], lo: &[u32]) -> Result<WordBuf> {
    debug_assert!(cmp_mag(hi, lo) != Ordering::Less);
    let mut result = WordBuf::with_capacity(hi.len())?;
    let out = result.slots_mut();

    // 0 or -1
    let mut borrow: i64 = 0;
    for i in 0..lo.len() {
        let difference = hi[i] as i64 - lo[i] as i64 + borrow;
        out[i] = difference as u32;
        borrow = difference >> u32::BITS;
    }
    for i in lo.len()..hi.len() {
        let difference = hi[i] as i64 + borrow;
        out[i] = difference as u32;
        borrow = difference >> u32::BITS;
    }
    debug_assert_eq!(borrow, 0);

    result.set_len(hi.len());
    result.clamp();
    Ok(result)
}

/// Schoolbook `a * b`.
pub(crate) fn mul_mag(a: &[u32], b: &[u32]) -> Result<WordBuf> {
    let result_len = a.len() + b.len();
    let mut result = WordBuf::with_capacity(result_len)?;
    if a.is_empty() || b.is_empty() {
        return Ok(result);
    }
    let out = result.slots_mut();

    for (i, &x) in a.iter().enumerate() {
        let mut carry: u64 = 0;
        for (j, &y) in b.iter().enumerate() {
            // (2^32 - 1) + (2^32 - 1)^2 + (2^32 - 1) == 2^64 - 1
            let product = out[i + j] as u64 + (x as u64) * (y as u64) + carry;
            out[i + j] = product as u32;
            carry = product >> u32::BITS;
        }
        out[i + b.len()] = carry as u32;
    }

    result.set_len(result_len);
    result.clamp();
    Ok(result)
}

/// `a * m` for a single-word multiplier.
pub(crate) fn mul_small(a: &[u32], m: u32) -> Result<WordBuf> {
    let mut result = WordBuf::from_slice(a)?;
    mul_small_assign(&mut result, m)?;
    Ok(result)
}

/// In-place `buf *= m`, growing `buf` by one word when a carry remains.
pub(crate) fn mul_small_assign(buf: &mut WordBuf, m: u32) -> Result<()> {
    if m == 0 {
        buf.clear();
        return Ok(());
    }
    let len = buf.len();
    let mut carry: u64 = 0;
    for w in &mut buf.slots_mut()[..len] {
        let product = (*w as u64) * (m as u64) + carry;
        *w = (product & LOW_MASK) as u32;
        carry = product >> u32::BITS;
    }
    if carry != 0 {
        buf.push(carry as u32)?;
    }
    Ok(())
}

/// In-place `buf += s` for a single-word addend.
pub(crate) fn add_small_assign(buf: &mut WordBuf, s: u32) -> Result<()> {
    let len = buf.len();
    let mut carry = s as u64;
    for w in &mut buf.slots_mut()[..len] {
        if carry == 0 {
            return Ok(());
        }
        let sum = *w as u64 + carry;
        *w = sum as u32;
        carry = sum >> u32::BITS;
    }
    if carry != 0 {
        buf.push(carry as u32)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: u32 = u32::MAX;

    #[test]
    fn compare_magnitudes() {
        assert_eq!(cmp_mag(&[], &[]), Ordering::Equal);
        assert_eq!(cmp_mag(&[1], &[]), Ordering::Greater);
        assert_eq!(cmp_mag(&[MAX], &[0, 1]), Ordering::Less);
        assert_eq!(cmp_mag(&[5, 2], &[4, 2]), Ordering::Greater);
        assert_eq!(cmp_mag(&[4, 2], &[4, 2]), Ordering::Equal);
    }

    #[test]
    fn add_propagates_carry_into_new_word() {
        let sum = add_mag(&[MAX, MAX], &[1]).unwrap();
        assert_eq!(sum.as_slice(), &[0, 0, 1]);

        let sum = add_mag(&[MAX, 3], &[MAX, 4]).unwrap();
        assert_eq!(sum.as_slice(), &[MAX - 1, 8]);

        let sum = add_mag(&[9], &[]).unwrap();
        assert_eq!(sum.as_slice(), &[9]);
    }

    #[test]
    fn sub_propagates_borrow_and_clamps() {
        let diff = sub_mag(&[0, 0, 1], &[1]).unwrap();
        assert_eq!(diff.as_slice(), &[MAX, MAX]);

        let diff = sub_mag(&[5, 7], &[6, 6]).unwrap();
        assert_eq!(diff.as_slice(), &[MAX]);

        let diff = sub_mag(&[3, 4], &[3, 4]).unwrap();
        assert!(diff.is_empty());
    }

    #[test]
    fn mul_accumulates_partial_products() {
        let product = mul_mag(&[MAX, MAX], &[MAX, MAX]).unwrap();
        // (2^64 - 1)^2 = 2^128 - 2^65 + 1
        assert_eq!(product.as_slice(), &[1, 0, MAX - 1, MAX]);

        let product = mul_mag(&[2], &[3, 1]).unwrap();
        assert_eq!(product.as_slice(), &[6, 2]);

        let product = mul_mag(&[], &[3]).unwrap();
        assert!(product.is_empty());
    }

    #[test]
    fn small_kernels() {
        let mut buf = WordBuf::from_vec(vec![0x8000_0000]);
        mul_small_assign(&mut buf, 4).unwrap();
        assert_eq!(buf.as_slice(), &[0, 2]);

        add_small_assign(&mut buf, MAX).unwrap();
        assert_eq!(buf.as_slice(), &[MAX, 2]);
        add_small_assign(&mut buf, 1).unwrap();
        assert_eq!(buf.as_slice(), &[0, 3]);

        let mut zero = WordBuf::new();
        add_small_assign(&mut zero, 7).unwrap();
        assert_eq!(zero.as_slice(), &[7]);
        mul_small_assign(&mut zero, 0).unwrap();
        assert!(zero.is_empty());

        assert_eq!(mul_small(&[3, 1], 0).unwrap().len(), 0);
        assert_eq!(mul_small(&[MAX], MAX).unwrap().as_slice(), &[1, MAX - 1]);
    }
}
