//! Word storage shared by every `BigInt`.
//!
//! A [`WordBuf`] owns a zero-initialised run of `capacity` word slots, of
//! which the first `len` are significant (least-significant word first).
//! Slots past `len` hold whatever the last operation left there unless the
//! operation that grew the buffer cleared them.

use tracing::{error, trace};

use crate::big_num_constants::*;
use crate::error::{BigIntError, Result};

#[derive(Debug, Clone, Default)]
pub(crate) struct WordBuf {
    // every slot is initialised, so `words.len()` is the capacity
    words: Vec<u32>,
    len: usize,
}

impl WordBuf {
    pub(crate) const fn new() -> Self {
        WordBuf { words: Vec::new(), len: 0 }
    }

    /// Allocates `capacity` zeroed slots with no significant words.
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self> {
        let mut words = Vec::new();
        words.try_reserve_exact(capacity).map_err(|_| {
            error!(words = capacity, "couldn't allocate word buffer");
            BigIntError::AllocationFailure { words: capacity }
        })?;
        words.resize(capacity, 0);
        Ok(WordBuf { words, len: 0 })
    }

    /// Takes ownership of `words` as the significant words, then clamps.
    pub(crate) fn from_vec(words: Vec<u32>) -> Self {
        let len = words.len();
        let mut buf = WordBuf { words, len };
        buf.clamp();
        buf
    }

    pub(crate) fn from_slice(src: &[u32]) -> Result<Self> {
        let mut buf = WordBuf::with_capacity(src.len())?;
        buf.words[..src.len()].copy_from_slice(src);
        buf.len = src.len();
        buf.clamp();
        Ok(buf)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub(crate) fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.capacity());
        self.len = len;
    }

    /// The significant words.
    #[inline]
    pub(crate) fn as_slice(&self) -> &[u32] {
        &self.words[..self.len]
    }

    /// Every allocated slot, significant or not.
    #[inline]
    pub(crate) fn slots_mut(&mut self) -> &mut [u32] {
        &mut self.words
    }

    /// Grows the capacity by at least `add` slots using the amortised
    /// formula `min + (min >> 3) + (min < 9 ? 3 : 6)` where
    /// `min = capacity + add`. New slots are zeroed.
    pub(crate) fn growcap(&mut self, add: usize) -> Result<()> {
        if add == 0 {
            return Ok(());
        }
        let capacity = self.capacity();
        let overflow = || {
            error!(capacity, additional = add, "word buffer capacity overflow");
            BigIntError::AllocationOverflow { capacity, additional: add }
        };

        let min_cap = capacity.checked_add(add).ok_or_else(overflow)?;
        let extra = (min_cap >> 3) + if min_cap < GROWTH_SMALL_LIMIT {
            GROWTH_SMALL_EXTRA
        } else {
            GROWTH_LARGE_EXTRA
        };
        let new_cap = min_cap.checked_add(extra).ok_or_else(overflow)?;

        self.words.try_reserve_exact(new_cap - capacity).map_err(|_| {
            error!(words = new_cap, "couldn't reallocate word buffer");
            BigIntError::AllocationFailure { words: new_cap }
        })?;
        self.words.resize(new_cap, 0);
        trace!(from = capacity, to = new_cap, "grew word buffer");
        Ok(())
    }

    /// Makes sure at least `total` slots exist.
    pub(crate) fn reserve_total(&mut self, total: usize) -> Result<()> {
        let capacity = self.capacity();
        if total > capacity {
            self.growcap(total - capacity)?;
        }
        Ok(())
    }

    /// Appends one most-significant word.
    pub(crate) fn push(&mut self, word: u32) -> Result<()> {
        self.reserve_total(self.len + 1)?;
        self.words[self.len] = word;
        self.len += 1;
        Ok(())
    }

    /// Drops superfluous leading zero words.
    pub(crate) fn clamp(&mut self) {
        while self.len > 0 && self.words[self.len - 1] == 0 {
            self.len -= 1;
        }
    }

    pub(crate) fn clear(&mut self) {
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growcap_follows_formula() {
        let mut buf = WordBuf::with_capacity(1).unwrap();
        buf.growcap(1).unwrap();
        // min 2 -> 2 + 0 + 3
        assert_eq!(buf.capacity(), 5);

        let mut buf = WordBuf::with_capacity(10).unwrap();
        buf.growcap(6).unwrap();
        // min 16 -> 16 + 2 + 6
        assert_eq!(buf.capacity(), 24);

        let mut buf = WordBuf::new();
        buf.growcap(0).unwrap();
        assert_eq!(buf.capacity(), 0);
    }

    #[test]
    fn growcap_zeroes_new_slots() {
        let mut buf = WordBuf::from_vec(vec![7, 8]);
        buf.growcap(3).unwrap();
        assert_eq!(buf.as_slice(), &[7, 8]);
        assert!(buf.slots_mut()[2..].iter().all(|w| *w == 0));
    }

    #[test]
    fn growcap_reports_overflow() {
        let mut buf = WordBuf::with_capacity(4).unwrap();
        assert_eq!(
            buf.growcap(usize::MAX - 2),
            Err(BigIntError::AllocationOverflow { capacity: 4, additional: usize::MAX - 2 })
        );
        // min fits, min + extra doesn't
        assert!(matches!(
            buf.growcap(usize::MAX - 10),
            Err(BigIntError::AllocationOverflow { .. })
        ));
        assert_eq!(buf.capacity(), 4);
    }

    #[test]
    fn with_capacity_reports_refused_allocation() {
        let words = usize::MAX / 2;
        assert_eq!(
            WordBuf::with_capacity(words).unwrap_err(),
            BigIntError::AllocationFailure { words }
        );
    }

    #[test]
    fn clamp_removes_leading_zeros() {
        let mut buf = WordBuf::from_vec(vec![1, 0, 0]);
        assert_eq!(buf.len(), 1);
        buf.set_len(3);
        buf.clamp();
        assert_eq!(buf.as_slice(), &[1]);

        let zero = WordBuf::from_vec(vec![0, 0]);
        assert!(zero.is_empty());
    }

    #[test]
    fn push_grows_on_demand() {
        let mut buf = WordBuf::new();
        for i in 1..=20 {
            buf.push(i).unwrap();
        }
        assert_eq!(buf.len(), 20);
        assert!(buf.capacity() >= 20);
        assert_eq!(buf.as_slice()[19], 20);
    }
}
