use lazy_static::*;

use crate::big_int::{BigInt, Sign};
use crate::big_num_constants::*;

macro_rules! small_values {
    ($sign: expr) => {
        {
            let mut cache: [BigInt; MAX_CONSTANT + 1] = Default::default();
            for (word, slot) in cache.iter_mut().enumerate() {
                *slot = BigInt::from_word(word as u32, $sign);
            }
            cache
        }
    };
}

lazy_static! {
    /// `0..=MAX_CONSTANT`, indexed by value.
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] = small_values!(Sign::Positive);
    /// `0, -1, ..., -MAX_CONSTANT`, indexed by magnitude. Slot 0 holds zero.
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] = small_values!(Sign::Negative);
}

#[test]
fn test_cache_layout() {
    assert!(POS_CACHE[0].is_zero());
    assert!(!NEG_CACHE[0].is_negative());
    for i in 1..=MAX_CONSTANT {
        assert_eq!(POS_CACHE[i].to_i64(), Some(i as i64));
        assert_eq!(NEG_CACHE[i].to_i64(), Some(-(i as i64)));
    }
}
