use std::cmp::Ordering;

use big_num::{BigInt, BigIntError};
use proptest::prelude::*;

const DECIMAL: &str = "-?[0-9]{1,60}";

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

/// Strips redundant leading zeros and turns `-0` into `0`.
fn canonical(s: &str) -> String {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let digits = digits.trim_start_matches('0');
    match (digits.is_empty(), negative) {
        (true, _) => "0".to_owned(),
        (false, true) => format!("-{}", digits),
        (false, false) => digits.to_owned(),
    }
}

#[test]
fn decimal_round_trip() {
    proptest!(|(s in DECIMAL)| {
        let value = big(&s);
        prop_assert_eq!(value.to_decimal_string().unwrap(), canonical(&s));
        prop_assert_eq!(value.to_string(), canonical(&s));
    });
}

#[test]
fn add_and_mul_commute() {
    proptest!(|(a in DECIMAL, b in DECIMAL)| {
        let (a, b) = (big(&a), big(&b));
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&a * &b, &b * &a);
    });
}

#[test]
fn add_associates() {
    proptest!(|(a in DECIMAL, b in DECIMAL, c in DECIMAL)| {
        let (a, b, c) = (big(&a), big(&b), big(&c));
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    });
}

#[test]
fn identity_and_inverse() {
    proptest!(|(a in DECIMAL)| {
        let a = big(&a);
        prop_assert_eq!(&a + &BigInt::from_int(0), a.clone());
        let zero = &a + &a.negate();
        prop_assert!(zero.is_zero());
        prop_assert!(!zero.is_negative());
        prop_assert_eq!(zero.word_len(), 0);
    });
}

#[test]
fn division_law() {
    proptest!(|(a in DECIMAL, b in "-?[1-9][0-9]{0,40}")| {
        let (a, b) = (big(&a), big(&b));
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert_eq!(&(&q * &b) + &r, a.clone());
        prop_assert_eq!(r.compare_magnitude(&b), Ordering::Less);
        prop_assert!(r.is_zero() || r.sign() == a.sign());
    });
}

#[test]
fn shift_round_trip() {
    proptest!(|(a in DECIMAL, n in 0usize..300)| {
        let a = big(&a);
        let mut shifted = a.clone();
        shifted.lshift(n).unwrap();
        shifted.rshift(n);
        prop_assert_eq!(&shifted, &a);
        prop_assert_eq!((&a << n) >> n, a);
    });
}

#[test]
fn agrees_with_i128() {
    proptest!(|(x in any::<i64>(), y in any::<i64>())| {
        let (a, b) = (BigInt::from(x), BigInt::from(y));
        let (x, y) = (x as i128, y as i128);
        prop_assert_eq!((&a + &b).to_string(), (x + y).to_string());
        prop_assert_eq!((&a - &b).to_string(), (x - y).to_string());
        prop_assert_eq!((&a * &b).to_string(), (x * y).to_string());
        prop_assert_eq!(a.cmp(&b), x.cmp(&y));
        prop_assert_eq!(a.compare_to_int(y as i64), x.cmp(&y));
        if y != 0 {
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(q.to_string(), (x / y).to_string());
            prop_assert_eq!(r.to_string(), (x % y).to_string());
        }
    });
}

#[test]
fn scenarios() {
    assert_eq!((big("-123406489791") * big("-10")).to_string(), "1234064897910");
    assert_eq!(
        (big("12340000000000000") - big("10000000000000000")).to_string(),
        "2340000000000000"
    );

    let (q, r) = BigInt::from_int(7).div_rem(&BigInt::from_int(2)).unwrap();
    assert_eq!((q.to_string(), r.to_string()), ("3".to_owned(), "1".to_owned()));

    let (q, r) = BigInt::from_int(0).div_rem(&BigInt::from_int(5)).unwrap();
    assert_eq!((q.to_string(), r.to_string()), ("0".to_owned(), "0".to_owned()));

    assert_eq!(big("5").div_rem(&BigInt::from_int(0)), Err(BigIntError::DivisionByZero));

    for bad in ["", "-"] {
        assert!(matches!(
            BigInt::from_decimal_str(bad),
            Err(BigIntError::InvalidFormat { .. })
        ));
    }
}

#[test]
#[should_panic(expected = "division by zero")]
fn division_operator_panics_on_zero() {
    let _ = big("5") / BigInt::default();
}
