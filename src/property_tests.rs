//! Crate-Level Property Tests
//!
//! Exercises the contracts that hold at every width and for every value:
//! string round-trips, arithmetic identities, the division invariant,
//! shift-multiply equivalence, carry coherence, agreement between a level
//! and its doubled level, and the no-negative-zero rule. Randomized cases
//! are checked differentially against native `u128` arithmetic.

use crate::base::U128;
use crate::error::ArithmeticError;
use crate::ladder::{U1024, U256};
use crate::level::Level;
use crate::signed::Signed;
use crate::text::{Radix, Text};

/// Schoolbook 128x128 -> 256 reference product, (low, high).
fn reference_widening_mul(a: u128, b: u128) -> (u128, u128) {
    const MASK: u128 = (1 << 64) - 1;
    let (a0, a1) = (a & MASK, a >> 64);
    let (b0, b1) = (b & MASK, b >> 64);
    let p00 = a0 * b0;
    let p01 = a0 * b1;
    let p10 = a1 * b0;
    let p11 = a1 * b1;
    let mid = (p00 >> 64) + (p01 & MASK) + (p10 & MASK);
    let low = (p00 & MASK) | (mid << 64);
    let high = p11 + (mid >> 64) + (p01 >> 64) + (p10 >> 64);
    (low, high)
}

fn lift(v: u128) -> U256 {
    U256::from(U128::from_u128(v))
}

const INTERESTING: [u128; 9] = [
    0,
    1,
    10,
    0xFF,
    u64::MAX as u128,
    1 << 64,
    (1 << 64) + 1,
    1 << 127,
    u128::MAX,
];

mod roundtrip {
    use super::*;

    #[test]
    fn test_u128_all_bases() {
        for v in INTERESTING {
            let value = U128::from_u128(v);
            for radix in [Radix::Binary, Radix::Decimal, Radix::LowerHex, Radix::UpperHex] {
                let rendered = value.to_text(radix);
                assert_eq!(
                    U128::from_text_radix(&rendered, radix),
                    value,
                    "value {:#x} radix {:?}",
                    v,
                    radix
                );
            }
        }
    }

    #[test]
    fn test_u256_all_bases() {
        for v in INTERESTING {
            // spread bits into both halves
            let value = lift(v) * lift(v) + lift(v);
            for radix in [Radix::Binary, Radix::Decimal, Radix::LowerHex, Radix::UpperHex] {
                let rendered = value.to_text(radix);
                assert_eq!(U256::from_text_radix(&rendered, radix), value.clone());
            }
        }
    }

    #[test]
    fn test_prefix_sniffing_roundtrip() {
        let value = U128::from_u128(0xDEAD_BEEF_0123_4567_89AB_CDEFu128);
        let hex = format!("0x{}", value.to_text(Radix::LowerHex));
        assert_eq!(U128::from_text(&hex), value);
        let bin = format!("0b{}", value.to_text(Radix::Binary));
        assert_eq!(U128::from_text(&bin), value);
        let dec = value.to_text(Radix::Decimal);
        assert_eq!(U128::from_text(&dec), value);
    }

    #[test]
    fn test_u1024_decimal_roundtrip() {
        let value = U1024::from_u64(0xC0FF_EE00_1234_5678) << 200;
        let rendered = value.to_text(Radix::Decimal);
        assert_eq!(U1024::from_text(&rendered), value);
    }

    #[test]
    fn test_signed_roundtrip() {
        for v in [-255i64, -1, 0, 1, 255, i64::MAX] {
            let value = Signed::<U256>::from_i64(v);
            for radix in [Radix::Binary, Radix::Decimal, Radix::LowerHex, Radix::UpperHex] {
                let rendered = value.to_text(radix);
                assert_eq!(Signed::<U256>::from_text_radix(&rendered, radix), value);
            }
        }
    }
}

mod identities {
    use super::*;

    #[test]
    fn test_additive_identity() {
        for v in INTERESTING {
            assert_eq!(U128::from_u128(v) + U128::zero(), U128::from_u128(v));
        }
    }

    #[test]
    fn test_multiplicative_identity_and_zero() {
        for v in INTERESTING {
            let value = U128::from_u128(v);
            assert_eq!(value * U128::from_u64(1), value);
            assert!((value * U128::zero()).is_zero());
        }
    }

    #[test]
    fn test_add_commutes() {
        for a in INTERESTING {
            for b in INTERESTING {
                assert_eq!(
                    U128::from_u128(a) + U128::from_u128(b),
                    U128::from_u128(b) + U128::from_u128(a)
                );
            }
        }
    }

    #[test]
    fn test_add_associates_modulo_width() {
        let samples = [3u128, u128::MAX - 7, 1 << 100, 0x1234_5678];
        for a in samples {
            for b in samples {
                for c in samples {
                    let left = (U128::from_u128(a) + U128::from_u128(b)) + U128::from_u128(c);
                    let right = U128::from_u128(a) + (U128::from_u128(b) + U128::from_u128(c));
                    assert_eq!(left, right);
                }
            }
        }
    }

    #[test]
    fn test_signed_additive_inverse() {
        for v in [-1000i64, -1, 0, 1, 31337] {
            let value = Signed::<U128>::from_i64(v);
            let sum = value.clone() + (-value);
            assert!(sum.is_zero());
            assert!(!sum.is_negative());
        }
    }

    #[test]
    fn test_signed_add_associates_exactly() {
        let samples = [-37i64, -1, 0, 5, 1000];
        for a in samples {
            for b in samples {
                for c in samples {
                    let s = Signed::<U128>::from_i64;
                    assert_eq!((s(a) + s(b)) + s(c), s(a) + (s(b) + s(c)));
                }
            }
        }
    }
}

mod division {
    use super::*;

    #[test]
    fn test_quotient_times_divisor_plus_remainder() {
        let dividends = [1u128, 100, u64::MAX as u128, 1 << 100, u128::MAX];
        let divisors = [1u128, 2, 7, 10, u64::MAX as u128, (1 << 90) + 3];
        for a in dividends {
            for b in divisors {
                let mut q = U128::from_u128(a);
                let r = q.div_rem(&U128::from_u128(b)).unwrap();
                assert!(r < U128::from_u128(b));
                assert_eq!(q * U128::from_u128(b) + r, U128::from_u128(a));
            }
        }
    }

    #[test]
    fn test_u256_division_identity() {
        let a = lift(u128::MAX) * lift(0x1234_5678_9ABC_DEF0) + lift(99);
        let b = lift((1 << 77) + 1);
        let mut q = a.clone();
        let r = q.div_rem(&b).unwrap();
        assert!(r < b);
        assert_eq!(q * b + r, a);
    }

    #[test]
    fn test_divide_by_zero_everywhere() {
        let mut a = U128::from_u64(5);
        assert_eq!(a.div_rem(&U128::zero()), Err(ArithmeticError::DivideByZero));
        let mut b = U256::from_u64(5);
        assert_eq!(b.div_rem(&U256::zero()), Err(ArithmeticError::DivideByZero));
        let mut c = Signed::<U256>::from_i64(-5);
        assert_eq!(
            c.div_rem(&Signed::zero()),
            Err(ArithmeticError::DivideByZero)
        );
    }
}

mod shifts {
    use super::*;

    #[test]
    fn test_shift_left_is_multiply_by_power_of_two() {
        for v in INTERESTING {
            for k in [0u32, 1, 5, 64, 127] {
                let shifted = U128::from_u128(v) << k;
                let mut power = U128::from_u64(1);
                power.shl_assign_bits(k);
                assert_eq!(shifted, U128::from_u128(v) * power, "v {:#x} k {}", v, k);
            }
        }
    }

    #[test]
    fn test_shift_right_is_divide_by_power_of_two() {
        for v in INTERESTING {
            for k in [0u32, 1, 5, 64, 127] {
                let shifted = U128::from_u128(v) >> k;
                let mut power = U128::from_u64(1);
                power.shl_assign_bits(k);
                assert_eq!(shifted, U128::from_u128(v) / power, "v {:#x} k {}", v, k);
            }
        }
    }
}

mod carries {
    use super::*;

    #[test]
    fn test_add_carry_iff_true_sum_overflows() {
        for a in INTERESTING {
            for b in INTERESTING {
                let mut sum = U128::from_u128(a);
                let carry = sum.carrying_add(&U128::from_u128(b), false);
                assert_eq!(carry, a.checked_add(b).is_none(), "{:#x} + {:#x}", a, b);
                assert_eq!(sum.as_u128(), a.wrapping_add(b));
            }
        }
    }

    #[test]
    fn test_sub_borrow_iff_negative() {
        for a in INTERESTING {
            for b in INTERESTING {
                let mut diff = U128::from_u128(a);
                let borrow = diff.borrowing_sub(&U128::from_u128(b), false);
                assert_eq!(borrow, a < b);
                assert_eq!(diff.as_u128(), a.wrapping_sub(b));
            }
        }
    }
}

mod ladder_agreement {
    use super::*;

    #[test]
    fn test_add_agrees_one_level_up() {
        for a in INTERESTING {
            for b in INTERESTING {
                let mut narrow = U128::from_u128(a);
                let carry = narrow.carrying_add(&U128::from_u128(b), false);

                let mut wide = lift(a);
                let wide_carry = wide.carrying_add(&lift(b), false);
                assert!(!wide_carry);
                assert_eq!(wide.lo, narrow);
                // the high half accounts for the overflow
                assert_eq!(wide.hi, U128::from_u64(carry as u64));
            }
        }
    }

    #[test]
    fn test_mul_agrees_one_level_up() {
        for a in INTERESTING {
            for b in INTERESTING {
                let mut narrow = U128::from_u128(a);
                let high = narrow.widening_mul(&U128::from_u128(b));

                let mut wide = lift(a);
                let wide_high = wide.widening_mul(&lift(b));
                assert!(wide_high.is_zero());
                assert_eq!(wide.lo, narrow, "{:#x} * {:#x}", a, b);
                assert_eq!(wide.hi, high, "{:#x} * {:#x}", a, b);
            }
        }
    }

    #[test]
    fn test_div_agrees_one_level_up() {
        for a in INTERESTING {
            for b in INTERESTING {
                if b == 0 {
                    continue;
                }
                let mut narrow = U128::from_u128(a);
                let narrow_rem = narrow.div_rem(&U128::from_u128(b)).unwrap();

                let mut wide = lift(a);
                let wide_rem = wide.div_rem(&lift(b)).unwrap();
                assert_eq!(wide.lo, narrow);
                assert!(wide.hi.is_zero());
                assert_eq!(wide_rem, U256::from(narrow_rem));
            }
        }
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn test_word_max_square_at_u128() {
        let mut a = U128::from_u64(u64::MAX);
        let high = a.widening_mul(&U128::from_u64(u64::MAX));
        assert!(high.is_zero());
        assert_eq!(a, U128::new(0xFFFF_FFFF_FFFF_FFFE, 0x0000_0000_0000_0001));
        assert_eq!(a.to_text(Radix::UpperHex), "FFFFFFFFFFFFFFFE0000000000000001");
    }

    #[test]
    fn test_shift_one_to_the_top_and_out() {
        let mut v = U128::from_u64(1);
        for _ in 0..127 {
            let carry = v.shl1(false);
            assert!(!carry);
        }
        assert_eq!(v, U128::new(1 << 63, 0));
        assert_eq!(v.to_text(Radix::UpperHex), "80000000000000000000000000000000");
        let carry = v.shl1(false);
        assert!(carry);
        assert!(v.is_zero());
    }

    #[test]
    fn test_u256_power_of_two_division() {
        let mut a = U256::from_u64(1) << 255;
        let rem = a.div_rem(&U256::from_u64(16)).unwrap();
        assert!(rem.is_zero());
        assert_eq!(a, U256::from_u64(1) << 251);
    }

    #[test]
    fn test_u256_decimal_and_hex_rendering() {
        let text = "309485009821345068724781056"; // 2^88
        let value = U256::from_text(text);
        assert_eq!(value, U256::from_u64(1) << 88);
        assert_eq!(value.to_text_format("%d"), text);
        assert_eq!(value.to_text_format("%X"), "10000000000000000000000");
    }

    #[test]
    fn test_signed_addition_cases() {
        let s = Signed::<U256>::from_i64;
        assert_eq!(s(11) + s(-10), s(1));
        let zero = s(10) + s(-10);
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert_eq!(s(-11) + s(-10), s(-21));
    }

    #[test]
    fn test_signed_multiply_and_divide_cases() {
        let s = Signed::<U256>::from_i64;
        assert_eq!(s(-10) * s(-10), s(100));

        let mut q = s(-10);
        let rem = q.div_rem(&s(3)).unwrap();
        assert_eq!(q, s(-3));
        assert_eq!(rem, s(-1));
        assert_eq!(q * s(3) + rem, s(-10));
    }
}

mod differential {
    use super::*;
    use rand::Rng;

    const ROUNDS: usize = 200;

    #[test]
    fn test_add_sub_mul_match_native() {
        let mut rng = rand::thread_rng();
        for _ in 0..ROUNDS {
            let a: u128 = rng.gen();
            let b: u128 = rng.gen();

            let mut sum = U128::from_u128(a);
            let carry = sum.carrying_add(&U128::from_u128(b), false);
            assert_eq!(sum.as_u128(), a.wrapping_add(b));
            assert_eq!(carry, a.checked_add(b).is_none());

            let mut diff = U128::from_u128(a);
            let borrow = diff.borrowing_sub(&U128::from_u128(b), false);
            assert_eq!(diff.as_u128(), a.wrapping_sub(b));
            assert_eq!(borrow, a < b);

            let product = U128::from_u128(a) * U128::from_u128(b);
            assert_eq!(product.as_u128(), a.wrapping_mul(b));
        }
    }

    #[test]
    fn test_widening_mul_matches_reference() {
        let mut rng = rand::thread_rng();
        for _ in 0..ROUNDS {
            let a: u128 = rng.gen();
            let b: u128 = rng.gen();
            let (low, high) = reference_widening_mul(a, b);

            let mut value = U128::from_u128(a);
            let high_half = value.widening_mul(&U128::from_u128(b));
            assert_eq!(value.as_u128(), low, "{:#x} * {:#x}", a, b);
            assert_eq!(high_half.as_u128(), high, "{:#x} * {:#x}", a, b);
        }
    }

    #[test]
    fn test_div_rem_matches_native() {
        let mut rng = rand::thread_rng();
        for _ in 0..ROUNDS {
            let a: u128 = rng.gen();
            let mut b: u128 = rng.gen::<u64>() as u128;
            if rng.gen() {
                b = rng.gen();
            }
            if b == 0 {
                b = 1;
            }
            let mut q = U128::from_u128(a);
            let r = q.div_rem(&U128::from_u128(b)).unwrap();
            assert_eq!(q.as_u128(), a / b);
            assert_eq!(r.as_u128(), a % b);
        }
    }

    #[test]
    fn test_shifts_match_native() {
        let mut rng = rand::thread_rng();
        for _ in 0..ROUNDS {
            let a: u128 = rng.gen();
            let k = rng.gen_range(0u32..128);
            assert_eq!((U128::from_u128(a) << k).as_u128(), a << k);
            assert_eq!((U128::from_u128(a) >> k).as_u128(), a >> k);
        }
    }

    #[test]
    fn test_ordering_matches_native() {
        let mut rng = rand::thread_rng();
        for _ in 0..ROUNDS {
            let a: u128 = rng.gen();
            let b: u128 = rng.gen();
            assert_eq!(U128::from_u128(a).cmp(&U128::from_u128(b)), a.cmp(&b));
        }
    }

    #[test]
    fn test_decimal_roundtrip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let a: u128 = rng.gen();
            let value = U128::from_u128(a);
            assert_eq!(value.to_text(Radix::Decimal), a.to_string());
            assert_eq!(U128::from_text(&a.to_string()), value);
        }
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_serde_roundtrip() {
        let a = U128::from_u128(0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(serde_json::from_str::<U128>(&json).unwrap(), a);

        let b = lift(u128::MAX) * lift(3);
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(serde_json::from_str::<U256>(&json).unwrap(), b);

        let c = Signed::<U256>::from_i64(-123_456_789);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(serde_json::from_str::<Signed<U256>>(&json).unwrap(), c);
    }
}
