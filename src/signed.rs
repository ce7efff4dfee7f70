//! Sign-Magnitude Wrapper
//!
//! [`Signed<U>`] adds a sign bit on top of any unsigned level without
//! changing the bit encoding of the magnitude, and redefines the four
//! arithmetic operations on the signed domain. There is no negative zero:
//! every operation that can produce a zero magnitude clears the sign.
//!
//! Shifts and bitwise operations act on the magnitude alone and leave the
//! sign in place; they scale and mask the magnitude rather than model a
//! two's complement encoding.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use serde::{Deserialize, Serialize};

use crate::error::ArithmeticError;
use crate::level::Level;
use crate::text::{self, Radix};

/// A signed value: an unsigned magnitude of level `U` plus a sign bit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signed<U> {
    magnitude: U,
    negative: bool,
}

impl<U: Level> Signed<U> {
    /// Construct from a magnitude and sign. A zero magnitude always comes
    /// out non-negative.
    pub fn new(magnitude: U, negative: bool) -> Self {
        let negative = negative && !magnitude.is_zero();
        Signed { magnitude, negative }
    }

    /// The zero value.
    pub fn zero() -> Self {
        Signed {
            magnitude: U::zero(),
            negative: false,
        }
    }

    /// Construct from a small signed integer.
    pub fn from_i64(v: i64) -> Self {
        Signed {
            magnitude: U::from_u64(v.unsigned_abs()),
            negative: v < 0,
        }
    }

    /// The magnitude, always non-negative.
    pub fn magnitude(&self) -> &U {
        &self.magnitude
    }

    /// True iff the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// True iff the value is zero.
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// The least-significant 8 bits of the magnitude.
    pub fn low_byte(&self) -> u8 {
        self.magnitude.low_byte()
    }

    /// Flip the sign. Zero stays non-negative.
    pub fn negate(&mut self) {
        if !self.magnitude.is_zero() {
            self.negative = !self.negative;
        }
    }

    fn normalize(&mut self) {
        if self.magnitude.is_zero() {
            self.negative = false;
        }
    }

    fn add_signed(&mut self, rhs: &Self) -> bool {
        if self.negative == rhs.negative {
            let overflow = self.magnitude.carrying_add(&rhs.magnitude, false);
            self.normalize();
            return overflow;
        }
        // opposite signs: the larger magnitude wins the sign
        match self.magnitude.cmp(&rhs.magnitude) {
            Ordering::Greater => {
                let borrow = self.magnitude.borrowing_sub(&rhs.magnitude, false);
                debug_assert!(!borrow);
                false
            }
            Ordering::Equal => {
                self.magnitude = U::zero();
                self.negative = false;
                false
            }
            Ordering::Less => {
                let mut larger = rhs.magnitude.clone();
                let borrow = larger.borrowing_sub(&self.magnitude, false);
                debug_assert!(!borrow);
                self.magnitude = larger;
                self.negative = rhs.negative;
                false
            }
        }
    }

    fn sub_signed(&mut self, rhs: &Self) -> bool {
        let mut negated = rhs.clone();
        negated.negate();
        self.add_signed(&negated)
    }

    /// Signed addition. The external carry must be `false`; signed
    /// addition does not accept one and fails with
    /// [`ArithmeticError::IllegalCarry`] (leaving `self` unchanged)
    /// otherwise. The returned bit reports magnitude overflow when both
    /// operands share a sign; opposite-sign addition cannot overflow.
    pub fn carrying_add(&mut self, rhs: &Self, carry: bool) -> Result<bool, ArithmeticError> {
        if carry {
            return Err(ArithmeticError::IllegalCarry);
        }
        Ok(self.add_signed(rhs))
    }

    /// Signed subtraction: negates a copy of `rhs` and adds, so
    /// `a - b == a + (-b)`. The external borrow must be `false`, as for
    /// [`carrying_add`](Signed::carrying_add).
    pub fn borrowing_sub(&mut self, rhs: &Self, borrow: bool) -> Result<bool, ArithmeticError> {
        if borrow {
            return Err(ArithmeticError::IllegalCarry);
        }
        Ok(self.sub_signed(rhs))
    }

    /// Signed multiply keeping the low half of the magnitude product. The
    /// sign is the XOR of the operand signs; a zero result is
    /// non-negative.
    pub fn wrapping_mul_assign(&mut self, rhs: &Self) {
        self.widening_mul_assign(rhs);
    }

    /// Signed multiply reporting the discarded high half of the magnitude
    /// product. A non-zero return means the in-place result wrapped.
    pub fn widening_mul_assign(&mut self, rhs: &Self) -> U {
        let high = self.magnitude.widening_mul(&rhs.magnitude);
        if self.magnitude.is_zero() {
            self.negative = false;
        } else {
            self.negative ^= rhs.negative;
        }
        high
    }

    /// Signed division, truncating toward zero.
    ///
    /// Replaces `self` with the quotient, whose sign is the XOR of the
    /// operand signs, and returns the remainder, which carries the
    /// dividend's sign; either is non-negative when its magnitude is
    /// zero, and `q * rhs + r == self` holds exactly. Fails with
    /// [`ArithmeticError::DivideByZero`] before any mutation when `rhs`
    /// is zero.
    pub fn div_rem(&mut self, rhs: &Self) -> Result<Self, ArithmeticError> {
        let dividend_negative = self.negative;
        let remainder_magnitude = self.magnitude.div_rem(&rhs.magnitude)?;
        self.negative = !self.magnitude.is_zero() && (self.negative ^ rhs.negative);
        Ok(Signed::new(remainder_magnitude, dividend_negative))
    }

    /// Shift the magnitude left; the sign is untouched unless the
    /// magnitude shifts to zero.
    pub fn shl_assign_bits(&mut self, count: u32) {
        self.magnitude.shl_assign_bits(count);
        self.normalize();
    }

    /// Shift the magnitude right; the sign is untouched unless the
    /// magnitude shifts to zero.
    pub fn shr_assign_bits(&mut self, count: u32) {
        self.magnitude.shr_assign_bits(count);
        self.normalize();
    }

    /// Limb-wise AND on the magnitude.
    pub fn and_assign(&mut self, rhs: &Self) {
        self.magnitude.and_assign(&rhs.magnitude);
        self.normalize();
    }

    /// Limb-wise OR on the magnitude.
    pub fn or_assign(&mut self, rhs: &Self) {
        self.magnitude.or_assign(&rhs.magnitude);
    }

    /// Limb-wise XOR on the magnitude.
    pub fn xor_assign(&mut self, rhs: &Self) {
        self.magnitude.xor_assign(&rhs.magnitude);
        self.normalize();
    }

    /// AND into the low word of the magnitude.
    pub fn and_word(&mut self, rhs: u64) {
        self.magnitude.and_word(rhs);
        self.normalize();
    }

    /// OR into the low word of the magnitude.
    pub fn or_word(&mut self, rhs: u64) {
        self.magnitude.or_word(rhs);
    }

    /// XOR into the low word of the magnitude.
    pub fn xor_word(&mut self, rhs: u64) {
        self.magnitude.xor_word(rhs);
        self.normalize();
    }

    /// Render the magnitude in the given base with a leading `-` when
    /// negative.
    pub fn to_text(&self, radix: Radix) -> String {
        let body = text::render(&self.magnitude, radix);
        if self.negative {
            format!("-{}", body)
        } else {
            body
        }
    }

    /// Render through a printf-style format selector; an unrecognized
    /// selector yields an empty string.
    pub fn to_text_format(&self, format: &str) -> String {
        match Radix::from_format(format) {
            Some(radix) => self.to_text(radix),
            None => String::new(),
        }
    }

    /// Parse with base sniffing, accepting an optional `-` ahead of the
    /// digits. Everything else that precedes the digits is skipped; an
    /// empty digit stream yields (non-negative) zero.
    pub fn from_text(input: &str) -> Self {
        let bytes = input.as_bytes();
        let mut negative = false;
        let mut magnitude = U::zero();
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            if b.is_ascii_digit() {
                magnitude = if b == b'0'
                    && matches!(bytes.get(i + 1), Some(&b'x') | Some(&b'X'))
                {
                    text::parse_digits(&bytes[i + 2..], Radix::LowerHex)
                } else if b == b'0' && matches!(bytes.get(i + 1), Some(&b'b') | Some(&b'B')) {
                    text::parse_digits(&bytes[i + 2..], Radix::Binary)
                } else {
                    text::parse_digits(&bytes[i..], Radix::Decimal)
                };
                break;
            }
            if b == b'-' {
                negative = true;
            }
            i += 1;
        }
        Signed::new(magnitude, negative)
    }

    /// Parse in a known base, accepting an optional leading `-`.
    pub fn from_text_radix(input: &str, radix: Radix) -> Self {
        let trimmed = input.trim_start();
        match trimmed.strip_prefix('-') {
            Some(rest) => Signed::new(text::parse_radix(rest, radix), true),
            None => Signed::new(text::parse_radix(trimmed, radix), false),
        }
    }
}

impl<U: Level> From<U> for Signed<U> {
    fn from(magnitude: U) -> Self {
        Signed {
            magnitude,
            negative: false,
        }
    }
}

impl<U: Level> Ord for Signed<U> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            // among negatives the larger magnitude is the smaller value
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl<U: Level> PartialOrd for Signed<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<U: Level> Neg for Signed<U> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.negate();
        self
    }
}

impl<U: Level> Add for Signed<U> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self.add_signed(&rhs);
        self
    }
}

impl<U: Level> AddAssign for Signed<U> {
    fn add_assign(&mut self, rhs: Self) {
        self.add_signed(&rhs);
    }
}

impl<U: Level> Sub for Signed<U> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self.sub_signed(&rhs);
        self
    }
}

impl<U: Level> SubAssign for Signed<U> {
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_signed(&rhs);
    }
}

impl<U: Level> Mul for Signed<U> {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self {
        self.wrapping_mul_assign(&rhs);
        self
    }
}

impl<U: Level> MulAssign for Signed<U> {
    fn mul_assign(&mut self, rhs: Self) {
        self.wrapping_mul_assign(&rhs);
    }
}

impl<U: Level> Div for Signed<U> {
    type Output = Self;

    fn div(mut self, rhs: Self) -> Self {
        match self.div_rem(&rhs) {
            Ok(_) => self,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<U: Level> DivAssign for Signed<U> {
    fn div_assign(&mut self, rhs: Self) {
        if let Err(e) = self.div_rem(&rhs) {
            panic!("{}", e);
        }
    }
}

impl<U: Level> Rem for Signed<U> {
    type Output = Self;

    fn rem(mut self, rhs: Self) -> Self {
        match self.div_rem(&rhs) {
            Ok(remainder) => remainder,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<U: Level> RemAssign for Signed<U> {
    fn rem_assign(&mut self, rhs: Self) {
        match self.div_rem(&rhs) {
            Ok(remainder) => *self = remainder,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<U: Level> Shl<u32> for Signed<U> {
    type Output = Self;

    fn shl(mut self, count: u32) -> Self {
        self.shl_assign_bits(count);
        self
    }
}

impl<U: Level> ShlAssign<u32> for Signed<U> {
    fn shl_assign(&mut self, count: u32) {
        self.shl_assign_bits(count);
    }
}

impl<U: Level> Shr<u32> for Signed<U> {
    type Output = Self;

    fn shr(mut self, count: u32) -> Self {
        self.shr_assign_bits(count);
        self
    }
}

impl<U: Level> ShrAssign<u32> for Signed<U> {
    fn shr_assign(&mut self, count: u32) {
        self.shr_assign_bits(count);
    }
}

impl<U: Level> BitAnd for Signed<U> {
    type Output = Self;

    fn bitand(mut self, rhs: Self) -> Self {
        self.and_assign(&rhs);
        self
    }
}

impl<U: Level> BitAndAssign for Signed<U> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.and_assign(&rhs);
    }
}

impl<U: Level> BitOr for Signed<U> {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self {
        self.or_assign(&rhs);
        self
    }
}

impl<U: Level> BitOrAssign for Signed<U> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.or_assign(&rhs);
    }
}

impl<U: Level> BitXor for Signed<U> {
    type Output = Self;

    fn bitxor(mut self, rhs: Self) -> Self {
        self.xor_assign(&rhs);
        self
    }
}

impl<U: Level> BitXorAssign for Signed<U> {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.xor_assign(&rhs);
    }
}

impl<U: Level> BitAnd<u64> for Signed<U> {
    type Output = Self;

    fn bitand(mut self, rhs: u64) -> Self {
        self.and_word(rhs);
        self
    }
}

impl<U: Level> BitOr<u64> for Signed<U> {
    type Output = Self;

    fn bitor(mut self, rhs: u64) -> Self {
        self.or_word(rhs);
        self
    }
}

impl<U: Level> BitXor<u64> for Signed<U> {
    type Output = Self;

    fn bitxor(mut self, rhs: u64) -> Self {
        self.xor_word(rhs);
        self
    }
}

impl<U: Level> BitAndAssign<u64> for Signed<U> {
    fn bitand_assign(&mut self, rhs: u64) {
        self.and_word(rhs);
    }
}

impl<U: Level> BitOrAssign<u64> for Signed<U> {
    fn bitor_assign(&mut self, rhs: u64) {
        self.or_word(rhs);
    }
}

impl<U: Level> BitXorAssign<u64> for Signed<U> {
    fn bitxor_assign(&mut self, rhs: u64) {
        self.xor_word(rhs);
    }
}

impl<U: Level> fmt::Display for Signed<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(Radix::Decimal))
    }
}

impl<U: Level> fmt::LowerHex for Signed<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(Radix::LowerHex))
    }
}

impl<U: Level> fmt::UpperHex for Signed<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(Radix::UpperHex))
    }
}

impl<U: Level> fmt::Binary for Signed<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(Radix::Binary))
    }
}
