//! The Level Interface
//!
//! Every rung of the doubling ladder exposes the same contract: in-place
//! carry-reporting add and subtract, single-bit shifts that thread a carry,
//! a widening multiply, and restoring division. [`U128`](crate::U128)
//! implements it directly on word primitives; [`Wide`](crate::Wide)
//! implements it for twice the width of any other implementor. Division and
//! multi-bit shifts are provided here because their algorithm is the same
//! at every width.

use crate::error::ArithmeticError;

/// A fixed-width unsigned integer participating in the doubling ladder.
///
/// All mutating operations are in place on `self` and report the carry or
/// borrow that must propagate to the next more-significant limb. Values are
/// totally ordered by magnitude and `Default` is zero.
pub trait Level: Clone + Eq + Ord + Default {
    /// Total width in bits. A type-level constant; values carry no size.
    const BITS: usize;

    /// The value `v`, zero-extended to the full width.
    fn from_u64(v: u64) -> Self;

    /// The zero value.
    fn zero() -> Self {
        Self::from_u64(0)
    }

    /// True iff every bit is clear.
    fn is_zero(&self) -> bool;

    /// The least-significant 8 bits.
    fn low_byte(&self) -> u8;

    /// In-place `self <- (self + rhs + carry) mod 2^BITS`; returns the
    /// carry out (true iff the real sum is `>= 2^BITS`).
    fn carrying_add(&mut self, rhs: &Self, carry: bool) -> bool;

    /// In-place `self <- (self - rhs - borrow) mod 2^BITS`; returns the
    /// borrow out (true iff the real difference is negative).
    fn borrowing_sub(&mut self, rhs: &Self, borrow: bool) -> bool;

    /// Shift left one bit; `carry` becomes the new bit 0 and the old top
    /// bit is returned.
    fn shl1(&mut self, carry: bool) -> bool;

    /// Shift right one bit; `carry` becomes the new top bit and the old
    /// bit 0 is returned.
    fn shr1(&mut self, carry: bool) -> bool;

    /// Schoolbook widening multiply: `self` is replaced by the low half of
    /// the full product `self * rhs` and the high half is returned.
    fn widening_mul(&mut self, rhs: &Self) -> Self;

    /// Limb-wise AND.
    fn and_assign(&mut self, rhs: &Self);

    /// Limb-wise OR.
    fn or_assign(&mut self, rhs: &Self);

    /// Limb-wise XOR.
    fn xor_assign(&mut self, rhs: &Self);

    /// AND into the least-significant 64-bit word; higher limbs are left
    /// untouched.
    fn and_word(&mut self, rhs: u64);

    /// OR into the least-significant 64-bit word.
    fn or_word(&mut self, rhs: u64);

    /// XOR into the least-significant 64-bit word.
    fn xor_word(&mut self, rhs: u64);

    /// Restoring shift-and-subtract division.
    ///
    /// Replaces `self` with the quotient `self / rhs` and returns the
    /// remainder. Runs exactly `BITS` iterations, each shifting the
    /// dividend's top bit into a remainder register and subtracting the
    /// divisor when it fits. Fails with
    /// [`ArithmeticError::DivideByZero`] before any mutation when `rhs`
    /// is zero.
    fn div_rem(&mut self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivideByZero);
        }
        let mut quotient = self.clone();
        let mut remainder = Self::zero();
        for _ in 0..Self::BITS {
            let high_bit = quotient.shl1(false);
            remainder.shl1(high_bit);
            if remainder >= *rhs {
                let borrow = remainder.borrowing_sub(rhs, false);
                debug_assert!(!borrow);
                quotient.or_word(1);
            }
        }
        *self = quotient;
        Ok(remainder)
    }

    /// Shift left by `count` bits, one bit at a time.
    fn shl_assign_bits(&mut self, count: u32) {
        for _ in 0..count {
            self.shl1(false);
        }
    }

    /// Shift right by `count` bits, one bit at a time.
    fn shr_assign_bits(&mut self, count: u32) {
        for _ in 0..count {
            self.shr1(false);
        }
    }
}
