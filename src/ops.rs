//! Operator Sugar over the Level Interface
//!
//! `std::ops` impls for the unsigned ladder types: value-returning
//! `+ - * / %`, their assign forms, bitwise ops with a same-width value and
//! with a small integer, and multi-bit shifts. The multiply operators keep
//! the low half of the product, like the in-place multiply they wrap; the
//! division operators panic on a zero divisor the way the primitive integer
//! operators do, with `div_rem` as the checked form.
//!
//! One macro generates the family for `U128` and for `Wide<L>`, the same
//! impls at every width.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use crate::base::U128;
use crate::double::Wide;
use crate::level::Level;

macro_rules! impl_unsigned_ops {
    ($ty:ty $(, $lp:ident)?) => {
        impl $(<$lp: Level>)? Add for $ty {
            type Output = Self;

            fn add(mut self, rhs: Self) -> Self {
                self.carrying_add(&rhs, false);
                self
            }
        }

        impl $(<$lp: Level>)? AddAssign for $ty {
            fn add_assign(&mut self, rhs: Self) {
                self.carrying_add(&rhs, false);
            }
        }

        impl $(<$lp: Level>)? AddAssign<&$ty> for $ty {
            fn add_assign(&mut self, rhs: &$ty) {
                self.carrying_add(rhs, false);
            }
        }

        impl $(<$lp: Level>)? Sub for $ty {
            type Output = Self;

            fn sub(mut self, rhs: Self) -> Self {
                self.borrowing_sub(&rhs, false);
                self
            }
        }

        impl $(<$lp: Level>)? SubAssign for $ty {
            fn sub_assign(&mut self, rhs: Self) {
                self.borrowing_sub(&rhs, false);
            }
        }

        impl $(<$lp: Level>)? SubAssign<&$ty> for $ty {
            fn sub_assign(&mut self, rhs: &$ty) {
                self.borrowing_sub(rhs, false);
            }
        }

        impl $(<$lp: Level>)? Mul for $ty {
            type Output = Self;

            fn mul(mut self, rhs: Self) -> Self {
                self.widening_mul(&rhs);
                self
            }
        }

        impl $(<$lp: Level>)? MulAssign for $ty {
            fn mul_assign(&mut self, rhs: Self) {
                self.widening_mul(&rhs);
            }
        }

        impl $(<$lp: Level>)? MulAssign<&$ty> for $ty {
            fn mul_assign(&mut self, rhs: &$ty) {
                self.widening_mul(rhs);
            }
        }

        impl $(<$lp: Level>)? Div for $ty {
            type Output = Self;

            fn div(mut self, rhs: Self) -> Self {
                match self.div_rem(&rhs) {
                    Ok(_) => self,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl $(<$lp: Level>)? DivAssign for $ty {
            fn div_assign(&mut self, rhs: Self) {
                if let Err(e) = self.div_rem(&rhs) {
                    panic!("{}", e);
                }
            }
        }

        impl $(<$lp: Level>)? Rem for $ty {
            type Output = Self;

            fn rem(mut self, rhs: Self) -> Self {
                match self.div_rem(&rhs) {
                    Ok(remainder) => remainder,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl $(<$lp: Level>)? RemAssign for $ty {
            fn rem_assign(&mut self, rhs: Self) {
                match self.div_rem(&rhs) {
                    Ok(remainder) => *self = remainder,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl $(<$lp: Level>)? Shl<u32> for $ty {
            type Output = Self;

            fn shl(mut self, count: u32) -> Self {
                self.shl_assign_bits(count);
                self
            }
        }

        impl $(<$lp: Level>)? ShlAssign<u32> for $ty {
            fn shl_assign(&mut self, count: u32) {
                self.shl_assign_bits(count);
            }
        }

        impl $(<$lp: Level>)? Shr<u32> for $ty {
            type Output = Self;

            fn shr(mut self, count: u32) -> Self {
                self.shr_assign_bits(count);
                self
            }
        }

        impl $(<$lp: Level>)? ShrAssign<u32> for $ty {
            fn shr_assign(&mut self, count: u32) {
                self.shr_assign_bits(count);
            }
        }

        impl $(<$lp: Level>)? BitAnd for $ty {
            type Output = Self;

            fn bitand(mut self, rhs: Self) -> Self {
                self.and_assign(&rhs);
                self
            }
        }

        impl $(<$lp: Level>)? BitAndAssign for $ty {
            fn bitand_assign(&mut self, rhs: Self) {
                self.and_assign(&rhs);
            }
        }

        impl $(<$lp: Level>)? BitOr for $ty {
            type Output = Self;

            fn bitor(mut self, rhs: Self) -> Self {
                self.or_assign(&rhs);
                self
            }
        }

        impl $(<$lp: Level>)? BitOrAssign for $ty {
            fn bitor_assign(&mut self, rhs: Self) {
                self.or_assign(&rhs);
            }
        }

        impl $(<$lp: Level>)? BitXor for $ty {
            type Output = Self;

            fn bitxor(mut self, rhs: Self) -> Self {
                self.xor_assign(&rhs);
                self
            }
        }

        impl $(<$lp: Level>)? BitXorAssign for $ty {
            fn bitxor_assign(&mut self, rhs: Self) {
                self.xor_assign(&rhs);
            }
        }

        impl $(<$lp: Level>)? BitAnd<u64> for $ty {
            type Output = Self;

            fn bitand(mut self, rhs: u64) -> Self {
                self.and_word(rhs);
                self
            }
        }

        impl $(<$lp: Level>)? BitAndAssign<u64> for $ty {
            fn bitand_assign(&mut self, rhs: u64) {
                self.and_word(rhs);
            }
        }

        impl $(<$lp: Level>)? BitOr<u64> for $ty {
            type Output = Self;

            fn bitor(mut self, rhs: u64) -> Self {
                self.or_word(rhs);
                self
            }
        }

        impl $(<$lp: Level>)? BitOrAssign<u64> for $ty {
            fn bitor_assign(&mut self, rhs: u64) {
                self.or_word(rhs);
            }
        }

        impl $(<$lp: Level>)? BitXor<u64> for $ty {
            type Output = Self;

            fn bitxor(mut self, rhs: u64) -> Self {
                self.xor_word(rhs);
                self
            }
        }

        impl $(<$lp: Level>)? BitXorAssign<u64> for $ty {
            fn bitxor_assign(&mut self, rhs: u64) {
                self.xor_word(rhs);
            }
        }
    };
}

impl_unsigned_ops!(U128);
impl_unsigned_ops!(Wide<L>, L);
