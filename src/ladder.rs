//! The Doubling Ladder
//!
//! Concrete widths from 256 bits up to 8,388,608 bits (one mebibyte of
//! storage per value). Each alias is the doubler applied to its
//! predecessor; there is no logic here, only names. Every width is a fully
//! independent monomorphic type, so the compiler sees each call site's
//! level statically.
//!
//! Operations on the widest types are honest about their cost: a division
//! at the top runs one shift-and-subtract iteration per bit, and a value
//! there occupies a full mebibyte. By-value temporaries of the largest
//! types can exceed a default thread stack; raising the stack limit is the
//! caller's concern.

use crate::base::U128;
use crate::double::Wide;

/// Unsigned 256-bit integer
pub type U256 = Wide<U128>;
/// Unsigned 512-bit integer
pub type U512 = Wide<U256>;
/// Unsigned 1024-bit integer
pub type U1024 = Wide<U512>;
/// Unsigned 2048-bit integer
pub type U2048 = Wide<U1024>;
/// Unsigned 4096-bit integer
pub type U4096 = Wide<U2048>;
/// Unsigned 8192-bit integer
pub type U8192 = Wide<U4096>;
/// Unsigned 16384-bit integer
pub type U16384 = Wide<U8192>;
/// Unsigned 32768-bit integer
pub type U32768 = Wide<U16384>;
/// Unsigned 65536-bit integer
pub type U65536 = Wide<U32768>;
/// Unsigned 131072-bit integer
pub type U131072 = Wide<U65536>;
/// Unsigned 262144-bit integer (32 KiB)
pub type U262144 = Wide<U131072>;
/// Unsigned 524288-bit integer (64 KiB)
pub type U524288 = Wide<U262144>;
/// Unsigned 1048576-bit integer (128 KiB)
pub type U1048576 = Wide<U524288>;
/// Unsigned 2097152-bit integer (256 KiB)
pub type U2097152 = Wide<U1048576>;
/// Unsigned 4194304-bit integer (512 KiB)
pub type U4194304 = Wide<U2097152>;
/// Unsigned 8388608-bit integer (1 MiB)
pub type U8388608 = Wide<U4194304>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn test_widths_double_all_the_way_up() {
        assert_eq!(U128::BITS, 128);
        assert_eq!(U256::BITS, 256);
        assert_eq!(U512::BITS, 512);
        assert_eq!(U1024::BITS, 1024);
        assert_eq!(U2048::BITS, 2048);
        assert_eq!(U4096::BITS, 4096);
        assert_eq!(U8192::BITS, 8192);
        assert_eq!(U16384::BITS, 16384);
        assert_eq!(U32768::BITS, 32768);
        assert_eq!(U65536::BITS, 65536);
        assert_eq!(U131072::BITS, 131072);
        assert_eq!(U262144::BITS, 262144);
        assert_eq!(U524288::BITS, 524288);
        assert_eq!(U1048576::BITS, 1048576);
        assert_eq!(U2097152::BITS, 2097152);
        assert_eq!(U4194304::BITS, 4194304);
        assert_eq!(U8388608::BITS, 8388608);
    }

    #[test]
    fn test_storage_matches_width() {
        assert_eq!(std::mem::size_of::<U128>() * 8, 128);
        assert_eq!(std::mem::size_of::<U1024>() * 8, 1024);
        assert_eq!(std::mem::size_of::<U65536>() * 8, 65536);
    }

    #[test]
    fn test_mid_ladder_arithmetic_smoke() {
        // one add and one shift at a width where values are kilobytes
        let mut a = U8192::from_u64(u64::MAX);
        let carry = a.carrying_add(&U8192::from_u64(1), false);
        assert!(!carry);
        let mut expected = U8192::from_u64(1);
        expected.shl_assign_bits(64);
        assert_eq!(a, expected);
    }
}
