//! doubleint: Fixed-Width Big Integers by Recursive Doubling
//!
//! This library builds arbitrary-precision fixed-width unsigned and signed
//! integers by gluing pairs of smaller integers together: starting from a
//! 128-bit base of two machine words, each rung of the ladder is an integer
//! with twice as many bits as the rung below, all the way up to a one
//! mebibyte value.
//!
//! ## Architecture
//!
//! 1. **Word primitives**: carry-propagating add, borrow-propagating
//!    subtract, widening multiply and rotate-through-carry on `u64`
//! 2. **[`Level`]**: the carry-reporting interface every width implements
//! 3. **[`U128`]**: the base rung, written directly on the word primitives
//! 4. **[`Wide`]**: the doubler, which implements [`Level`] for twice the
//!    width of any other implementor
//! 5. **[`Signed`]**: a sign-magnitude wrapper over any unsigned level
//!
//! Every operation decomposes level by level down to the word primitives.
//! The recursion is entirely compile-time: each width is its own monomorphic
//! type and no call site pays for dynamic dispatch.
//!
//! ## Usage
//!
//! ```
//! use doubleint::{Level, Radix, Signed, Text, U256};
//!
//! let a = U256::from_text("0x10");
//! let product = a * U256::from_u64(6);
//! assert_eq!(product.to_text(Radix::Decimal), "96");
//!
//! let debt = Signed::<U256>::from_i64(-10);
//! assert_eq!((debt + Signed::from_i64(3)).to_text(Radix::Decimal), "-7");
//! ```
//!
//! Multiplication is schoolbook and division is restoring
//! shift-and-subtract, so costs grow quadratically with width; the widest
//! types trade speed for simplicity. Values at the top of the ladder
//! occupy a mebibyte each, and by-value temporaries at those widths can
//! exceed a default thread stack.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod base;
pub mod double;
pub mod error;
pub mod ladder;
pub mod level;
mod ops;
pub mod signed;
pub mod text;
pub mod word;

#[cfg(test)]
mod property_tests;

pub use base::U128;
pub use double::Wide;
pub use error::ArithmeticError;
pub use ladder::{
    U1024, U1048576, U131072, U16384, U2048, U2097152, U256, U262144, U32768, U4096, U4194304,
    U512, U524288, U65536, U8192, U8388608,
};
pub use level::Level;
pub use signed::Signed;
pub use text::{Radix, Text};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
