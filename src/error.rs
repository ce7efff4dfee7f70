//! Error Types for Arithmetic Operations
//!
//! Every fallible operation validates its preconditions before touching its
//! destination, so a returned error means the destination is unchanged.

/// Errors raised by arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Division or modulo with a zero divisor
    DivideByZero,
    /// Signed addition called with a non-zero external carry
    IllegalCarry,
    /// Word-level `hi:lo / d` whose quotient does not fit in one word
    WordDivideOverflow,
}

impl std::fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArithmeticError::DivideByZero => write!(f, "division by zero"),
            ArithmeticError::IllegalCarry => {
                write!(f, "non-zero carry passed to a signed operation")
            }
            ArithmeticError::WordDivideOverflow => {
                write!(f, "wide word division quotient does not fit in a word")
            }
        }
    }
}

impl std::error::Error for ArithmeticError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(ArithmeticError::DivideByZero.to_string(), "division by zero");
        assert_eq!(
            ArithmeticError::IllegalCarry.to_string(),
            "non-zero carry passed to a signed operation"
        );
        assert_eq!(
            ArithmeticError::WordDivideOverflow.to_string(),
            "wide word division quotient does not fit in a word"
        );
    }
}
