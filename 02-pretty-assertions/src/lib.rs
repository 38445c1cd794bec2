// Chapter 02: assertion-library style.
// pretty_assertions swaps assert_eq!/assert_ne! for versions that print a
// colored diff of the two values, which is where struct and collection
// comparisons stop being a wall of Debug output. The second half exercises
// the recording mock from the userstore crate in the loose, record-and-verify
// style of classic assertion-library mocks.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Returns the sum of two integers.
pub fn sum(a: i64, b: i64) -> i64 {
    a + b
}

/// Returns the product of two integers.
pub fn multiply(a: i64, b: i64) -> i64 {
    a * b
}

/// Returns the quotient, or an error for a zero divisor.
pub fn divide(a: i64, b: i64) -> Result<i64, CalcError> {
    if b == 0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

// ============================================================================
// Example: Diffed Equality Assertions
// ============================================================================


// ============================================================================
// Example: Error Assertions
// ============================================================================


// ============================================================================
// Example: Recording Mock, Loose Style
// ============================================================================
