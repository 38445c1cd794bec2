// Chapter 08: randomized property checks.
// Instead of picking examples, state the algebraic law and let the runner
// generate hundreds of inputs and shrink any failure to a minimal case.
// Generators are bounded where the law would otherwise trip debug-mode
// overflow checks on pathological operands.

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

/// Returns the absolute value of an integer.
pub fn abs_val(x: i64) -> i64 {
    if x < 0 {
        -x
    } else {
        x
    }
}

/// Returns a reversed copy of the slice.
pub fn reverse(values: &[i64]) -> Vec<i64> {
    values.iter().rev().copied().collect()
}
