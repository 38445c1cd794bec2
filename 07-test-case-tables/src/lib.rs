// Chapter 07: spec-style data tables.
// Every case is one attribute line with a prose name; the function body is
// the single step under test. Failures report the case name, so the table
// reads like a spec document.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("cannot divide by zero")]
    DivisionByZero,
    #[error("unknown operation: {0}")]
    UnknownOperation(char),
}

/// Returns the sum of two integers.
pub fn sum(a: i64, b: i64) -> i64 {
    a + b
}

/// Returns the difference of two integers.
pub fn subtract(a: i64, b: i64) -> i64 {
    a - b
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

/// Dispatches one calculation row: `operation` is one of `+ - * /`.
pub fn calculate(operation: char, a: i64, b: i64) -> Result<i64, CalcError> {
    match operation {
        '+' => Ok(sum(a, b)),
        '-' => Ok(subtract(a, b)),
        '*' => Ok(multiply(a, b)),
        '/' => divide(a, b),
        other => Err(CalcError::UnknownOperation(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(2, 3 => 5 ; "adds positive numbers")]
    #[test_case(-1, -2 => -3 ; "adds negative numbers")]
    #[test_case(0, 5 => 5 ; "adds with zero")]
    #[test_case(1000, 2000 => 3000 ; "adds large numbers")]
    fn sum_table(a: i64, b: i64) -> i64 {
        sum(a, b)
    }

    #[test_case(5, 3 => 2 ; "subtracts to a positive difference")]
    #[test_case(3, 5 => -2 ; "subtracts to a negative difference")]
    #[test_case(5, -3 => 8 ; "subtracts a negative")]
    fn subtract_table(a: i64, b: i64) -> i64 {
        subtract(a, b)
    }

    #[test_case(3, 4 => 12 ; "multiplies positive numbers")]
    #[test_case(5, 0 => 0 ; "multiplies by zero")]
    #[test_case(-3, 4 => -12 ; "multiplies with one negative operand")]
    fn multiply_table(a: i64, b: i64) -> i64 {
        multiply(a, b)
    }

    #[test_case(6, 2 => matches Ok(3) ; "divides evenly")]
    #[test_case(7, 2 => matches Ok(3) ; "truncates integer division")]
    #[test_case(-6, 2 => matches Ok(-3) ; "divides a negative dividend")]
    #[test_case(5, 0 => matches Err(CalcError::DivisionByZero) ; "rejects a zero divisor")]
    fn divide_table(a: i64, b: i64) -> Result<i64, CalcError> {
        divide(a, b)
    }

    // The calculation grid: operation, operands, expected result in one row.
    #[test_case('+', 2, 3 => matches Ok(5) ; "grid addition")]
    #[test_case('-', 9, 4 => matches Ok(5) ; "grid subtraction")]
    #[test_case('*', 3, 4 => matches Ok(12) ; "grid multiplication")]
    #[test_case('/', 12, 4 => matches Ok(3) ; "grid division")]
    #[test_case('/', 1, 0 => matches Err(CalcError::DivisionByZero) ; "grid division by zero")]
    #[test_case('%', 1, 1 => matches Err(CalcError::UnknownOperation('%')) ; "grid unknown operation")]
    fn calculation_grid(operation: char, a: i64, b: i64) -> Result<i64, CalcError> {
        calculate(operation, a, b)
    }
}
