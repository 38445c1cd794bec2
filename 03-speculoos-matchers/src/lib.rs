// Chapter 03: narrative specs with fluent matchers.
// Nested modules play the role of Describe/Context blocks; speculoos supplies
// the matcher chains. Each leaf test reads as one sentence about behavior.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("cannot divide by zero")]
    DivisionByZero,
}

/// Basic arithmetic, as a value so specs can share a fresh instance.
#[derive(Debug, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Calculator
    }

    pub fn add(&self, a: i64, b: i64) -> i64 {
        a + b
    }

    pub fn subtract(&self, a: i64, b: i64) -> i64 {
        a - b
    }

    pub fn multiply(&self, a: i64, b: i64) -> i64 {
        a * b
    }

    pub fn divide(&self, a: i64, b: i64) -> Result<i64, CalcError> {
        if b == 0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(a / b)
    }

    pub fn is_positive(&self, n: i64) -> bool {
        n > 0
    }

    pub fn sum_all(&self, numbers: &[i64]) -> i64 {
        numbers.iter().sum()
    }
}
