// Chapter 04: scoped setup with rstest.
// A #[fixture] is evaluated freshly for every test that names it, which is
// the Reset-between-leaves guarantee nested-scope frameworks provide: no test
// observes another test's mutations.

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

/// A running tally, used to show that fixtures hand every test its own
/// instance.
#[derive(Debug, Default)]
pub struct Tally {
    total: i64,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, value: i64) {
        self.total = sum(self.total, value);
    }

    pub fn total(&self) -> i64 {
        self.total
    }
}
