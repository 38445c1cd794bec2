// Chapter 06: natural-language scenarios.
// The production code is the calculator below; the behavior lives in
// tests/features/calculator.feature and the step definitions in
// tests/cucumber.rs. Run with: cargo test -p gherkin-scenarios --test cucumber

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("cannot divide by zero")]
    DivisionByZero,
}

#[derive(Debug, Default, Clone)]
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
}
