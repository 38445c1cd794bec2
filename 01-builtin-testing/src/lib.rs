// Chapter 01: the built-in test harness.
// Everything here runs with a bare `cargo test` - no third-party assertion
// or runner crates, just #[test], assert macros, and module organization.

/// Returns the sum of two integers.
pub fn sum(a: i64, b: i64) -> i64 {
    a + b
}

/// Returns the product of two integers.
pub fn multiply(a: i64, b: i64) -> i64 {
    a * b
}

/// Returns the quotient of two integers.
///
/// This chapter's calculator returns 0 for a zero divisor instead of
/// surfacing an error; later chapters use a typed error for the same case.
pub fn divide(a: i64, b: i64) -> i64 {
    if b == 0 {
        return 0;
    }
    a / b
}

// ============================================================================
// Example: Basic Tests and Assertion Macros
// ============================================================================

#[cfg(test)]
mod basic_tests {
    use super::*;

    #[test]
    fn test_sum() {
        let result = sum(2, 3);
        assert_eq!(result, 5, "sum(2, 3) = {result}; want 5");
    }

    #[test]
    fn assertion_macros() {
        assert_eq!(sum(2, 3), 5);
        assert_ne!(sum(2, 3), 6);
        assert!(sum(2, 3) > 0, "sum of positives should be positive");
    }
}

// ============================================================================
// Example: Table-Driven Tests
// ============================================================================


// ============================================================================
// Example: Organizing Tests with Nested Modules
// ============================================================================


// ============================================================================
// Example: Parallel Cases
// ============================================================================


// ============================================================================
// Example: Ignoring and Filtering Tests
// ============================================================================

#[cfg(test)]
mod ignore_tests {
    use super::*;

    // Run with: cargo test -- --ignored
    #[test]
    #[ignore = "slow; exercises a large input range"]
    fn expensive_exhaustive_sum() {
        for a in -1000..1000 {
            for b in -1000..1000 {
                assert_eq!(sum(a, b), a + b);
            }
        }
    }
}
