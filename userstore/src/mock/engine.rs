use thiserror::Error;

use crate::mock::expectation::{CallArg, CallCount, CallResult, Expectation, Method};
use crate::user::RepoError;

/// Expectation violation. Unexpected and out-of-order calls surface at call
/// time; unmet counts surface at verification time. All are test failures,
/// never silent no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MockError {
    #[error("unexpected call: {method}({arg})")]
    UnexpectedCall { method: Method, arg: CallArg },
    #[error("out-of-order call: {method}({arg}) before earlier-ordered expectations matched")]
    OutOfOrder { method: Method, arg: CallArg },
    #[error("unmet expectation: {method} expected {expected}, observed {observed} call(s)")]
    UnmetCount {
        method: Method,
        expected: CallCount,
        observed: usize,
    },
}

/// Matches intercepted calls against pre-registered expectations and checks
/// at the end of a test that every count constraint was satisfied.
///
/// Registration happens before the exercised code runs (`expect` takes
/// `&mut self`); invocation and verification borrow shared. Single-threaded,
/// one test's lifetime.
#[derive(Default)]
pub struct MockEngine {
    expectations: Vec<Expectation>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new expectation for `method` and returns it for fluent
    /// configuration.
    pub fn expect(&mut self, method: Method) -> &mut Expectation {
        self.expectations.push(Expectation::new(method));
        self.expectations.last_mut().unwrap()
    }

    /// Resolves one intercepted call: scans expectations for `method` in
    /// registration order and consumes the first whose matcher accepts `arg`,
    /// whose count is not exhausted, and whose order constraint currently
    /// holds. Resolved exactly once, synchronously.
    pub fn invoke(
        &self,
        method: Method,
        arg: CallArg,
    ) -> Result<Result<CallResult, RepoError>, MockError> {
        let mut blocked_by_order = false;
        for expectation in &self.expectations {
            if expectation.method() != method
                || !expectation.accepts(&arg)
                || expectation.is_exhausted()
            {
                continue;
            }
            if !self.order_satisfied(expectation) {
                blocked_by_order = true;
                continue;
            }
            return Ok(expectation.consume(&arg));
        }

        if blocked_by_order {
            Err(MockError::OutOfOrder { method, arg })
        } else {
            Err(MockError::UnexpectedCall { method, arg })
        }
    }

    fn order_satisfied(&self, candidate: &Expectation) -> bool {
        let Some(rank) = candidate.order() else {
            return true;
        };
        self.expectations.iter().all(|other| match other.order() {
            Some(earlier) if earlier < rank => other.observed() >= 1,
            _ => true,
        })
    }

    /// End-of-test check: one violation per expectation whose count
    /// constraint was not satisfied exactly as specified.
    pub fn verify(&self) -> Result<(), Vec<MockError>> {
        let violations: Vec<MockError> = self
            .expectations
            .iter()
            .filter(|expectation| !expectation.is_satisfied())
            .map(|expectation| MockError::UnmetCount {
                method: expectation.method(),
                expected: expectation.count(),
                observed: expectation.observed(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
