//! Chapter 05: strict mock expectations.
//!
//! Two renditions of the same discipline. `tests/strict_expectations.rs`
//! drives the expectation engine from the `userstore` crate: every permitted
//! call is declared up front with a matcher, a reply, a call count, and
//! optionally a position in a required order; anything undeclared fails at
//! the call site, and anything unsatisfied fails at verification.
//! `tests/generated_mocks.rs` does the same with a `mockall`-generated mock
//! of the identical trait, for comparison with the hand-built engine.
