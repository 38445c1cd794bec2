// Recording mock for the user repository.
//
// The engine intercepts calls to the `UserRepository` capability, matches
// each against pre-registered expectations, replies with the configured
// response, and verifies at the end of the test that every count-constrained
// expectation was satisfied. Matching is structural and first-wins in
// registration order; an exhausted expectation is skipped so a later
// catch-all can take over.

mod engine;
mod expectation;

pub use engine::{MockEngine, MockError};
pub use expectation::{
    any, eq_id, eq_record, satisfies, ArgMatcher, CallArg, CallCount, CallResult, Expectation,
    Method, Response,
};

use crate::repo::UserRepository;
use crate::user::{RepoError, User};

/// `UserRepository` implementation backed by a [`MockEngine`].
///
/// Register expectations with [`MockRepository::expect`], hand a reference to
/// the code under test, and let drop-time verification (or an explicit
/// [`MockRepository::checkpoint`]) report unmet expectations. Violations at
/// call time panic with the offending method and argument, which the test
/// harness reports as a failure at the call site.
#[derive(Default)]
pub struct MockRepository {
    engine: MockEngine,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect(&mut self, method: Method) -> &mut Expectation {
        self.engine.expect(method)
    }

    /// Non-panicking access for asserting on engine outcomes directly.
    pub fn engine(&self) -> &MockEngine {
        &self.engine
    }

    /// Verifies every expectation now, panicking with one line per unmet
    /// constraint.
    pub fn checkpoint(&self) {
        if let Err(violations) = self.engine.verify() {
            panic!("{}", render(&violations));
        }
    }

    fn call(&self, method: Method, arg: CallArg) -> Result<CallResult, RepoError> {
        match self.engine.invoke(method, arg) {
            Ok(outcome) => outcome,
            Err(violation) => panic!("{violation}"),
        }
    }
}

impl UserRepository for MockRepository {
    fn fetch(&self, id: i64) -> Result<User, RepoError> {
        match self.call(Method::Fetch, CallArg::Id(id))? {
            CallResult::Record(user) => Ok(user),
            other => panic!("fetch expectation replied with {other:?}"),
        }
    }

    fn save(&self, user: User) -> Result<User, RepoError> {
        let submitted = user.clone();
        match self.call(Method::Save, CallArg::Record(user))? {
            // A unit reply echoes the submitted record, so plain
            // `expect(Save)` needs no configured response.
            CallResult::Unit => Ok(submitted),
            CallResult::Record(stored) => Ok(stored),
            other => panic!("save expectation replied with {other:?}"),
        }
    }

    fn delete(&self, id: i64) -> Result<(), RepoError> {
        match self.call(Method::Delete, CallArg::Id(id))? {
            CallResult::Unit => Ok(()),
            other => panic!("delete expectation replied with {other:?}"),
        }
    }

    fn list_all(&self) -> Result<Vec<User>, RepoError> {
        match self.call(Method::ListAll, CallArg::None)? {
            CallResult::Records(users) => Ok(users),
            other => panic!("list_all expectation replied with {other:?}"),
        }
    }
}

impl Drop for MockRepository {
    fn drop(&mut self) {
        // Verifying while unwinding would turn one failure into an abort.
        if std::thread::panicking() {
            return;
        }
        if let Err(violations) = self.engine.verify() {
            panic!("{}", render(&violations));
        }
    }
}

fn render(violations: &[MockError]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
