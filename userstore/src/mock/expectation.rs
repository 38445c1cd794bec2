use std::cell::Cell;
use std::fmt;

use crate::user::{RepoError, User};

/// Repository method an expectation is registered against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Fetch,
    Save,
    Delete,
    ListAll,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Fetch => "fetch",
            Method::Save => "save",
            Method::Delete => "delete",
            Method::ListAll => "list_all",
        })
    }
}

/// Argument carried by an intercepted call, as a tagged value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArg {
    Id(i64),
    Record(User),
    None,
}

impl fmt::Display for CallArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallArg::Id(id) => write!(f, "{id}"),
            CallArg::Record(user) => write!(f, "user {} {:?}", user.id, user.name),
            CallArg::None => f.write_str(""),
        }
    }
}

/// Decides whether a call's argument satisfies an expectation. Evaluated by
/// the single [`ArgMatcher::accepts`] dispatch; no reflection anywhere.
pub enum ArgMatcher {
    Exact(CallArg),
    Any,
    Predicate(Box<dyn Fn(&CallArg) -> bool>),
}

impl ArgMatcher {
    pub(crate) fn accepts(&self, arg: &CallArg) -> bool {
        match self {
            ArgMatcher::Exact(expected) => expected == arg,
            ArgMatcher::Any => true,
            ArgMatcher::Predicate(pred) => pred(arg),
        }
    }
}

impl fmt::Debug for ArgMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgMatcher::Exact(arg) => f.debug_tuple("Exact").field(arg).finish(),
            ArgMatcher::Any => f.write_str("Any"),
            ArgMatcher::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Matches when the call's argument is exactly `id`.
pub fn eq_id(id: i64) -> ArgMatcher {
    ArgMatcher::Exact(CallArg::Id(id))
}

/// Matches when the call's argument is exactly `user`.
pub fn eq_record(user: User) -> ArgMatcher {
    ArgMatcher::Exact(CallArg::Record(user))
}

/// Matches any argument.
pub fn any() -> ArgMatcher {
    ArgMatcher::Any
}

/// Matches when `pred` accepts the argument.
pub fn satisfies(pred: impl Fn(&CallArg) -> bool + 'static) -> ArgMatcher {
    ArgMatcher::Predicate(Box::new(pred))
}

/// Value produced by a matched expectation, tagged per method shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallResult {
    Unit,
    Record(User),
    Records(Vec<User>),
}

/// Configured reply: a fixed outcome, or a callback computed from the actual
/// argument at call time.
pub enum Response {
    Fixed(Result<CallResult, RepoError>),
    Callback(Box<dyn Fn(&CallArg) -> Result<CallResult, RepoError>>),
}

impl Response {
    pub(crate) fn produce(&self, arg: &CallArg) -> Result<CallResult, RepoError> {
        match self {
            Response::Fixed(outcome) => outcome.clone(),
            Response::Callback(reply) => reply(arg),
        }
    }
}

/// How many times an expectation must be matched by the end of the test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallCount {
    Exactly(usize),
    AtLeastOnce,
    Unbounded,
}

impl CallCount {
    /// An exhausted expectation is skipped when scanning for a match, letting
    /// a later catch-all take over.
    pub(crate) fn exhausted(self, observed: usize) -> bool {
        matches!(self, CallCount::Exactly(n) if observed >= n)
    }

    pub(crate) fn satisfied(self, observed: usize) -> bool {
        match self {
            CallCount::Exactly(n) => observed == n,
            CallCount::AtLeastOnce => observed >= 1,
            CallCount::Unbounded => true,
        }
    }
}

impl fmt::Display for CallCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallCount::Exactly(n) => write!(f, "exactly {n} call(s)"),
            CallCount::AtLeastOnce => f.write_str("at least 1 call"),
            CallCount::Unbounded => f.write_str("any number of calls"),
        }
    }
}

/// One pre-registered rule: which calls are permitted, what they return, and
/// how many times they must occur.
///
/// Defaults: wildcard matcher, unit reply, exactly one call, unordered.
/// Configured through the fluent setters, which can be chained off
/// [`crate::mock::MockEngine::expect`].
pub struct Expectation {
    method: Method,
    matcher: ArgMatcher,
    response: Response,
    count: CallCount,
    order: Option<usize>,
    observed: Cell<usize>,
}

impl Expectation {
    pub(crate) fn new(method: Method) -> Self {
        Expectation {
            method,
            matcher: ArgMatcher::Any,
            response: Response::Fixed(Ok(CallResult::Unit)),
            count: CallCount::Exactly(1),
            order: None,
            observed: Cell::new(0),
        }
    }

    pub fn with(&mut self, matcher: ArgMatcher) -> &mut Self {
        self.matcher = matcher;
        self
    }

    pub fn returns(&mut self, outcome: Result<CallResult, RepoError>) -> &mut Self {
        self.response = Response::Fixed(outcome);
        self
    }

    pub fn returns_user(&mut self, user: User) -> &mut Self {
        self.returns(Ok(CallResult::Record(user)))
    }

    pub fn returns_users(&mut self, users: Vec<User>) -> &mut Self {
        self.returns(Ok(CallResult::Records(users)))
    }

    pub fn returns_error(&mut self, error: RepoError) -> &mut Self {
        self.returns(Err(error))
    }

    /// Compute the reply from the actual argument at call time.
    pub fn responds_with(
        &mut self,
        reply: impl Fn(&CallArg) -> Result<CallResult, RepoError> + 'static,
    ) -> &mut Self {
        self.response = Response::Callback(Box::new(reply));
        self
    }

    pub fn times(&mut self, n: usize) -> &mut Self {
        self.count = CallCount::Exactly(n);
        self
    }

    pub fn at_least_once(&mut self) -> &mut Self {
        self.count = CallCount::AtLeastOnce;
        self
    }

    pub fn any_times(&mut self) -> &mut Self {
        self.count = CallCount::Unbounded;
        self
    }

    /// Require this expectation's first match to occur only after every
    /// expectation with a lower order index (for any method) has matched at
    /// least once.
    pub fn in_order(&mut self, index: usize) -> &mut Self {
        self.order = Some(index);
        self
    }

    pub(crate) fn method(&self) -> Method {
        self.method
    }

    pub(crate) fn order(&self) -> Option<usize> {
        self.order
    }

    pub(crate) fn count(&self) -> CallCount {
        self.count
    }

    pub(crate) fn observed(&self) -> usize {
        self.observed.get()
    }

    pub(crate) fn accepts(&self, arg: &CallArg) -> bool {
        self.matcher.accepts(arg)
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.count.exhausted(self.observed.get())
    }

    pub(crate) fn is_satisfied(&self) -> bool {
        self.count.satisfied(self.observed.get())
    }

    pub(crate) fn consume(&self, arg: &CallArg) -> Result<CallResult, RepoError> {
        self.observed.set(self.observed.get() + 1);
        self.response.produce(arg)
    }
}

impl fmt::Debug for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expectation")
            .field("method", &self.method)
            .field("matcher", &self.matcher)
            .field("count", &self.count)
            .field("order", &self.order)
            .field("observed", &self.observed.get())
            .finish()
    }
}
