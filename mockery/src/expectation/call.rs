use std::fmt::{Display, Formatter, Result as FmtResult};
use std::mem::take;
use std::sync::Arc;

use crate::action::{Action, ActionResult};
use crate::constraint::{same, Constraint};
use crate::invocation::Invocation;
use crate::times::{Times, TimesRange};
use crate::value::{ObjectRef, Value};

use super::Expectation;

/// Expectation for calls to one method on one mock.
///
/// A call matches if the receiver constraint, the method name, and every
/// positional argument constraint hold, and the call count is not exhausted.
/// The number of argument constraints must equal the number of arguments of
/// the call; a different arity is a non-match, never an error.
pub struct CallExpectation {
    receiver: Box<dyn Constraint>,
    method: String,
    arguments: Vec<Box<dyn Constraint>>,
    times: Times,
    action: Option<Arc<dyn Action>>,
}

impl CallExpectation {
    /// Create an expectation for calls to `method` on the mock identified by
    /// `receiver`, initially with no arguments, unbounded cardinality, and
    /// no action.
    pub fn new(receiver: ObjectRef, method: impl Into<String>) -> Self {
        Self {
            receiver: Box::new(same(receiver)),
            method: method.into(),
            arguments: Vec::new(),
            times: Times::new(..),
            action: None,
        }
    }

    /// Replace the receiver constraint.
    #[must_use]
    pub fn on<C: Constraint + 'static>(mut self, receiver: C) -> Self {
        self.receiver = Box::new(receiver);
        self
    }

    /// Add one positional argument constraint.
    #[must_use]
    pub fn with<C: Constraint + 'static>(mut self, constraint: C) -> Self {
        self.arguments.push(Box::new(constraint));
        self
    }

    /// Set the expected number of calls.
    #[must_use]
    pub fn times<R: Into<TimesRange>>(mut self, range: R) -> Self {
        self.times = Times::new(range);
        self
    }

    /// Set the action executed when the expectation accepts a call.
    #[must_use]
    pub fn will<A: Action + 'static>(mut self, action: A) -> Self {
        self.action = Some(Arc::new(action));
        self
    }

    /// Bind `action` if no action was set explicitly.
    pub(crate) fn use_default_action(&mut self, action: &Arc<dyn Action>) {
        if self.action.is_none() {
            self.action = Some(action.clone());
        }
    }
}

impl Expectation for CallExpectation {
    fn matches(&self, invocation: &Invocation) -> bool {
        if self.times.is_done() {
            return false;
        }

        if !self.receiver.eval(&Value::Object(invocation.receiver().clone())) {
            return false;
        }

        if self.method != invocation.method().name {
            return false;
        }

        let arguments = invocation.arguments();
        if self.arguments.len() != arguments.len() {
            return false;
        }

        self.arguments
            .iter()
            .zip(arguments)
            .all(|(constraint, argument)| constraint.eval(argument))
    }

    fn invoke(&self, invocation: &Invocation) -> ActionResult {
        self.times.increment();

        match &self.action {
            Some(action) => action.invoke(invocation),
            None => Ok(Value::Null),
        }
    }

    fn needs_more_invocations(&self) -> bool {
        !self.times.is_ready()
    }

    fn collect_unmet(&self, unmet: &mut Vec<String>) {
        if self.needs_more_invocations() {
            unmet.push(self.to_string());
        }
    }
}

impl Display for CallExpectation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.receiver.fmt(f)?;
        write!(f, ".{}(", self.method)?;

        let mut first = true;
        for constraint in &self.arguments {
            if !take(&mut first) {
                write!(f, ", ")?;
            }

            constraint.fmt(f)?;
        }

        write!(f, "), expected {}, ", self.times.range)?;

        match self.times.count() {
            0 => write!(f, "never invoked"),
            1 => write!(f, "invoked once"),
            n => write!(f, "invoked {n} times"),
        }
    }
}
