//! The [`builder`](self) module contains the protocol used to declare
//! expectations on a [`Mockery`](crate::Mockery), and the default collector
//! that implements it.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::action::Action;
use crate::constraint::eq;
use crate::expectation::{
    CallExpectation, Expectation, OrderedExpectations, UnorderedExpectations,
};
use crate::invocation::Invocation;

/// Accumulates declarative expectation statements and converts them into an
/// expectation tree.
///
/// A DSL layer interprets readable test statements into calls on a builder;
/// the engine only consumes this interface.
pub trait ExpectationBuilder {
    /// Set the action used by expectations that did not bind one explicitly.
    fn set_default_action(&mut self, action: Arc<dyn Action>);

    /// Convert the accumulated statements into an expectation tree.
    fn into_expectation(self: Box<Self>) -> Box<dyn Expectation>;
}

/// Records invocations that are intercepted while a mockery is capturing as
/// newly discovered expectations.
pub trait ExpectationCapture {
    /// Add an expectation derived from the passed `invocation`.
    fn create_expectation_from(&mut self, invocation: &Invocation);
}

impl<C> ExpectationCapture for Rc<RefCell<C>>
where
    C: ExpectationCapture,
{
    fn create_expectation_from(&mut self, invocation: &Invocation) {
        self.borrow_mut().create_expectation_from(invocation);
    }
}

/// Default [`ExpectationBuilder`]: collects call expectations into an
/// unordered group, or an ordered one on request.
///
/// Also implements [`ExpectationCapture`]: a captured invocation becomes an
/// expectation that matches exactly the values that were seen, any number of
/// times.
pub struct Expectations {
    expectations: Vec<CallExpectation>,
    ordered: bool,
    default_action: Option<Arc<dyn Action>>,
}

impl Expectations {
    /// Create a collector for an unordered expectation set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            expectations: Vec::new(),
            ordered: false,
            default_action: None,
        }
    }

    /// Create a collector whose expectations must fire in declaration order.
    #[must_use]
    pub fn in_sequence() -> Self {
        Self {
            ordered: true,
            ..Self::new()
        }
    }

    /// Add one call expectation at the end of the declaration order.
    pub fn expect(&mut self, expectation: CallExpectation) -> &mut Self {
        self.expectations.push(expectation);
        self
    }

    /// Number of expectations collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expectations.len()
    }

    /// Returns `true` if nothing has been collected yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expectations.is_empty()
    }
}

impl Default for Expectations {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpectationBuilder for Expectations {
    fn set_default_action(&mut self, action: Arc<dyn Action>) {
        self.default_action = Some(action);
    }

    fn into_expectation(self: Box<Self>) -> Box<dyn Expectation> {
        let Self {
            expectations,
            ordered,
            default_action,
        } = *self;

        let children = expectations.into_iter().map(|mut expectation| {
            if let Some(action) = &default_action {
                expectation.use_default_action(action);
            }

            Box::new(expectation) as Box<dyn Expectation>
        });

        if ordered {
            let mut group = OrderedExpectations::new();
            for child in children {
                group.add(child);
            }

            Box::new(group)
        } else {
            let mut group = UnorderedExpectations::new();
            for child in children {
                group.add(child);
            }

            Box::new(group)
        }
    }
}

impl ExpectationCapture for Expectations {
    fn create_expectation_from(&mut self, invocation: &Invocation) {
        let mut expectation = CallExpectation::new(
            invocation.receiver().clone(),
            invocation.method().name.clone(),
        );

        for argument in invocation.arguments() {
            expectation = expectation.with(eq(argument.clone()));
        }

        self.expect(expectation);
    }
}

#[cfg(test)]
mod tests {
    use crate::expectation::Expectation;
    use crate::invocation::{Invocation, MethodSignature};
    use crate::value::{ObjectRef, Value, ValueKind};

    use super::{ExpectationBuilder, ExpectationCapture, Expectations};

    #[test]
    fn captured_invocation_becomes_a_matching_expectation() {
        let receiver = ObjectRef::new("math");
        let invocation = Invocation::new(
            receiver.clone(),
            MethodSignature::new("sqrt", vec![ValueKind::Float], ValueKind::Float),
            vec![Value::Float(4.0)],
        );

        let mut capture = Expectations::new();
        capture.create_expectation_from(&invocation);
        assert_eq!(capture.len(), 1);

        let expectation = ExpectationBuilder::into_expectation(Box::new(capture));
        assert!(expectation.matches(&invocation));

        let other = Invocation::new(
            receiver,
            MethodSignature::new("sqrt", vec![ValueKind::Float], ValueKind::Float),
            vec![Value::Float(5.0)],
        );
        assert!(!expectation.matches(&other));
    }
}
