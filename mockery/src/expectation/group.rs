use std::fmt::{Display, Formatter, Result as FmtResult};
use std::mem::take;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::action::ActionResult;
use crate::invocation::Invocation;

use super::Expectation;

/// Unordered group: any child may accept a call.
///
/// Overlapping children are resolved by declaration order: the first declared
/// child that matches wins. This tie-break is deliberate and observable.
#[derive(Default)]
pub struct UnorderedExpectations {
    children: Vec<Box<dyn Expectation>>,
}

impl UnorderedExpectations {
    /// Create an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child at the end of the declaration order.
    pub fn add(&mut self, expectation: Box<dyn Expectation>) {
        self.children.push(expectation);
    }
}

impl Expectation for UnorderedExpectations {
    fn matches(&self, invocation: &Invocation) -> bool {
        self.children.iter().any(|child| child.matches(invocation))
    }

    fn invoke(&self, invocation: &Invocation) -> ActionResult {
        for child in &self.children {
            if child.matches(invocation) {
                return child.invoke(invocation);
            }
        }

        panic!("invoked {invocation} although no expectation matches");
    }

    fn needs_more_invocations(&self) -> bool {
        self.children
            .iter()
            .any(|child| child.needs_more_invocations())
    }

    fn collect_unmet(&self, unmet: &mut Vec<String>) {
        for child in &self.children {
            child.collect_unmet(unmet);
        }
    }
}

impl Display for UnorderedExpectations {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        fmt_children(&self.children, f)
    }
}

/// Ordered group: the children must fire in declaration order.
///
/// Only the child at the cursor may accept a call; a child that is satisfied
/// but no longer matches lets the cursor move on to the next one.
#[derive(Default)]
pub struct OrderedExpectations {
    children: Vec<Box<dyn Expectation>>,
    cursor: AtomicUsize,
}

impl OrderedExpectations {
    /// Create an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child at the end of the sequence.
    pub fn add(&mut self, expectation: Box<dyn Expectation>) {
        self.children.push(expectation);
    }

    /// Find the child that may accept `invocation`, walking from the cursor
    /// past satisfied children that no longer match.
    fn current(&self, invocation: &Invocation) -> Option<usize> {
        let mut index = self.cursor.load(Ordering::Relaxed);

        while let Some(child) = self.children.get(index) {
            if child.matches(invocation) {
                return Some(index);
            }

            if child.needs_more_invocations() {
                return None;
            }

            index += 1;
        }

        None
    }
}

impl Expectation for OrderedExpectations {
    fn matches(&self, invocation: &Invocation) -> bool {
        self.current(invocation).is_some()
    }

    fn invoke(&self, invocation: &Invocation) -> ActionResult {
        match self.current(invocation) {
            Some(index) => {
                self.cursor.store(index, Ordering::Relaxed);

                self.children[index].invoke(invocation)
            }
            None => panic!("invoked {invocation} although no expectation matches"),
        }
    }

    fn needs_more_invocations(&self) -> bool {
        self.children
            .iter()
            .any(|child| child.needs_more_invocations())
    }

    fn collect_unmet(&self, unmet: &mut Vec<String>) {
        for child in &self.children {
            child.collect_unmet(unmet);
        }
    }
}

impl Display for OrderedExpectations {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        fmt_children(&self.children, f)
    }
}

fn fmt_children(children: &[Box<dyn Expectation>], f: &mut Formatter<'_>) -> FmtResult {
    if children.is_empty() {
        return write!(f, "no expectations");
    }

    let mut first = true;
    for child in children {
        if !take(&mut first) {
            writeln!(f)?;
        }

        write!(f, "{child}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::action::return_;
    use crate::constraint::any;
    use crate::expectation::{CallExpectation, Expectation};
    use crate::invocation::{Invocation, MethodSignature};
    use crate::value::{ObjectRef, Value, ValueKind};

    use super::{OrderedExpectations, UnorderedExpectations};

    fn invocation(receiver: &ObjectRef, method: &str, argument: f64) -> Invocation {
        Invocation::new(
            receiver.clone(),
            MethodSignature::new(method, vec![ValueKind::Float], ValueKind::Float),
            vec![Value::Float(argument)],
        )
    }

    #[test]
    fn first_declared_child_wins_for_overlapping_constraints() {
        let receiver = ObjectRef::new("math");

        let mut group = UnorderedExpectations::new();
        group.add(Box::new(
            CallExpectation::new(receiver.clone(), "sqrt")
                .with(any())
                .times(1)
                .will(return_(1.0)),
        ));
        group.add(Box::new(
            CallExpectation::new(receiver.clone(), "sqrt")
                .with(any())
                .times(1)
                .will(return_(2.0)),
        ));

        let call = invocation(&receiver, "sqrt", 4.0);

        assert_eq!(group.invoke(&call), Ok(Value::Float(1.0)));
        assert_eq!(group.invoke(&call), Ok(Value::Float(2.0)));
        assert!(!group.matches(&call));
        assert!(!group.needs_more_invocations());
    }

    #[test]
    fn ordered_group_only_accepts_the_next_undischarged_child() {
        let receiver = ObjectRef::new("math");

        let mut group = OrderedExpectations::new();
        group.add(Box::new(
            CallExpectation::new(receiver.clone(), "first")
                .with(any())
                .times(1)
                .will(return_(1.0)),
        ));
        group.add(Box::new(
            CallExpectation::new(receiver.clone(), "second")
                .with(any())
                .times(1)
                .will(return_(2.0)),
        ));

        let first = invocation(&receiver, "first", 0.0);
        let second = invocation(&receiver, "second", 0.0);

        assert!(!group.matches(&second));
        assert!(group.matches(&first));

        assert_eq!(group.invoke(&first), Ok(Value::Float(1.0)));
        assert!(!group.matches(&first));
        assert!(group.matches(&second));
        assert!(group.needs_more_invocations());

        assert_eq!(group.invoke(&second), Ok(Value::Float(2.0)));
        assert!(!group.needs_more_invocations());
    }

    #[test]
    fn ordered_group_advances_past_satisfied_optional_children() {
        let receiver = ObjectRef::new("math");

        let mut group = OrderedExpectations::new();
        group.add(Box::new(
            CallExpectation::new(receiver.clone(), "optional")
                .with(any())
                .times(0..=1),
        ));
        group.add(Box::new(
            CallExpectation::new(receiver.clone(), "required")
                .with(any())
                .times(1)
                .will(return_(2.0)),
        ));

        let required = invocation(&receiver, "required", 0.0);

        assert!(group.matches(&required));
        assert_eq!(group.invoke(&required), Ok(Value::Float(2.0)));
        assert!(!group.needs_more_invocations());
    }

    #[test]
    fn unmet_report_lists_every_unsatisfied_child() {
        let receiver = ObjectRef::new("math");

        let mut group = UnorderedExpectations::new();
        group.add(Box::new(
            CallExpectation::new(receiver.clone(), "first").with(any()).times(1),
        ));
        group.add(Box::new(
            CallExpectation::new(receiver.clone(), "second").with(any()).times(1),
        ));

        let mut unmet = Vec::new();
        group.collect_unmet(&mut unmet);

        assert_eq!(unmet.len(), 2);
        assert!(unmet[0].contains("first"));
        assert!(unmet[1].contains("second"));
    }
}
