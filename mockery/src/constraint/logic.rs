use std::fmt::{Formatter, Result as FmtResult};

use crate::value::Value;

use super::Constraint;

/// Create a [`Not`] constraint that inverts `inner`.
pub fn not<C>(inner: C) -> Not<C> {
    Not(inner)
}

/// Logical negation of the inner constraint.
#[must_use]
#[derive(Debug)]
pub struct Not<C>(pub C);

impl<C> Constraint for Not<C>
where
    C: Constraint,
{
    fn eval(&self, value: &Value) -> bool {
        !self.0.eval(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "not(")?;
        self.0.fmt(f)?;
        write!(f, ")")
    }
}

/// Create an [`And`] constraint over `left` and `right`.
pub fn and<A, B>(left: A, right: B) -> And<A, B> {
    And(left, right)
}

/// Logical conjunction of two constraints.
///
/// Evaluation is shortcut: the right constraint is not evaluated if the left
/// constraint returns `false`.
#[must_use]
#[derive(Debug)]
pub struct And<A, B>(pub A, pub B);

impl<A, B> Constraint for And<A, B>
where
    A: Constraint,
    B: Constraint,
{
    fn eval(&self, value: &Value) -> bool {
        self.0.eval(value) && self.1.eval(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "(")?;
        self.0.fmt(f)?;
        write!(f, " and ")?;
        self.1.fmt(f)?;
        write!(f, ")")
    }
}

/// Create an [`Or`] constraint over `left` and `right`.
pub fn or<A, B>(left: A, right: B) -> Or<A, B> {
    Or(left, right)
}

/// Logical disjunction of two constraints.
///
/// Evaluation is shortcut: the right constraint is not evaluated if the left
/// constraint returns `true`.
#[must_use]
#[derive(Debug)]
pub struct Or<A, B>(pub A, pub B);

impl<A, B> Constraint for Or<A, B>
where
    A: Constraint,
    B: Constraint,
{
    fn eval(&self, value: &Value) -> bool {
        self.0.eval(value) || self.1.eval(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "(")?;
        self.0.fmt(f)?;
        write!(f, " or ")?;
        self.1.fmt(f)?;
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::fmt::{Formatter, Result as FmtResult};

    use crate::constraint::{describe, Constraint};
    use crate::value::Value;

    use super::{and, not, or};

    struct Spy {
        result: bool,
        evaluated: Cell<bool>,
    }

    impl Spy {
        fn new(result: bool) -> Self {
            Self {
                result,
                evaluated: Cell::new(false),
            }
        }
    }

    impl Constraint for Spy {
        fn eval(&self, _value: &Value) -> bool {
            self.evaluated.set(true);
            self.result
        }

        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            write!(f, "spy")
        }
    }

    #[test]
    fn or_shortcuts_when_left_is_true() {
        let constraint = or(Spy::new(true), Spy::new(true));

        assert!(constraint.eval(&Value::Null));
        assert!(!constraint.1.evaluated.get());
    }

    #[test]
    fn or_evaluates_right_when_left_is_false() {
        let constraint = or(Spy::new(false), Spy::new(true));

        assert!(constraint.eval(&Value::Null));
        assert!(constraint.1.evaluated.get());
    }

    #[test]
    fn and_shortcuts_when_left_is_false() {
        let constraint = and(Spy::new(false), Spy::new(true));

        assert!(!constraint.eval(&Value::Null));
        assert!(!constraint.1.evaluated.get());
    }

    #[test]
    fn and_evaluates_right_when_left_is_true() {
        let constraint = and(Spy::new(true), Spy::new(false));

        assert!(!constraint.eval(&Value::Null));
        assert!(constraint.1.evaluated.get());
    }

    #[test]
    fn not_inverts() {
        assert!(!not(Spy::new(true)).eval(&Value::Null));
        assert!(not(Spy::new(false)).eval(&Value::Null));
    }

    #[test]
    fn descriptions() {
        assert_eq!(describe(&and(Spy::new(true), Spy::new(true))), "(spy and spy)");
        assert_eq!(describe(&or(Spy::new(true), Spy::new(true))), "(spy or spy)");
        assert_eq!(describe(&not(Spy::new(true))), "not(spy)");
    }
}
