//! The [`constraint`](self) module contains the composable predicates used to
//! match the argument values of an intercepted call.

mod any;
mod equals;
mod logic;
mod same;

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::value::Value;

pub use any::{any, Any};
pub use equals::{eq, Equals};
pub use logic::{and, not, or, And, Not, Or};
pub use same::{same, IsSame};

/// A constraint is a predicate over a single argument value. It also renders
/// a human readable description of itself that is used for diagnostics only.
pub trait Constraint {
    /// Returns `true` if the passed `value` satisfies the constraint.
    ///
    /// Evaluation never mutates the constraint and never panics, whatever
    /// the value is.
    fn eval(&self, value: &Value) -> bool;

    /// Write a human readable representation of the constraint to the passed
    /// formatter.
    ///
    /// # Errors
    /// Returns an error if writing to the formatter failed.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult;
}

impl Constraint for Box<dyn Constraint> {
    fn eval(&self, value: &Value) -> bool {
        (**self).eval(value)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        (**self).fmt(f)
    }
}

/// Render a constraint description to a string.
#[must_use]
pub fn describe(constraint: &dyn Constraint) -> String {
    struct Adapter<'a>(&'a dyn Constraint);

    impl Display for Adapter<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            self.0.fmt(f)
        }
    }

    Adapter(constraint).to_string()
}
