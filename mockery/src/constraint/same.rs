use std::fmt::{Formatter, Result as FmtResult};

use crate::value::{fmt_value, Value};

use super::Constraint;

/// Create an [`IsSame`] constraint that matches on identity.
pub fn same<V: Into<Value>>(value: V) -> IsSame {
    IsSame(value.into())
}

/// Matches the one value this constraint was created with.
///
/// Reference values match by identity. Scalar values carry no identity of
/// their own, so for them the check collapses to equality.
#[must_use]
#[derive(Debug)]
pub struct IsSame(pub Value);

impl Constraint for IsSame {
    fn eval(&self, value: &Value) -> bool {
        match (&self.0, value) {
            (Value::Object(expected), Value::Object(actual)) => expected.is(actual),
            (expected, actual) => expected == actual,
        }
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "same(")?;
        fmt_value(&self.0, f)?;
        write!(f, ")")
    }
}
