use std::fmt::{Formatter, Result as FmtResult};

use crate::value::{fmt_value, Value};

use super::Constraint;

/// Create an [`Equals`] constraint that matches values equal to `value`.
pub fn eq<V: Into<Value>>(value: V) -> Equals {
    Equals(value.into())
}

/// Matches by equality. `eq(null)` matches only `null`; reference values are
/// equal only when they are the same identity.
#[must_use]
#[derive(Debug)]
pub struct Equals(pub Value);

impl Constraint for Equals {
    fn eval(&self, value: &Value) -> bool {
        self.0 == *value
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "eq(")?;
        fmt_value(&self.0, f)?;
        write!(f, ")")
    }
}
