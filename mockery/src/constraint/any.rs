use std::fmt::{Formatter, Result as FmtResult};

use crate::value::Value;

use super::Constraint;

/// Create an [`Any`] constraint that matches every value.
pub fn any() -> Any {
    Any
}

/// Matches every value, including `null`.
#[must_use]
#[derive(Debug)]
pub struct Any;

impl Constraint for Any {
    fn eval(&self, _value: &Value) -> bool {
        true
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "any")
    }
}
