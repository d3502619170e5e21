use std::fmt::{Formatter, Result as FmtResult};

use crate::invocation::Invocation;
use crate::value::{fmt_value, Value};

use super::{Action, ActionResult};

/// Create a [`Throw`] action that throws `value` on every call.
pub fn throw<V: Into<Value>>(value: V) -> Throw {
    Throw(value.into())
}

/// Action that throws the configured value when executed.
///
/// The thrown value reaches the caller as
/// [`DispatchError::Thrown`](crate::error::DispatchError::Thrown); it is the
/// call outcome the test asked for, not a failure of the engine.
#[must_use]
#[derive(Debug, Clone)]
pub struct Throw(pub Value);

impl Action for Throw {
    fn invoke(&self, _invocation: &Invocation) -> ActionResult {
        Err(self.0.clone())
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "throws(")?;
        fmt_value(&self.0, f)?;
        write!(f, ")")
    }
}
