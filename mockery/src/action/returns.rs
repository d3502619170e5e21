use std::fmt::{Formatter, Result as FmtResult};

use crate::invocation::Invocation;
use crate::value::{fmt_value, Value, ValueKind};

use super::{Action, ActionResult};

/// Create a [`Return`] action that returns a clone of `value` on every call.
pub fn return_<V: Into<Value>>(value: V) -> Return {
    Return(value.into())
}

/// Action that returns the configured value when executed.
#[must_use]
#[derive(Debug, Clone)]
pub struct Return(pub Value);

impl Action for Return {
    fn invoke(&self, _invocation: &Invocation) -> ActionResult {
        Ok(self.0.clone())
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "returns(")?;
        fmt_value(&self.0, f)?;
        write!(f, ")")
    }
}

/// Create a [`ReturnDefault`] action.
pub fn return_default() -> ReturnDefault {
    ReturnDefault
}

/// Action that returns a neutral value compatible with the invoked method's
/// declared return kind: `false`, `0`, `0.0`, the empty string, or `null`.
///
/// Used as the default action for expectations that bind no action of their
/// own and for calls intercepted while capturing.
#[must_use]
#[derive(Default, Debug, Clone)]
pub struct ReturnDefault;

impl Action for ReturnDefault {
    fn invoke(&self, invocation: &Invocation) -> ActionResult {
        Ok(match invocation.method().return_type {
            ValueKind::Null | ValueKind::Object => Value::Null,
            ValueKind::Bool => Value::Bool(false),
            ValueKind::Int => Value::Int(0),
            ValueKind::Float => Value::Float(0.0),
            ValueKind::Str => Value::Str(String::new()),
        })
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "returns a default value")
    }
}
