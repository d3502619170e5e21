//! The [`invocation`](self) module defines the record of one intercepted call.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::mem::take;

use crate::value::{fmt_value, ObjectRef, Value, ValueKind};

/// Identity of a method on a mocked type: name plus parameter and return
/// type descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub name: String,
    pub parameter_types: Vec<ValueKind>,
    pub return_type: ValueKind,
}

impl MethodSignature {
    /// Create a new method signature.
    pub fn new(
        name: impl Into<String>,
        parameter_types: Vec<ValueKind>,
        return_type: ValueKind,
    ) -> Self {
        Self {
            name: name.into(),
            parameter_types,
            return_type,
        }
    }
}

/// Immutable record of one intercepted call: who was called, which method,
/// with which argument values.
///
/// Invocations are created once per intercepted call and only ever matched
/// against constraints, never compared with each other.
#[derive(Debug, Clone)]
pub struct Invocation {
    receiver: ObjectRef,
    method: MethodSignature,
    arguments: Vec<Value>,
}

impl Invocation {
    /// Create the record for one intercepted call.
    pub fn new(receiver: ObjectRef, method: MethodSignature, arguments: Vec<Value>) -> Self {
        Self {
            receiver,
            method,
            arguments,
        }
    }

    /// Identity of the object the call was made on.
    #[must_use]
    pub fn receiver(&self) -> &ObjectRef {
        &self.receiver
    }

    /// Identity of the invoked method.
    #[must_use]
    pub fn method(&self) -> &MethodSignature {
        &self.method
    }

    /// The argument values, in call order.
    #[must_use]
    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }
}

impl Display for Invocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}.{}(", self.receiver, self.method.name)?;

        let mut first = true;
        for argument in &self.arguments {
            if !take(&mut first) {
                write!(f, ", ")?;
            }

            fmt_value(argument, f)?;
        }

        write!(f, ")")
    }
}
