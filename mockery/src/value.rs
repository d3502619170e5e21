//! The [`value`](self) module defines the opaque value model that invocations
//! carry and constraints operate on.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::Arc;

/// A single argument or return value of an intercepted call.
///
/// Values are opaque to the dispatch engine itself: only constraints decide
/// what a value means. `Null` is a legal value in every position.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absent value.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// A reference value with identity, typically a mock object.
    Object(ObjectRef),
}

impl Value {
    /// Get the type descriptor of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Str(_) => ValueKind::Str,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// Returns `true` if this is the `Null` value.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            // Reference values compare by identity, not by name.
            (Self::Object(a), Self::Object(b)) => a.is(b),
            _ => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Object(value) => write!(f, "{value}"),
        }
    }
}

macro_rules! impl_from {
    ($variant:ident($type:ty)) => {
        impl From<$type> for Value {
            fn from(value: $type) -> Self {
                Self::$variant(value.into())
            }
        }
    };
}

impl_from!(Bool(bool));
impl_from!(Int(i64));
impl_from!(Float(f64));
impl_from!(Str(String));
impl_from!(Str(&str));
impl_from!(Object(ObjectRef));

/// Type descriptor of a [`Value`], carried alongside the values themselves in
/// method signatures.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Str,
    Object,
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::Object => "object",
        };

        write!(f, "{name}")
    }
}

/// Named identity handle for mock objects and other reference values.
///
/// Two handles are the same object only if one is a clone of the other;
/// the name is carried for diagnostics and takes no part in identity.
#[derive(Debug, Clone)]
pub struct ObjectRef(Arc<String>);

impl ObjectRef {
    /// Create a new, distinct identity with the passed `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::new(name.into()))
    }

    /// Name the identity was created with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns `true` if `other` is the same identity as `self`.
    #[must_use]
    pub fn is(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Display for ObjectRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// Render a value for diagnostics: `null` stays bare, everything else is
/// wrapped in angle brackets.
pub(crate) fn fmt_value(value: &Value, f: &mut Formatter<'_>) -> FmtResult {
    match value {
        Value::Null => write!(f, "null"),
        other => write!(f, "<{other}>"),
    }
}

#[cfg(test)]
mod tests {
    use super::{ObjectRef, Value, ValueKind};

    #[test]
    fn identity_is_not_structural() {
        let a = ObjectRef::new("mock");
        let b = ObjectRef::new("mock");

        assert!(a.is(&a.clone()));
        assert!(!a.is(&b));
        assert_ne!(Value::Object(a), Value::Object(b));
    }

    #[test]
    fn display() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Float(4.0).to_string(), "4.0");
        assert_eq!(Value::Str("ARG".into()).to_string(), "ARG");
        assert_eq!(Value::Object(ObjectRef::new("math")).to_string(), "math");
    }

    #[test]
    fn kind() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::from(4.0).kind(), ValueKind::Float);
        assert_eq!(Value::from("x").kind(), ValueKind::Str);
    }
}
