//! A behavior-verification engine for unit tests.
//!
//! A test declares, on a [`Mockery`], the set of calls its collaborators are
//! expected to receive, exercises the code under test against imposterised
//! mock objects, and finally asks the mockery whether everything it declared
//! actually happened. Every intercepted call is checked the moment it
//! arrives; the first unexpected call is latched and re-surfaced on every
//! later call of the same test.

pub mod action;
pub mod builder;
pub mod constraint;
pub mod error;
pub mod expectation;
pub mod imposter;
pub mod invocation;
pub mod mockery;
pub mod times;
pub mod value;

pub use action::Action;
pub use builder::{ExpectationBuilder, ExpectationCapture, Expectations};
pub use constraint::Constraint;
pub use error::{DispatchError, ErrorTranslator, ExpectationError, IdentityTranslator};
pub use expectation::{
    CallExpectation, Expectation, OrderedExpectations, UnorderedExpectations,
    UnspecifiedExpectation,
};
pub use imposter::Imposterise;
pub use invocation::{Invocation, MethodSignature};
pub use mockery::{MockObject, Mockery};
pub use times::{Times, TimesRange};
pub use value::{ObjectRef, Value, ValueKind};
