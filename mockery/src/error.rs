//! The [`error`](self) module contains the failure taxonomy of the engine and
//! the pluggable translation hook.

use thiserror::Error;

use crate::invocation::Invocation;
use crate::value::Value;

/// A framework failure raised by the dispatch engine.
///
/// Errors are plain cloneable values so the first unexpected-invocation
/// failure can be latched and re-surfaced verbatim on every later call.
#[derive(Debug, Clone, Error)]
pub enum ExpectationError {
    /// A call arrived that no expectation accepts, either because nothing
    /// matches its shape or because the matching expectation's cardinality
    /// is exhausted.
    #[error("unexpected invocation: {invocation}\nexpectations:\n{expectations}")]
    UnexpectedInvocation {
        /// The offending call.
        invocation: Invocation,
        /// Rendering of the expectation tree at the time of the call.
        expectations: String,
    },

    /// Verification found expectations that still need more invocations.
    /// Only raised when the test explicitly asks, never spontaneously.
    #[error("not all expectations were satisfied:\n{}", .unmet.join("\n"))]
    UnsatisfiedExpectation {
        /// One description per unmet expectation.
        unmet: Vec<String>,
    },

    /// A new expectation declaration was attempted while a capture was
    /// already in progress. Raised immediately and not latched; the
    /// surrounding capture stays usable.
    #[error("nested expectations are not supported")]
    IllegalNesting,
}

/// Outcome of a failed dispatch: either a framework failure or a value the
/// test configured the call to throw.
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    /// The dispatch engine rejected the call.
    #[error(transparent)]
    Expectation(#[from] ExpectationError),

    /// The matched expectation's action threw the contained value. This is
    /// the call outcome the test asked for and bypasses translation and
    /// latching entirely.
    #[error("thrown: {0}")]
    Thrown(Value),
}

/// Translates framework failures into whatever failure convention the
/// surrounding test framework expects.
pub trait ErrorTranslator {
    /// Translate the passed error.
    fn translate(&self, error: ExpectationError) -> ExpectationError;
}

/// Default translator: passes every error through unchanged.
#[derive(Default, Debug, Clone, Copy)]
pub struct IdentityTranslator;

impl ErrorTranslator for IdentityTranslator {
    fn translate(&self, error: ExpectationError) -> ExpectationError {
        error
    }
}
