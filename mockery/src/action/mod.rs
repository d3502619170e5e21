//! The [`action`](self) module contains the pre-defined actions that are
//! executed when an expectation accepts an intercepted call.

mod invoke;
mod returns;
mod throws;

use std::fmt::{Formatter, Result as FmtResult};

use crate::invocation::Invocation;
use crate::value::Value;

pub use invoke::{invoke, Invoke};
pub use returns::{return_, return_default, Return, ReturnDefault};
pub use throws::{throw, Throw};

/// Outcome of executing an action: a returned value or a thrown one.
///
/// A thrown value is the outcome the test deliberately configured for the
/// call. It is passed through to the caller untouched and is never a
/// framework failure.
pub type ActionResult = Result<Value, Value>;

/// An action produces the outcome of an accepted call.
pub trait Action {
    /// Execute the action for the passed `invocation`.
    fn invoke(&self, invocation: &Invocation) -> ActionResult;

    /// Write a human readable representation of the action to the passed
    /// formatter.
    ///
    /// # Errors
    /// Returns an error if writing to the formatter failed.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult;
}
