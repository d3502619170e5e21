use std::fmt::{Formatter, Result as FmtResult};

use crate::invocation::Invocation;

use super::{Action, ActionResult};

/// Create an [`Invoke`] action that runs the passed callback.
pub fn invoke<F>(func: F) -> Invoke<F>
where
    F: Fn(&Invocation) -> ActionResult,
{
    Invoke(func)
}

/// Action that runs a callback with the intercepted invocation, for side
/// effects or computed outcomes.
#[must_use]
#[derive(Debug)]
pub struct Invoke<F>(pub F);

impl<F> Action for Invoke<F>
where
    F: Fn(&Invocation) -> ActionResult,
{
    fn invoke(&self, invocation: &Invocation) -> ActionResult {
        (self.0)(invocation)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "invokes a callback")
    }
}
