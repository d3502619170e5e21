//! The [`expectation`](self) module contains the expectation tree that the
//! dispatcher checks every intercepted call against.

mod call;
mod group;

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::action::ActionResult;
use crate::invocation::Invocation;

pub use call::CallExpectation;
pub use group::{OrderedExpectations, UnorderedExpectations};

/// A node in the expectation tree.
///
/// Leaves describe one expected call; groups compose children into unordered
/// or ordered sets with the same contract. The only state that changes over
/// a test's lifetime is the call counts and cursors inside the tree.
pub trait Expectation: Display {
    /// Returns `true` if this expectation may accept the passed `invocation`
    /// right now.
    fn matches(&self, invocation: &Invocation) -> bool;

    /// Record the passed `invocation` and execute the bound action.
    ///
    /// The caller must have confirmed [`matches`](Self::matches) first;
    /// invoking a non-matching expectation panics.
    fn invoke(&self, invocation: &Invocation) -> ActionResult;

    /// Returns `true` if this expectation has not yet received the minimum
    /// number of invocations it requires.
    fn needs_more_invocations(&self) -> bool;

    /// Append a description of every unmet expectation in this subtree to
    /// `unmet`.
    fn collect_unmet(&self, unmet: &mut Vec<String>);
}

/// Sentinel root used before any expectations have been declared.
///
/// It matches nothing, so the first call on a mock is reported as an
/// unexpected invocation with a readable diagnostic, and it is never
/// satisfied, so verifying a mockery that never declared expectations fails
/// audibly.
#[derive(Default, Debug)]
pub struct UnspecifiedExpectation;

impl Expectation for UnspecifiedExpectation {
    fn matches(&self, _invocation: &Invocation) -> bool {
        false
    }

    fn invoke(&self, invocation: &Invocation) -> ActionResult {
        panic!("invoked {invocation} although no expectations were specified");
    }

    fn needs_more_invocations(&self) -> bool {
        true
    }

    fn collect_unmet(&self, unmet: &mut Vec<String>) {
        unmet.push(self.to_string());
    }
}

impl Display for UnspecifiedExpectation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "no expectations specified")
    }
}
