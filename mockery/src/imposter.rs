//! The [`imposter`](self) module defines the boundary through which a mock
//! takes on the shape of the type it stands in for.

use crate::mockery::MockObject;

/// Capability of materializing a call-interceptable instance of a type.
///
/// The engine never depends on how an implementation is produced; adapter
/// structs written by hand and generated ones both satisfy the contract.
/// The one rule is that every call on the produced instance must be
/// forwarded to the passed [`MockObject`] as an
/// [`Invocation`](crate::Invocation).
pub trait Imposterise: Sized {
    /// Returns `true` if an instance can be produced at all.
    ///
    /// Some imposterisation strategies cannot cover every type; callers can
    /// probe before committing to a mock.
    #[must_use]
    fn can_imposterise() -> bool {
        true
    }

    /// Produce the instance, wired to forward its calls to `mock`.
    fn imposterise(mock: MockObject) -> Self;
}
