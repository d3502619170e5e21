//! The [`mockery`](self) module implements the dispatcher at the centre of
//! the engine.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::action::{return_default, Action};
use crate::builder::{ExpectationBuilder, ExpectationCapture};
use crate::error::{DispatchError, ErrorTranslator, ExpectationError, IdentityTranslator};
use crate::expectation::{Expectation, UnspecifiedExpectation};
use crate::imposter::Imposterise;
use crate::invocation::Invocation;
use crate::value::{ObjectRef, Value};

/// The context of the object under test: it holds the declared expectations
/// and checks every intercepted call against them.
///
/// One mockery is created per test and owned by the test; the mock objects
/// it hands out share its state and forward their calls to it. Nothing is
/// reused across tests. The mockery makes no thread-safety guarantees: mocks
/// are meant to be called from the one test thread only.
pub struct Mockery {
    state: Arc<Mutex<State>>,
}

struct State {
    expectation: Box<dyn Expectation>,
    capture: Option<Box<dyn ExpectationCapture>>,
    first_error: Option<ExpectationError>,
    default_action: Arc<dyn Action>,
    translator: Box<dyn ErrorTranslator>,
}

impl Mockery {
    /// Create a new mockery with no expectations specified.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                expectation: Box::new(UnspecifiedExpectation),
                capture: None,
                first_error: None,
                default_action: Arc::new(return_default()),
                translator: Box::new(IdentityTranslator),
            })),
        }
    }

    /// Replace the action used by expectations that did not bind an action
    /// explicitly, and by calls intercepted while capturing.
    pub fn set_default_action<A: Action + 'static>(&self, action: A) {
        self.state.lock().default_action = Arc::new(action);
    }

    /// Replace the error translator.
    ///
    /// By default errors are surfaced untranslated as
    /// [`ExpectationError`] values. Plug in a translator if the surrounding
    /// test framework wants failures reported in its own shape.
    pub fn set_error_translator<T: ErrorTranslator + 'static>(&self, translator: T) {
        self.state.lock().translator = Box::new(translator);
    }

    /// Create a mock object with the passed `name`.
    #[must_use]
    pub fn mock(&self, name: impl Into<String>) -> MockObject {
        MockObject {
            receiver: ObjectRef::new(name),
            state: self.state.clone(),
        }
    }

    /// Create an imposterised instance of `T`, named `name`, whose calls are
    /// dispatched through this mockery.
    #[must_use]
    pub fn imposterise<T: Imposterise>(&self, name: impl Into<String>) -> T {
        T::imposterise(self.mock(name))
    }

    /// Declare the calls the object under test is expected to perform.
    ///
    /// The new expectation tree replaces the current one and any capture in
    /// flight for a previous declaration is dropped. A failure latched by an
    /// earlier unexpected invocation is kept: it belongs to the test, not to
    /// one declaration.
    ///
    /// # Errors
    /// Returns [`ExpectationError::IllegalNesting`] if a capture is in
    /// progress, leaving that capture untouched.
    pub fn expects<B: ExpectationBuilder>(&self, mut builder: B) -> Result<(), ExpectationError> {
        let mut state = self.state.lock();

        if state.capture.is_some() {
            return Err(state.translator.translate(ExpectationError::IllegalNesting));
        }

        builder.set_default_action(state.default_action.clone());
        state.expectation = ExpectationBuilder::into_expectation(Box::new(builder));

        Ok(())
    }

    /// Replace the expectation tree directly, bypassing the builder
    /// protocol.
    ///
    /// # Errors
    /// Same nesting rule as [`expects`](Self::expects).
    pub fn expects_expectation(
        &self,
        expectation: Box<dyn Expectation>,
    ) -> Result<(), ExpectationError> {
        let mut state = self.state.lock();

        if state.capture.is_some() {
            return Err(state.translator.translate(ExpectationError::IllegalNesting));
        }

        state.expectation = expectation;

        Ok(())
    }

    /// Start recording intercepted calls into `capture` as newly discovered
    /// expectations instead of checking them.
    pub fn start_capturing(&self, capture: Box<dyn ExpectationCapture>) {
        self.state.lock().capture = Some(capture);
    }

    /// Stop recording and hand the capture back to the caller.
    pub fn stop_capturing(&self) -> Option<Box<dyn ExpectationCapture>> {
        self.state.lock().capture.take()
    }

    /// Fail if any declared expectation still needs more invocations.
    ///
    /// Verification does not change any state; it can be called repeatedly
    /// and does not clear a latched failure.
    ///
    /// # Errors
    /// Returns [`ExpectationError::UnsatisfiedExpectation`] naming every
    /// unmet expectation.
    pub fn assert_is_satisfied(&self) -> Result<(), ExpectationError> {
        let state = self.state.lock();

        if state.expectation.needs_more_invocations() {
            let mut unmet = Vec::new();
            state.expectation.collect_unmet(&mut unmet);

            return Err(state
                .translator
                .translate(ExpectationError::UnsatisfiedExpectation { unmet }));
        }

        Ok(())
    }
}

impl Default for Mockery {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle through which an imposterised instance forwards its calls.
///
/// Clones share the identity of the mock they were created for.
#[derive(Clone)]
pub struct MockObject {
    receiver: ObjectRef,
    state: Arc<Mutex<State>>,
}

impl MockObject {
    /// Identity of this mock, used as the receiver of its invocations.
    #[must_use]
    pub fn object_ref(&self) -> ObjectRef {
        self.receiver.clone()
    }

    /// Name the mock was created with.
    #[must_use]
    pub fn name(&self) -> &str {
        self.receiver.name()
    }

    /// Dispatch one intercepted call.
    ///
    /// While capturing, the call is recorded as a new expectation and
    /// answered by the default action. Once a failure is latched, every call
    /// surfaces that same failure again without re-evaluating anything.
    /// Otherwise the call is checked against the expectation tree: a match
    /// executes the bound action, a mismatch latches and raises an
    /// unexpected-invocation failure.
    ///
    /// # Errors
    /// Returns [`DispatchError::Expectation`] if the call is unexpected or a
    /// failure is already latched, [`DispatchError::Thrown`] if the matched
    /// action throws.
    pub fn invoke(&self, invocation: Invocation) -> Result<Value, DispatchError> {
        let mut state = self.state.lock();

        if state.capture.is_some() {
            let action = state.default_action.clone();
            if let Some(capture) = state.capture.as_mut() {
                capture.create_expectation_from(&invocation);
            }
            drop(state);

            return action.invoke(&invocation).map_err(DispatchError::Thrown);
        }

        if let Some(error) = &state.first_error {
            return Err(DispatchError::Expectation(error.clone()));
        }

        if !state.expectation.matches(&invocation) {
            let error = state
                .translator
                .translate(ExpectationError::UnexpectedInvocation {
                    expectations: state.expectation.to_string(),
                    invocation,
                });
            state.first_error = Some(error.clone());

            return Err(DispatchError::Expectation(error));
        }

        state
            .expectation
            .invoke(&invocation)
            .map_err(DispatchError::Thrown)
    }
}
