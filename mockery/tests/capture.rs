use std::cell::RefCell;
use std::rc::Rc;

use mockery::{
    ExpectationBuilder, ExpectationError, Expectations, Invocation, MethodSignature, MockObject,
    Mockery, Value, ValueKind,
};

fn log_invocation(mock: &MockObject, message: &str) -> Invocation {
    Invocation::new(
        mock.object_ref(),
        MethodSignature::new("log", vec![ValueKind::Str], ValueKind::Null),
        vec![Value::Str(message.into())],
    )
}

#[test]
fn captured_calls_are_stubbed_and_recorded() {
    let mockery = Mockery::new();
    let mock = mockery.mock("logger");

    let capture = Rc::new(RefCell::new(Expectations::new()));
    mockery.start_capturing(Box::new(capture.clone()));

    // While capturing, calls are auto-stubbed by the default action.
    assert_eq!(mock.invoke(log_invocation(&mock, "starting")).unwrap(), Value::Null);
    assert_eq!(mock.invoke(log_invocation(&mock, "done")).unwrap(), Value::Null);
    assert_eq!(capture.borrow().len(), 2);

    mockery.stop_capturing();

    // The recorded expectations can be declared and then match for real.
    let captured = Rc::try_unwrap(capture).ok().unwrap().into_inner();
    mockery.expects(captured).unwrap();

    assert_eq!(mock.invoke(log_invocation(&mock, "starting")).unwrap(), Value::Null);
    mockery.assert_is_satisfied().unwrap();
}

#[test]
fn declaring_expectations_while_capturing_is_rejected() {
    let mockery = Mockery::new();
    let mock = mockery.mock("logger");

    let capture = Rc::new(RefCell::new(Expectations::new()));
    mockery.start_capturing(Box::new(capture.clone()));

    let error = mockery.expects(Expectations::new()).unwrap_err();
    assert!(matches!(error, ExpectationError::IllegalNesting));
    assert_eq!(error.to_string(), "nested expectations are not supported");

    // The rejection is not latched and the outer capture stays usable.
    assert_eq!(mock.invoke(log_invocation(&mock, "still capturing")).unwrap(), Value::Null);
    assert_eq!(capture.borrow().len(), 1);

    mockery.stop_capturing();

    let captured = Rc::try_unwrap(capture).ok().unwrap().into_inner();
    mockery.expects(captured).unwrap();

    assert_eq!(mock.invoke(log_invocation(&mock, "still capturing")).unwrap(), Value::Null);
    mockery.assert_is_satisfied().unwrap();
}

#[test]
fn replacing_expectations_directly_is_rejected_while_capturing_too() {
    let mockery = Mockery::new();

    mockery.start_capturing(Box::new(Expectations::new()));

    let error = mockery
        .expects_expectation(ExpectationBuilder::into_expectation(Box::new(
            Expectations::new(),
        )))
        .unwrap_err();
    assert!(matches!(error, ExpectationError::IllegalNesting));

    mockery.stop_capturing();
}

#[test]
fn later_declaration_replaces_the_expectation_tree() {
    let mockery = Mockery::new();
    let mock = mockery.mock("logger");

    let mut first = Expectations::new();
    first.expect(mockery_call(&mock, "starting"));
    mockery.expects(first).unwrap();

    // A later declaration replaces the earlier tree entirely.
    let mut second = Expectations::new();
    second.expect(mockery_call(&mock, "done"));
    mockery.expects(second).unwrap();

    mock.invoke(log_invocation(&mock, "done")).unwrap();
    mock.invoke(log_invocation(&mock, "starting")).unwrap_err();
}

fn mockery_call(mock: &MockObject, message: &str) -> mockery::CallExpectation {
    mockery::CallExpectation::new(mock.object_ref(), "log")
        .with(mockery::constraint::eq(message))
        .times(1..)
}
