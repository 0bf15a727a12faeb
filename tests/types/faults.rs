use core::error::Error;

use outcome_rail::{EmptyValue, Fault, MessageFault, UnknownFault};

#[test]
fn empty_value_message() {
    assert_eq!(EmptyValue.message(), "Optional value was empty");
    assert_eq!(EmptyValue.to_string(), "Optional value was empty");
}

#[test]
fn unknown_fault_message() {
    assert_eq!(UnknownFault.message(), "An unknown error occurred");
    assert_eq!(UnknownFault.to_string(), "An unknown error occurred");
}

#[test]
fn message_fault_carries_an_arbitrary_message() {
    let fault = MessageFault::new("disk full");
    assert_eq!(fault.message(), "disk full");
    assert_eq!(fault.to_string(), "disk full");
}

#[test]
fn message_fault_from_string_types() {
    assert_eq!(MessageFault::from("a"), MessageFault::new("a"));
    assert_eq!(MessageFault::from(String::from("b")), MessageFault::new("b"));
}

#[test]
fn standard_faults_implement_the_error_trait() {
    fn accepts_error(_: &dyn Error) {}

    accepts_error(&EmptyValue);
    accepts_error(&UnknownFault);
    accepts_error(&MessageFault::new("boom"));
}

#[test]
fn str_and_string_ride_the_failure_channel_directly() {
    assert_eq!("boom".message(), "boom");
    assert_eq!(String::from("boom").message(), "boom");
}

#[test]
fn boxed_and_shared_faults_forward_message() {
    let boxed: Box<dyn Fault> = Box::new(MessageFault::new("boxed"));
    assert_eq!(boxed.message(), "boxed");

    let shared = std::sync::Arc::new(EmptyValue);
    assert_eq!(shared.message(), "Optional value was empty");
}

#[test]
fn log_does_not_consume_or_alter_the_fault() {
    let fault = MessageFault::new("logged");
    fault.log();
    assert_eq!(fault.message(), "logged");
}
