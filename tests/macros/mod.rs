use outcome_rail::{fault, outcome, Fault, MessageFault};

#[test]
fn fault_macro_formats_the_message() {
    let user_id = 42;
    let f = fault!("user {user_id} not found");
    assert_eq!(f, MessageFault::new("user 42 not found"));
    assert_eq!(f.message(), "user 42 not found");
}

#[test]
fn fault_macro_accepts_plain_literals() {
    assert_eq!(fault!("boom").message(), "boom");
}

#[test]
fn outcome_macro_wraps_a_result_expression() {
    let ok = outcome!("5".parse::<u8>());
    assert_eq!(ok.data(), 5);

    let failed = outcome!("x".parse::<u8>());
    assert!(failed.is_failure());
}

#[test]
fn outcome_macro_accepts_a_trailing_comma() {
    let ok = outcome!("5".parse::<u8>(),);
    assert!(ok.is_success());
}
