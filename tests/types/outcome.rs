use core::cell::Cell;

use outcome_rail::{Outcome, Status, UnknownFault};

#[test]
fn success_and_failure_are_mutually_exclusive() {
    let ok: Outcome<i32, &str> = Outcome::success(5);
    assert!(ok.is_success());
    assert!(!ok.is_failure());

    let failed: Outcome<i32, &str> = Outcome::failure("boom");
    assert!(failed.is_failure());
    assert!(!failed.is_success());
}

#[test]
fn data_returns_the_payload_of_a_success() {
    let ok: Outcome<i32, &str> = Outcome::success(5);
    assert_eq!(ok.data(), 5);
}

#[test]
#[should_panic(expected = "called `Outcome::data()` on a `Failure` value")]
fn data_on_failure_panics() {
    Outcome::<i32, &str>::failure("boom").data();
}

#[test]
fn error_returns_the_fault_of_a_failure() {
    let failed: Outcome<i32, &str> = Outcome::failure("boom");
    assert_eq!(failed.error(), "boom");
}

#[test]
#[should_panic(expected = "called `Outcome::error()` on a `Success` value")]
fn error_on_success_panics() {
    Outcome::<i32, &str>::success(5).error();
}

#[test]
fn from_option_pairs_absence_with_the_supplied_fault() {
    assert_eq!(
        Outcome::from_option(Some(5), "missing"),
        Outcome::success(5)
    );
    assert_eq!(
        Outcome::from_option(None::<i32>, "missing"),
        Outcome::failure("missing")
    );
}

#[test]
fn from_bare_option_attaches_the_unknown_fault() {
    let failed: Outcome<i32, UnknownFault> = Outcome::from(None);
    assert_eq!(failed, Outcome::failure(UnknownFault));
    assert_eq!(Outcome::from(Some(5)), Outcome::<i32, UnknownFault>::success(5));
}

#[test]
fn map_transforms_the_payload() {
    let ok: Outcome<i32, &str> = Outcome::success(5);
    assert_eq!(ok.map(|x| x * 2), Outcome::success(10));
}

#[test]
fn map_short_circuits_on_failure_preserving_the_fault() {
    let failed: Outcome<i32, String> = Outcome::failure(String::from("boom"));
    let forwarded = failed.map(|_| -> i32 { panic!("must not be invoked") });
    assert_eq!(forwarded.error(), "boom");
}

#[test]
fn and_then_flattens_a_chained_outcome() {
    fn positive(x: i32) -> Outcome<i32, &'static str> {
        if x > 0 {
            Outcome::success(x)
        } else {
            Outcome::failure("not positive")
        }
    }

    assert_eq!(Outcome::success(5).and_then(positive), Outcome::success(5));
    assert_eq!(
        Outcome::success(-5).and_then(positive),
        Outcome::failure("not positive")
    );
}

#[test]
fn and_then_short_circuits_on_failure() {
    let failed: Outcome<i32, &str> = Outcome::failure("boom");
    let forwarded =
        failed.and_then(|_| -> Outcome<i32, &str> { panic!("must not be invoked") });
    assert_eq!(forwarded, Outcome::failure("boom"));
}

#[test]
fn map_failure_transforms_only_the_fault() {
    let failed: Outcome<i32, u32> = Outcome::failure(404);
    assert_eq!(
        failed.map_failure(|code| format!("HTTP {code}")),
        Outcome::failure(String::from("HTTP 404"))
    );

    let ok: Outcome<i32, u32> = Outcome::success(1);
    assert_eq!(ok.map_failure(|code| format!("HTTP {code}")), Outcome::success(1));
}

#[test]
fn recover_replaces_a_failure_and_leaves_success_alone() {
    let failed: Outcome<i32, &str> = Outcome::failure("down");
    assert_eq!(failed.recover(|_| Outcome::success(0)), Outcome::success(0));

    let ok: Outcome<i32, &str> = Outcome::success(5);
    assert_eq!(ok.recover(|_| Outcome::success(0)), Outcome::success(5));
}

#[test]
fn inspect_runs_exactly_once_on_success_and_returns_the_receiver() {
    let calls = Cell::new(0);
    let ok: Outcome<i32, &str> = Outcome::success(5);
    let unchanged = ok.inspect(|x| {
        calls.set(calls.get() + 1);
        assert_eq!(*x, 5);
    });
    assert_eq!(calls.get(), 1);
    assert_eq!(unchanged, Outcome::success(5));
}

#[test]
fn inspect_is_a_no_op_on_failure() {
    let failed: Outcome<i32, &str> = Outcome::failure("boom");
    let unchanged = failed.inspect(|_| panic!("must not be invoked"));
    assert_eq!(unchanged, Outcome::failure("boom"));
}

#[test]
fn inspect_failure_runs_exactly_once_on_failure() {
    let calls = Cell::new(0);
    let failed: Outcome<i32, &str> = Outcome::failure("boom");
    let unchanged = failed.inspect_failure(|e| {
        calls.set(calls.get() + 1);
        assert_eq!(*e, "boom");
    });
    assert_eq!(calls.get(), 1);
    assert_eq!(unchanged, Outcome::failure("boom"));
}

#[test]
fn inspect_failure_is_a_no_op_on_success() {
    let ok: Outcome<i32, &str> = Outcome::success(5);
    let unchanged = ok.inspect_failure(|_| panic!("must not be invoked"));
    assert_eq!(unchanged, Outcome::success(5));
}

#[test]
fn into_status_discards_the_payload_and_keeps_the_fault() {
    let ok: Outcome<i32, &str> = Outcome::success(5);
    assert_eq!(ok.into_status(), Status::success());

    let failed: Outcome<i32, &str> = Outcome::failure("boom");
    assert_eq!(failed.into_status(), Status::failure("boom"));
}

#[test]
fn log_failure_returns_the_receiver_unchanged() {
    let failed: Outcome<i32, &str> = Outcome::failure("boom");
    assert_eq!(failed.log_failure(), Outcome::failure("boom"));

    let ok: Outcome<i32, &str> = Outcome::success(5);
    assert_eq!(ok.log_failure(), Outcome::success(5));
}
