use outcome_rail::{EmptyValue, Maybe, Outcome};

#[test]
fn some_is_present_and_holds_the_value() {
    let maybe = Maybe::some(5);
    assert!(maybe.is_some());
    assert!(!maybe.is_none());
    assert_eq!(maybe.data(), 5);
}

#[test]
fn none_is_absent() {
    let maybe: Maybe<i32> = Maybe::none();
    assert!(maybe.is_none());
    assert!(!maybe.is_some());
}

#[test]
#[should_panic(expected = "called `Maybe::data()` on an `Absent` value")]
fn data_on_absent_panics() {
    Maybe::<i32>::none().data();
}

#[test]
fn from_option_adopts_presence_and_absence() {
    assert_eq!(Maybe::from_option(Some(7)), Maybe::some(7));
    assert!(Maybe::from_option(None::<i32>).is_none());
}

#[test]
fn map_transforms_a_present_value() {
    assert_eq!(Maybe::some(5).map(|x| x * 2), Maybe::some(10));
}

#[test]
fn map_short_circuits_on_absent_without_invoking_f() {
    let result = Maybe::<i32>::none().map(|_| panic!("must not be invoked"));
    assert!(result.is_none());
}

#[test]
fn and_then_flattens_nested_containers() {
    assert_eq!(
        Maybe::some(5).and_then(|x| Maybe::some(x * 2)),
        Maybe::some(10)
    );
    assert!(Maybe::some(5).and_then(|_| Maybe::<i32>::none()).is_none());
}

#[test]
fn and_then_short_circuits_on_absent() {
    let result = Maybe::<i32>::none().and_then(|_| -> Maybe<i32> { panic!("must not be invoked") });
    assert!(result.is_none());
}

#[test]
fn raw_option_returns_collapse_through_from_option() {
    // A transform yielding a bare Option is adapted at the call site.
    let collapsed = Maybe::some(5).and_then(|x| Maybe::from_option(u8::try_from(x).ok()));
    assert_eq!(collapsed, Maybe::some(5u8));

    let absent = Maybe::some(-1).and_then(|x| Maybe::from_option(u8::try_from(x).ok()));
    assert!(absent.is_none());
}

#[test]
fn into_outcome_promotes_present_to_success() {
    assert_eq!(Maybe::some(5).into_outcome(), Outcome::success(5));
}

#[test]
fn into_outcome_promotes_absent_to_empty_value_failure() {
    let outcome = Maybe::<i32>::none().into_outcome();
    assert_eq!(outcome, Outcome::failure(EmptyValue));
}

#[test]
fn into_outcome_or_attaches_the_supplied_fault() {
    let outcome = Maybe::<i32>::none().into_outcome_or("cache miss");
    assert_eq!(outcome.error(), "cache miss");
    assert_eq!(Maybe::some(3).into_outcome_or("cache miss").data(), 3);
}

#[test]
fn payload_may_itself_be_an_option() {
    // The tag tracks presence, so `None` is legitimate data.
    let maybe: Maybe<Option<u8>> = Maybe::some(None);
    assert!(maybe.is_some());
    assert_eq!(maybe.data(), None);
}

#[test]
fn as_ref_borrows_without_consuming() {
    let maybe = Maybe::some(String::from("hi"));
    assert_eq!(maybe.as_ref().map(|s| s.len()), Maybe::some(2));
    assert_eq!(maybe.data(), "hi");
}

#[test]
fn default_is_absent() {
    assert!(Maybe::<i32>::default().is_none());
}
