use optional_value::comparison::{functional, head, imperative, inverse};
use optional_value::test_framework::STANDARD_CASES;
use optional_value::{test_suite, Optional};
use pretty_assertions::assert_eq;

test_suite! {
    scenario_first_element => STANDARD_CASES[0],
    scenario_empty => STANDARD_CASES[1],
    scenario_zero => STANDARD_CASES[2],
}

#[test]
fn test_first_element_pipeline_steps() {
    let first = head(&[1.0, 2.0, 3.0]);
    assert_eq!(first, Optional::Present(1.0));

    let doubled = first.map(|x| x * 2.0);
    assert_eq!(doubled, Optional::Present(2.0));

    assert_eq!(doubled.flat_map(inverse), Optional::Present(0.5));
}

#[test]
fn test_presence_lost_after_partial_step() {
    let first = head(&[0.0]);
    assert!(first.is_present());
    assert!(first.map(|x| x * 2.0).flat_map(inverse).is_absent());
}

#[test]
fn test_negative_and_fractional_inputs() {
    assert_eq!(functional(&[-2.0]), "The first element is -0.25");
    assert_eq!(imperative(&[0.25, 9.0]), "Result is 2");
}
