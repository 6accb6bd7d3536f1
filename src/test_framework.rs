use crate::comparison::{functional, imperative};

pub struct TestCase {
    pub name: &'static str,
    pub input: &'static [f64],
    pub expected_functional: &'static str,
    pub expected_imperative: &'static str,
}

/// The three sequences the walkthrough is built around: a usual one, an
/// empty one, and one whose only element cannot be inverted.
pub const STANDARD_CASES: [TestCase; 3] = [
    TestCase {
        name: "first_element_inverted",
        input: &[1.0, 2.0, 3.0],
        expected_functional: "The first element is 0.5",
        expected_imperative: "Result is 0.5",
    },
    TestCase {
        name: "empty_sequence",
        input: &[],
        expected_functional: "The array is empty",
        expected_imperative: "no result",
    },
    TestCase {
        name: "zero_cannot_be_inverted",
        input: &[0.0],
        expected_functional: "The array is empty",
        expected_imperative: "no result",
    },
];

pub fn run_test(test: &TestCase) -> Result<(), String> {
    let actual = functional(test.input);
    if actual != test.expected_functional {
        return Err(format!(
            "{}: functional mismatch.\nExpected: {}\nGot: {}",
            test.name, test.expected_functional, actual
        ));
    }

    let actual = imperative(test.input);
    if actual != test.expected_imperative {
        return Err(format!(
            "{}: imperative mismatch.\nExpected: {}\nGot: {}",
            test.name, test.expected_imperative, actual
        ));
    }

    Ok(())
}

#[macro_export]
macro_rules! test_suite {
    ($($name:ident => $test:expr),* $(,)?) => {
        #[cfg(test)]
        mod generated_tests {
            use super::*;

            $(
                #[test]
                fn $name() {
                    if let Err(e) = $crate::test_framework::run_test(&$test) {
                        panic!("{}", e);
                    }
                }
            )*
        }
    };
}
