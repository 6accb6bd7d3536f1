//! Side-by-side walkthrough of the same pipeline written twice: once with
//! early-exit errors, once with `Optional` chaining.
//!
//! Both take the first element of a sequence, double it and invert it.

use anyhow::{bail, ensure, Result};

use crate::functions::{absent, from_nullable, present};
use crate::optional::Optional;

pub const EMPTY_MESSAGE: &str = "The array is empty";
pub const NO_RESULT_MESSAGE: &str = "no result";

pub fn double(n: f64) -> f64 {
    n * 2.0
}

/// First element of `items`, absent for an empty slice.
pub fn head<A: Clone>(items: &[A]) -> Optional<A> {
    from_nullable(items.first().cloned())
}

/// `1 / x`, absent for zero.
pub fn inverse(x: f64) -> Optional<f64> {
    if x == 0.0 {
        absent()
    } else {
        present(1.0 / x)
    }
}

pub fn functional(items: &[f64]) -> String {
    head(items)
        .map(double)
        .flat_map(inverse)
        .match_with(
            |x| format!("The first element is {}", x),
            || EMPTY_MESSAGE.to_string(),
        )
}

pub fn imperative(items: &[f64]) -> String {
    fn head(items: &[f64]) -> Result<f64> {
        match items.first() {
            Some(first) => Ok(*first),
            None => bail!("empty sequence"),
        }
    }

    fn inverse(n: f64) -> Result<f64> {
        ensure!(n != 0.0, "cannot invert zero");
        Ok(1.0 / n)
    }

    match head(items).map(double).and_then(inverse) {
        Ok(x) => format!("Result is {}", x),
        Err(_) => NO_RESULT_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head() {
        assert_eq!(head(&[1, 2, 3]), Optional::Present(1));
        assert_eq!(head::<i32>(&[]), Optional::Absent);
    }

    #[test]
    fn test_inverse() {
        assert_eq!(inverse(4.0), Optional::Present(0.25));
        assert_eq!(inverse(0.0), Optional::Absent);
        assert_eq!(inverse(-0.0), Optional::Absent);
    }

    #[test]
    fn test_double() {
        assert_eq!(double(1.5), 3.0);
    }
}
