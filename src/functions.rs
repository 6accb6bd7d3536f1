//! Free-function forms of the [`Optional`] operations, for call sites that
//! read better as `get_or_else(x, 0)` than `x.get_or_else(0)`.

use crate::error::OptionalError;
use crate::optional::Optional;

pub use crate::nullable::{from_nullable, try_present};

#[inline]
pub const fn present<T>(value: T) -> Optional<T> {
    Optional::Present(value)
}

#[inline]
pub const fn absent<T>() -> Optional<T> {
    Optional::Absent
}

pub fn match_with<T, U, P, A>(optional: Optional<T>, present: P, absent: A) -> U
where
    P: FnOnce(T) -> U,
    A: FnOnce() -> U,
{
    optional.match_with(present, absent)
}

/// # Panics
///
/// Panics with [`OptionalError::AbsentValueAccess`] if `optional` is absent.
#[track_caller]
pub fn get_value<T>(optional: Optional<T>) -> T {
    optional.get()
}

pub fn try_get_value<T>(optional: Optional<T>) -> Result<T, OptionalError> {
    optional.try_get()
}

pub fn get_or_else<T>(optional: Optional<T>, default: T) -> T {
    optional.get_or_else(default)
}

pub fn get_or_else_with<T, F>(optional: Optional<T>, default: F) -> T
where
    F: FnOnce() -> T,
{
    optional.get_or_else_with(default)
}
