//! The boundary where null-equivalent values enter the crate.
//!
//! Nothing outside this module inspects null-equivalence; everything past
//! [`from_nullable`] and [`try_present`] works with [`Optional`] alone.

use std::ptr::NonNull;

use crate::error::OptionalError;
use crate::optional::Optional;

/// A value that may stand for "nothing".
pub trait Nullable: Sized {
    /// What remains once the null case has been ruled out.
    type Value;

    fn is_null(&self) -> bool;

    fn into_value(self) -> Option<Self::Value>;
}

impl<T> Nullable for Option<T> {
    type Value = T;

    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn into_value(self) -> Option<T> {
        self
    }
}

impl<T> Nullable for *const T {
    type Value = NonNull<T>;

    #[inline]
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }

    #[inline]
    fn into_value(self) -> Option<NonNull<T>> {
        NonNull::new(self as *mut T)
    }
}

impl<T> Nullable for *mut T {
    type Value = NonNull<T>;

    #[inline]
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }

    #[inline]
    fn into_value(self) -> Option<NonNull<T>> {
        NonNull::new(self)
    }
}

/// Converts a possibly-null value: null becomes `Absent`, anything else
/// becomes `Present`.
pub fn from_nullable<N: Nullable>(value: N) -> Optional<N::Value> {
    match value.into_value() {
        Some(v) => Optional::Present(v),
        None => Optional::Absent,
    }
}

/// Builds a `Present` from a possibly-null value, refusing the null case.
pub fn try_present<N: Nullable>(value: N) -> Result<Optional<N::Value>, OptionalError> {
    value
        .into_value()
        .map(Optional::Present)
        .ok_or(OptionalError::InvalidPresentValue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_option_nullability() {
        assert!(Nullable::is_null(&None::<i32>));
        assert!(!Nullable::is_null(&Some(0)));
        assert_eq!(Some(3).into_value(), Some(3));
    }

    #[test]
    fn test_from_nullable_option() {
        assert_eq!(from_nullable(None::<&str>), Optional::Absent);
        assert_eq!(from_nullable(Some("x")), Optional::Present("x"));
    }

    #[test]
    fn test_from_nullable_keeps_falsy_values() {
        // zero, false and empty strings are values, not nulls
        assert!(from_nullable(Some(0)).is_present());
        assert!(from_nullable(Some(false)).is_present());
        assert!(from_nullable(Some(String::new())).is_present());
    }

    #[test]
    fn test_from_nullable_pointers() {
        let null: *const u8 = ptr::null();
        assert!(from_nullable(null).is_absent());

        let mut slot = 7u8;
        let raw: *mut u8 = &mut slot;
        let wrapped = from_nullable(raw);
        assert!(wrapped.is_present());
        assert_eq!(wrapped.get().as_ptr(), raw);
    }

    #[test]
    fn test_try_present() {
        assert_eq!(try_present(Some(1)), Ok(Optional::Present(1)));
        assert_eq!(
            try_present(None::<i32>),
            Err(OptionalError::InvalidPresentValue)
        );
        assert_eq!(
            try_present(ptr::null_mut::<i32>()),
            Err(OptionalError::InvalidPresentValue)
        );
    }
}
