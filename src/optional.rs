use crate::error::OptionalError;

/// Either a value that is known and available, or no value at all.
///
/// `Optional` is closed: these two variants are the whole type. Every
/// operation consumes `self` and hands back a new value; nothing is ever
/// changed in place. Use [`Optional::as_ref`] to operate on a borrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    Present(T),
    Absent,
}

impl<T> Optional<T> {
    /// The absent value for any element type.
    pub const ABSENT: Self = Optional::Absent;

    /// Wraps a known-present value.
    #[inline]
    pub const fn present(value: T) -> Self {
        Optional::Present(value)
    }

    #[inline]
    pub const fn absent() -> Self {
        Optional::Absent
    }

    /// Applies `f` to the payload. `f` is not called when absent.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(value) => Optional::Present(f(value)),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Chains a step that may itself produce absence.
    pub fn flat_map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Present(value) => f(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Runs `f` on the payload for its side effect.
    pub fn for_each<F>(self, f: F)
    where
        F: FnOnce(T),
    {
        if let Optional::Present(value) = self {
            f(value);
        }
    }

    /// Total dispatch: exactly one of `present` or `absent` runs.
    pub fn match_with<U, P, A>(self, present: P, absent: A) -> U
    where
        P: FnOnce(T) -> U,
        A: FnOnce() -> U,
    {
        match self {
            Optional::Present(value) => present(value),
            Optional::Absent => absent(),
        }
    }

    /// Returns the payload, or `default` when absent. `default` is evaluated
    /// by the caller before the call; see [`Optional::get_or_else_with`].
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => default,
        }
    }

    /// Like [`Optional::get_or_else`], but only computes the default when absent.
    pub fn get_or_else_with<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => default(),
        }
    }

    /// Returns the payload.
    ///
    /// # Panics
    ///
    /// Panics with [`OptionalError::AbsentValueAccess`] if absent. Check
    /// [`Optional::is_present`] first, or use [`Optional::try_get`].
    #[track_caller]
    pub fn get(self) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => panic!("{}", OptionalError::AbsentValueAccess),
        }
    }

    pub fn try_get(self) -> Result<T, OptionalError> {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Absent => Err(OptionalError::AbsentValueAccess),
        }
    }

    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Optional::Absent)
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => Optional::Absent,
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Absent
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        crate::nullable::from_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Option<T> {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}
