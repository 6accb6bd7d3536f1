use thiserror::Error;

/// Contract violations raised by [`Optional`](crate::Optional).
///
/// Both kinds are programmer errors: they surface at the call site that
/// broke the contract and are never retried or logged by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionalError {
    #[error("present value must not be null-equivalent")]
    InvalidPresentValue,

    #[error("called get() on an absent value")]
    AbsentValueAccess,
}
