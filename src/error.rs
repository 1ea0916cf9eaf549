//! Error types and utilities.

pub use failure::Error;
use failure::*;

/// Either `Ok(T)` or `Err(failure::Error)`.
pub type Result<T> = ::std::result::Result<T, failure::Error>;

/// A link contract violation.
#[derive(Clone, Eq, PartialEq, Debug, Fail)]
pub enum LinkError {
    /// A link was constructed with no relation at all.
    #[fail(display = "Expected at least one relation but given none")]
    MissingRelation,

    /// Given a value of the wrong shape for the named parameter.
    #[fail(display = "Expected a non-empty string for `{}`", _0)]
    InvalidArgument(&'static str),
}
