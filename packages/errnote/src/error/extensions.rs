//! Extension traits for propagating errors out of `Result` and `Option`
//!
//! `Ok` values pass through untouched; only the error side is wrapped, masked,
//! noted or passed, located at the method call.

use super::location::Location;
use super::propagate::{masked, noted, passed};
use super::traits::{IntoFault, Predicate};
use super::types::{Error, Fault};

/// Propagation helpers for any `Result` whose error is a [`Failure`](super::Failure)
pub trait ResultExt<T> {
    /// Wrap the error, keeping it as the structured cause
    fn wrap_err(self, message: impl Into<String>) -> Result<T, Error>;

    /// Replace the error with one that carries only its text
    fn mask_err(self, message: impl Into<String>) -> Result<T, Error>;

    /// Annotate the error, or wrap it when it cannot be annotated
    fn note_err(self, message: impl Into<String>) -> Result<T, Fault>;

    /// Note the error if a predicate accepts it, mask it otherwise
    fn pass_err(self, message: impl Into<String>, predicates: &[Predicate<'_>]) -> Result<T, Fault>;
}

impl<T, E: IntoFault> ResultExt<T> for Result<T, E> {
    #[track_caller]
    fn wrap_err(self, message: impl Into<String>) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::with_cause_at(
                err.into_fault(),
                message,
                Location::caller(),
            )),
        }
    }

    #[track_caller]
    fn mask_err(self, message: impl Into<String>) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(masked(err.into_fault(), message.into(), Location::caller())),
        }
    }

    #[track_caller]
    fn note_err(self, message: impl Into<String>) -> Result<T, Fault> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(noted(err.into_fault(), message.into(), Location::caller())),
        }
    }

    #[track_caller]
    fn pass_err(self, message: impl Into<String>, predicates: &[Predicate<'_>]) -> Result<T, Fault> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(passed(
                err.into_fault(),
                message.into(),
                predicates,
                Location::caller(),
            )),
        }
    }
}

/// Turn a missing value into an error
pub trait OptionExt<T> {
    /// `Some(value)` becomes `Ok(value)`, `None` a root error located at the caller
    fn ok_or_new(self, message: impl Into<String>) -> Result<T, Error>;
}

impl<T> OptionExt<T> for Option<T> {
    #[track_caller]
    fn ok_or_new(self, message: impl Into<String>) -> Result<T, Error> {
        match self {
            Some(value) => Ok(value),
            None => Err(Error::at(message, Location::caller())),
        }
    }
}
