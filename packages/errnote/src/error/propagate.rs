//! Construction and propagation functions
//!
//! Each public function captures the caller's location itself and hands it to an
//! `*_at` variant. The macros call the `*_at` variants directly with a location
//! built at the macro call site, so neither path records a frame of this crate.

use super::location::Location;
use super::traits::{IntoFault, Predicate};
use super::types::{Error, Fault};

/// Create a root error located at the caller
#[track_caller]
#[must_use]
pub fn new(message: impl Into<String>) -> Error {
    Error::at(message, Location::caller())
}

/// Wrap `cause` in a new error that keeps it as its structured cause
///
/// No error in, no error out.
#[track_caller]
#[must_use]
pub fn wrap<F: IntoFault>(cause: Option<F>, message: impl Into<String>) -> Option<Error> {
    let cause = cause?;
    Some(Error::with_cause_at(
        cause.into_fault(),
        message,
        Location::caller(),
    ))
}

#[doc(hidden)]
#[must_use]
pub fn wrap_at<F: IntoFault>(cause: Option<F>, message: String, location: Location) -> Option<Error> {
    cause.map(|cause| Error::with_cause_at(cause.into_fault(), message, location))
}

/// Replace `cause` with a new error that carries its text but not its identity
///
/// [`cause`](super::cause) cannot recover the original error from the result.
#[track_caller]
#[must_use]
pub fn mask<F: IntoFault>(cause: Option<F>, message: impl Into<String>) -> Option<Error> {
    let cause = cause?.into_fault();
    Some(masked(cause, message.into(), Location::caller()))
}

#[doc(hidden)]
#[must_use]
pub fn mask_at<F: IntoFault>(cause: Option<F>, message: String, location: Location) -> Option<Error> {
    cause.map(|cause| masked(cause.into_fault(), message, location))
}

pub(super) fn masked(cause: Fault, message: String, location: Location) -> Error {
    tracing::trace!(
        error_type = cause.concrete_type_name(),
        "masking error identity"
    );
    Error::masking_at(cause.as_ref(), message, location)
}

/// Add context to `err` without changing its identity when it supports annotation
///
/// Errors that cannot be annotated are wrapped instead, so the result's cause is
/// the original error.
#[track_caller]
#[must_use]
pub fn note<F: IntoFault>(err: Option<F>, message: impl Into<String>) -> Option<Fault> {
    let err = err?.into_fault();
    Some(noted(err, message.into(), Location::caller()))
}

#[doc(hidden)]
#[must_use]
pub fn note_at<F: IntoFault>(err: Option<F>, message: String, location: Location) -> Option<Fault> {
    err.map(|err| noted(err.into_fault(), message, location))
}

pub(super) fn noted(mut err: Fault, message: String, location: Location) -> Fault {
    let annotated = match err.as_annotatable() {
        Some(target) => {
            target.annotate(&message, location.function(), location.file(), location.line());
            true
        }
        None => false,
    };
    if annotated {
        return err;
    }

    tracing::trace!(
        error_type = err.concrete_type_name(),
        "error is not annotatable, wrapping"
    );
    Box::new(Error::with_cause_at(err, message, location))
}

/// Note `err` if any predicate accepts it, mask it otherwise
///
/// Predicates run in order and evaluation stops at the first match. With no
/// predicates the error is always masked.
#[track_caller]
#[must_use]
pub fn pass<F: IntoFault>(
    err: Option<F>,
    message: impl Into<String>,
    predicates: &[Predicate<'_>],
) -> Option<Fault> {
    let err = err?.into_fault();
    Some(passed(err, message.into(), predicates, Location::caller()))
}

#[doc(hidden)]
#[must_use]
pub fn pass_at<F: IntoFault>(
    err: Option<F>,
    message: String,
    predicates: &[Predicate<'_>],
    location: Location,
) -> Option<Fault> {
    err.map(|err| passed(err.into_fault(), message, predicates, location))
}

pub(super) fn passed(err: Fault, message: String, predicates: &[Predicate<'_>], location: Location) -> Fault {
    match predicates.iter().position(|accepts| accepts(err.as_ref())) {
        Some(index) => {
            tracing::trace!(predicate = index, "passing error identity through");
            noted(err, message, location)
        }
        None => Box::new(masked(err, message, location)),
    }
}
