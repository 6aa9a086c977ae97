//! Core error types and definitions

use super::annotation::Annotation;
use super::location::Location;
use super::traits::Failure;
use thiserror::Error as ThisError;

/// A boxed error of any type taking part in chaining
pub type Fault = Box<dyn Failure>;

/// Chained error with call-site context
///
/// Holds its own message and location, an optional structured cause, and the
/// annotations added while it travelled up the call stack. The cause is fixed at
/// construction; annotations only ever grow.
#[derive(Debug)]
pub struct Error {
    pub(super) message: String,
    pub(super) location: Option<Location>,
    pub(super) cause: Option<Fault>,
    pub(super) annotations: Vec<Annotation>,
}

/// A message-only error with no capabilities
///
/// Behaves like an error from a library that knows nothing about chaining:
/// `note` wraps it instead of annotating it.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("{0}")]
pub struct Message(pub String);

impl Message {
    /// Create a message error
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl Failure for Message {}

/// Adapter giving any standard error a place in a chain
#[derive(Debug, ThisError)]
#[error(transparent)]
pub struct Foreign<E>(pub E);

impl<E> Foreign<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    /// Take the wrapped error back
    pub fn into_inner(self) -> E {
        self.0
    }
}

impl<E> Failure for Foreign<E> where E: std::error::Error + Send + Sync + 'static {}

macro_rules! plain_failure {
    ($($ty:ty),* $(,)?) => {
        $(impl Failure for $ty {})*
    };
}

plain_failure!(
    std::io::Error,
    std::fmt::Error,
    std::num::ParseIntError,
    std::num::ParseFloatError,
    std::str::ParseBoolError,
    std::str::Utf8Error,
    std::string::FromUtf8Error,
);

/// Result type alias using our Error
pub type Result<T, E = Error> = std::result::Result<T, E>;
