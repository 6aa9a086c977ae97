//! Error constructors and accessors

use super::annotation::Annotation;
use super::location::Location;
use super::traits::Failure;
use super::types::{Error, Fault, Message};

impl Error {
    /// Create a root error located at the caller
    #[track_caller]
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self::at(message, Location::caller())
    }

    /// Create a root error at an explicit location
    #[must_use]
    pub fn at(message: impl Into<String>, location: Location) -> Self {
        Self {
            message: message.into(),
            location: Some(location),
            cause: None,
            annotations: Vec::new(),
        }
    }

    /// Create an error with no location
    ///
    /// Detailed rendering prints only the message for such an error.
    #[must_use]
    pub fn detached(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
            cause: None,
            annotations: Vec::new(),
        }
    }

    /// Create an error caused by `cause`, located at the caller
    #[track_caller]
    #[must_use]
    pub fn with_cause(cause: Fault, message: impl Into<String>) -> Self {
        Self::with_cause_at(cause, message, Location::caller())
    }

    /// Create an error caused by `cause` at an explicit location
    #[must_use]
    pub fn with_cause_at(cause: Fault, message: impl Into<String>, location: Location) -> Self {
        Self {
            message: message.into(),
            location: Some(location),
            cause: Some(cause),
            annotations: Vec::new(),
        }
    }

    /// Create an error carrying the text of `cause` but not the cause itself
    ///
    /// The message is `message: <cause>`, or the cause's text alone when
    /// `message` is empty.
    #[must_use]
    pub fn masking_at(cause: &dyn Failure, message: impl Into<String>, location: Location) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            cause.to_string()
        } else {
            format!("{message}: {cause}")
        };
        Self::at(message, location)
    }

    /// This error's own message, without annotations or cause
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where this error was created
    #[must_use]
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// The structured cause, if any
    #[must_use]
    pub fn cause(&self) -> Option<&dyn Failure> {
        self.cause.as_deref()
    }

    /// Annotations in the order they were added
    #[must_use]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Append an annotation recorded at `location`
    pub fn annotate_at(&mut self, message: impl Into<String>, location: Location) {
        self.annotations.push(Annotation::new(message, location));
    }
}

impl From<Error> for Fault {
    fn from(error: Error) -> Self {
        Box::new(error)
    }
}

impl From<Message> for Fault {
    fn from(error: Message) -> Self {
        Box::new(error)
    }
}
