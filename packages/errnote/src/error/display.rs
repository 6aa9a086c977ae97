//! Rendering and capability implementations for Error

use super::location::Location;
use super::traits::{Annotatable, Caused, Detailed, Failure};
use super::traverse;
use super::types::Error;
use std::fmt;

/// Short rendering: newest annotation first, then the message, then the cause,
/// joined with `": "`
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for annotation in self.annotations.iter().rev() {
            if !annotation.message().is_empty() {
                write!(f, "{annotation}: ")?;
            }
        }

        f.write_str(&self.message)?;

        if let Some(cause) = &self.cause {
            write!(f, ": {cause}")?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause.as_std_error() as &(dyn std::error::Error + 'static))
    }
}

impl Caused for Error {
    fn cause(&self) -> Option<&dyn Failure> {
        self.cause.as_deref()
    }
}

impl Annotatable for Error {
    fn annotate(&mut self, message: &str, function: &str, file: &str, line: u32) {
        self.annotate_at(message, Location::new(function, file, line));
    }
}

impl Detailed for Error {
    fn details(&self) -> String {
        let mut lines: Vec<String> = self
            .annotations
            .iter()
            .rev()
            .map(|annotation| annotation.details())
            .collect();

        lines.push(match &self.location {
            Some(location) => format!("{location} {}", self.message),
            None => self.message.clone(),
        });

        if let Some(cause) = self.cause.as_deref() {
            lines.push(traverse::details(Some(cause)));
        }

        lines.join("\n")
    }
}

impl Failure for Error {
    fn as_caused(&self) -> Option<&dyn Caused> {
        Some(self)
    }

    fn as_annotatable(&mut self) -> Option<&mut dyn Annotatable> {
        Some(self)
    }

    fn as_detailed(&self) -> Option<&dyn Detailed> {
        Some(self)
    }
}

impl Error {
    /// Detailed rendering, one line per annotation and per link of the cause chain
    #[must_use]
    pub fn details(&self) -> String {
        Detailed::details(self)
    }
}
