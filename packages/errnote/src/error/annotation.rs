//! Context messages attached to an existing error

use super::location::Location;
use std::fmt;

/// A message tied to the place in source code where it was added
///
/// An empty message still records its location. It is left out of the short
/// rendering and kept in the detailed one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    message: String,
    location: Location,
}

impl Annotation {
    /// Create an annotation
    pub fn new(message: impl Into<String>, location: Location) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }

    /// The annotation text, possibly empty
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where the annotation was added
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Detailed rendering: location followed by the message
    #[must_use]
    pub fn details(&self) -> String {
        format!("{} {}", self.location, self.message)
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_short_and_detailed() {
        let annotation = Annotation::new("while loading", Location::new("app::run", "src/app.rs", 7));
        assert_eq!(annotation.to_string(), "while loading");
        assert_eq!(annotation.details(), "[app::run@src/app.rs:7] while loading");
    }

    #[test]
    fn empty_message_keeps_location() {
        let annotation = Annotation::new("", Location::new("app::run", "src/app.rs", 9));
        assert_eq!(annotation.to_string(), "");
        assert_eq!(annotation.details(), "[app::run@src/app.rs:9] ");
    }
}
