//! Error handling with context propagation
//!
//! Provides the chained error model:
//! - Root, wrapped, masked and annotated errors
//! - Call-site capture for every construction and annotation
//! - Capability traits any error type can implement
//! - Short and detailed rendering of whole chains

pub mod annotation;
pub mod constructors;
pub mod display;
pub mod extensions;
pub mod location;
pub mod logging;
pub mod macros;
pub mod propagate;
pub mod traits;
pub mod traverse;
pub mod types;

// Re-export all public types and traits
pub use annotation::Annotation;
pub use extensions::{OptionExt, ResultExt};
pub use location::Location;
pub use logging::LoggingTransformer;
pub use propagate::{mask, new, note, pass, wrap};
pub use traits::{Annotatable, Caused, Detailed, Failure, IntoFault, Predicate};
pub use traverse::{cause, chain, details, root_cause, Chain};
pub use types::{Error, Fault, Foreign, Message, Result};
