//! Capability contracts for errors that take part in chaining
//!
//! Any error type joins by implementing [`Failure`]. The three capabilities are
//! queried independently at runtime, so a third-party type may support any subset:
//!
//! ```
//! use errnote::{Caused, Failure};
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("lookup failed")]
//! struct Lookup {
//!     cause: Option<errnote::Fault>,
//! }
//!
//! impl Caused for Lookup {
//!     fn cause(&self) -> Option<&dyn Failure> {
//!         self.cause.as_deref()
//!     }
//! }
//!
//! impl Failure for Lookup {
//!     fn as_caused(&self) -> Option<&dyn Caused> {
//!         Some(self)
//!     }
//! }
//!
//! let err: errnote::Fault = Box::new(Lookup { cause: None });
//! let (_, found) = errnote::cause(Some(err.as_ref()));
//! assert!(found);
//! ```

use std::any::Any;

/// An error that can report the error which led to it
pub trait Caused {
    /// The structured cause, if one was recorded
    fn cause(&self) -> Option<&dyn Failure>;
}

/// An error that can collect context messages tied to source locations
///
/// Annotation mutates the error in place. A value must be annotated from one
/// place at a time; share it behind a `Mutex` if several threads need to.
pub trait Annotatable {
    /// Append a message recorded at `function` in `file:line`
    fn annotate(&mut self, message: &str, function: &str, file: &str, line: u32);
}

/// An error that can render a multi-line trace of its context
pub trait Detailed {
    /// Detailed rendering, one line per annotation and cause
    fn details(&self) -> String;
}

/// Type-erasure helpers for every `std::error::Error`
///
/// Implemented automatically; it lets `dyn Failure` downcast and upcast without
/// each error type writing the boilerplate.
#[doc(hidden)]
pub trait Erased: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
    fn as_std_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static);
    fn type_name(&self) -> &'static str;
}

impl<T> Erased for T
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn as_std_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// The dynamic error contract used throughout the crate
///
/// Every capability query defaults to "not supported". Override the ones the
/// type implements by returning `Some(self)`.
pub trait Failure: Erased + std::error::Error + Send + Sync + 'static {
    /// Cause-reporting capability
    fn as_caused(&self) -> Option<&dyn Caused> {
        None
    }

    /// Annotation capability
    fn as_annotatable(&mut self) -> Option<&mut dyn Annotatable> {
        None
    }

    /// Detailed-trace capability
    fn as_detailed(&self) -> Option<&dyn Detailed> {
        None
    }
}

impl dyn Failure {
    /// Whether the concrete type behind this error is `T`
    #[must_use]
    pub fn is<T: Failure>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Borrow the concrete error if it is a `T`
    #[must_use]
    pub fn downcast_ref<T: Failure>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Mutably borrow the concrete error if it is a `T`
    #[must_use]
    pub fn downcast_mut<T: Failure>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    /// Take ownership of the concrete error, or get the box back unchanged
    pub fn downcast<T: Failure>(self: Box<Self>) -> Result<Box<T>, Box<dyn Failure>> {
        if !self.is::<T>() {
            return Err(self);
        }
        match self.into_any().downcast::<T>() {
            Ok(concrete) => Ok(concrete),
            Err(_) => unreachable!("concrete type was checked above"),
        }
    }

    /// Name of the concrete error type
    #[must_use]
    pub fn concrete_type_name(&self) -> &'static str {
        self.type_name()
    }
}

/// Conversion into a boxed [`Failure`]
///
/// Lets the propagation functions accept either a concrete error or an already
/// boxed [`Fault`](super::Fault).
pub trait IntoFault {
    /// Box the error, keeping its concrete type
    fn into_fault(self) -> Box<dyn Failure>;
}

impl<E: Failure> IntoFault for E {
    fn into_fault(self) -> Box<dyn Failure> {
        Box::new(self)
    }
}

impl IntoFault for Box<dyn Failure> {
    fn into_fault(self) -> Box<dyn Failure> {
        self
    }
}

/// Decides whether an error may keep its identity in [`pass`](super::pass)
pub type Predicate<'a> = &'a dyn Fn(&dyn Failure) -> bool;
