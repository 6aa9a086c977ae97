//! Chained, annotated errors with call-site context
//!
//! Errors accumulate context as they travel up the call stack and can be rendered
//! as a single line or as a located trace:
//!
//! ```
//! use errnote::{Failure, Fault};
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("config not found")]
//! struct NotFound;
//!
//! impl Failure for NotFound {}
//!
//! fn read_config() -> Option<Fault> {
//!     errnote::wrap(Some(NotFound), "reading app.toml").map(Fault::from)
//! }
//!
//! fn start() -> Option<Fault> {
//!     // only "not found" keeps its identity, everything else is masked
//!     let keep = |err: &dyn Failure| matches!(errnote::cause(Some(err)).0, Some(c) if c.is::<NotFound>());
//!     errnote::pass(read_config(), "can't start", &[&keep])
//! }
//!
//! fn bootstrap() -> Option<Fault> {
//!     errnote::note(start(), "can't bootstrap")
//! }
//!
//! let err = bootstrap().map(|err| err.to_string());
//! assert_eq!(
//!     err.as_deref(),
//!     Some("can't bootstrap: can't start: reading app.toml: config not found")
//! );
//! ```
//!
//! An error value is annotated in place. Annotate a given value from one place at
//! a time; ownership already enforces this unless the value is shared, in which
//! case guard it with a `Mutex`.

pub mod error;

pub use error::*;
