//! Chain traversal helpers

use super::traits::Failure;

/// The structured cause of `err`
///
/// Returns `(None, false)` for no error. When `err` can report a cause the flag
/// is `true`, even if the reported cause is `None`. Otherwise `err` is its own
/// end of the chain and comes back with the flag `false`.
#[must_use]
pub fn cause(err: Option<&dyn Failure>) -> (Option<&dyn Failure>, bool) {
    let Some(err) = err else {
        return (None, false);
    };
    match err.as_caused() {
        Some(caused) => (caused.cause(), true),
        None => (Some(err), false),
    }
}

/// Detailed rendering of `err`
///
/// Falls back to the short rendering when `err` has no detailed trace, and to an
/// empty string for no error.
#[must_use]
pub fn details(err: Option<&dyn Failure>) -> String {
    let Some(err) = err else {
        return String::new();
    };
    match err.as_detailed() {
        Some(detailed) => detailed.details(),
        None => err.to_string(),
    }
}

/// Iterate over `err` and every structured cause below it
///
/// Stops at the first error that cannot report a cause or reports none.
pub fn chain(err: &dyn Failure) -> Chain<'_> {
    Chain { next: Some(err) }
}

/// Iterator returned by [`chain`]
#[derive(Debug)]
pub struct Chain<'a> {
    next: Option<&'a dyn Failure>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a dyn Failure;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = match cause(Some(current)) {
            (next, true) => next,
            (_, false) => None,
        };
        Some(current)
    }
}

/// The deepest error reachable through structured causes
#[must_use]
pub fn root_cause(err: &dyn Failure) -> &dyn Failure {
    let mut root = err;
    for link in chain(err) {
        root = link;
    }
    root
}
