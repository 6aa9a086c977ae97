//! Macros for error creation and propagation with format arguments
//!
//! Every macro records the file, line and enclosing function of its own call site.

/// Build a message: format arguments are substituted, a lone non-literal is used verbatim
#[doc(hidden)]
#[macro_export]
macro_rules! __message {
    ($msg:literal $(,)?) => {
        ::std::format!($msg)
    };
    ($msg:expr $(,)?) => {
        ::std::string::String::from($msg)
    };
    ($fmt:expr, $($arg:tt)+) => {
        ::std::format!($fmt, $($arg)+)
    };
}

/// Create a root [`Error`](crate::Error)
///
/// ```
/// let path = "/etc/app.toml";
/// let err = errnote::new!("config missing at {}", path);
/// assert_eq!(err.to_string(), "config missing at /etc/app.toml");
/// ```
#[macro_export]
macro_rules! new {
    ($($arg:tt)+) => {
        $crate::Error::at($crate::__message!($($arg)+), $crate::here!())
    };
}

/// Wrap an optional cause, see [`wrap`](crate::wrap)
#[macro_export]
macro_rules! wrap {
    ($cause:expr, $($arg:tt)+) => {
        $crate::error::propagate::wrap_at($cause, $crate::__message!($($arg)+), $crate::here!())
    };
}

/// Mask an optional cause, see [`mask`](crate::mask)
#[macro_export]
macro_rules! mask {
    ($cause:expr, $($arg:tt)+) => {
        $crate::error::propagate::mask_at($cause, $crate::__message!($($arg)+), $crate::here!())
    };
}

/// Annotate or wrap an optional error, see [`note`](crate::note)
#[macro_export]
macro_rules! note {
    ($err:expr, $($arg:tt)+) => {
        $crate::error::propagate::note_at($err, $crate::__message!($($arg)+), $crate::here!())
    };
}

/// Note or mask an optional error depending on predicates, see [`pass`](crate::pass)
///
/// ```
/// use errnote::{Failure, Message};
///
/// let is_message = |err: &dyn Failure| err.is::<Message>();
/// let passed = errnote::pass!(Some(Message::new("gone")), "lookup", is_message);
/// assert_eq!(passed.map(|err| err.to_string()).as_deref(), Some("lookup: gone"));
/// ```
#[macro_export]
macro_rules! pass {
    ($err:expr, $msg:expr $(, $predicate:expr)*) => {
        $crate::error::propagate::pass_at(
            $err,
            $crate::__message!($msg),
            &[$(&$predicate as $crate::Predicate<'_>),*],
            $crate::here!(),
        )
    };
}

/// Return early with a root error
#[macro_export]
macro_rules! bail {
    ($($arg:tt)+) => {
        return ::std::result::Result::Err($crate::new!($($arg)+).into())
    };
}

/// Return early with a root error unless a condition holds
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::bail!($($arg)+);
        }
    };
}
