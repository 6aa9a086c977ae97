//! Call-site capture
//!
//! Locations are captured through `#[track_caller]`. Every function on the path
//! from a public entry point down to [`Location::caller`] must carry the attribute,
//! otherwise the recorded site points into this crate instead of user code.

use std::fmt;

/// A single point in source code: function, file and line
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    function: String,
    file: String,
    line: u32,
}

impl Location {
    /// Create a location from its parts
    pub fn new(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            function: function.into(),
            file: file.into(),
            line,
        }
    }

    /// Capture the location of the first caller outside the `#[track_caller]` chain
    ///
    /// The function name is resolved from debug symbols when the `function-names`
    /// feature is enabled, and left empty when no matching frame can be found.
    /// A call inside a closure is named after the function defining the closure.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        let site = std::panic::Location::caller();
        Self {
            function: resolve_function(site.file(), site.line()),
            file: site.file().to_string(),
            line: site.line(),
        }
    }

    /// Name of the enclosing function, empty when unknown
    #[must_use]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Source file path as reported by the compiler
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Line number, starting at 1
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}@{}:{}]", self.function, self.file, self.line)
    }
}

/// Find the symbol whose debug info points at `file:line`
#[cfg(feature = "function-names")]
fn resolve_function(file: &str, line: u32) -> String {
    let mut function = String::new();
    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if !function.is_empty() || symbol.lineno() != Some(line) {
                return;
            }
            let matches = symbol
                .filename()
                .is_some_and(|path| path.ends_with(file));
            if matches {
                if let Some(name) = symbol.name() {
                    // `{:#}` drops the trailing hash
                    function = trim_closures(&format!("{name:#}")).to_string();
                }
            }
        });
        function.is_empty()
    });
    function
}

#[cfg(not(feature = "function-names"))]
fn resolve_function(_file: &str, _line: u32) -> String {
    String::new()
}

/// Name of the function enclosing the macro call
///
/// Closures are folded into the function that defines them, the same way
/// [`Location::caller`] names them.
#[doc(hidden)]
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::error::location::trim_function_path(type_name_of(f))
    }};
}

#[doc(hidden)]
#[must_use]
pub fn trim_function_path(path: &str) -> &str {
    trim_closures(path.strip_suffix("::f").unwrap_or(path))
}

fn trim_closures(mut path: &str) -> &str {
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path
}

/// Capture a [`Location`] for the enclosing function at compile time
#[doc(hidden)]
#[macro_export]
macro_rules! here {
    () => {
        $crate::error::location::Location::new($crate::function_name!(), file!(), line!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_bracketed_site() {
        let location = Location::new("app::load", "src/app.rs", 42);
        assert_eq!(location.to_string(), "[app::load@src/app.rs:42]");
    }

    #[test]
    fn caller_reports_this_line() {
        let location = Location::caller();
        assert_eq!(location.line(), line!() - 1);
        assert!(location.file().ends_with("location.rs"));
    }

    #[test]
    fn trims_macro_helper_and_closures() {
        assert_eq!(trim_function_path("app::load::f"), "app::load");
        assert_eq!(
            trim_function_path("app::load::{{closure}}::{{closure}}::f"),
            "app::load"
        );
    }

    #[test]
    fn symbol_names_keep_functions_called_f() {
        assert_eq!(trim_closures("app::f::{{closure}}"), "app::f");
        assert_eq!(trim_closures("app::load"), "app::load");
    }

    #[test]
    fn here_names_enclosing_function() {
        let expected = line!() + 1;
        let location = here!();
        assert_eq!(location.line(), expected);
        assert!(location
            .function()
            .ends_with("tests::here_names_enclosing_function"));
    }
}
