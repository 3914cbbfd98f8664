//! Trailing diagnostic arguments appended to failure messages.

use std::fmt::{self, Display, Write};

/// Extra context supplied by the caller of an assertion.
///
/// Nothing is rendered unless the assertion fails. Build one with the
/// [`diagnostics!`](crate::diagnostics!) macro or through the assertion
/// macros, which accept both call shapes:
///
/// ```
/// let mut t = is::Recorder::new();
/// let attempts = 3;
/// is::is_true!(&mut t, attempts < 3, "gave up after {} attempts", attempts);
/// is::is_true!(&mut t, attempts < 3; "expected ", attempts, " to be below 3");
/// assert!(t.message().contains("expected 3 to be below 3"));
/// ```
#[derive(Clone, Copy, Default)]
pub enum Diagnostics<'a> {
    /// No diagnostics were supplied.
    #[default]
    None,
    /// A format string with its arguments.
    Format(fmt::Arguments<'a>),
    /// A bag of values concatenated without separators.
    ///
    /// Each value is written with its `Display` implementation and nothing is
    /// inserted between them, so adjacent numbers run together: `1, 2`
    /// renders as `12`. Put the spacing into string operands, as in
    /// `"expected ", 123, " to be valid"`.
    Values(&'a [&'a dyn Display]),
}

impl<'a> Diagnostics<'a> {
    pub fn none() -> Self {
        Diagnostics::None
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Diagnostics::None => true,
            Diagnostics::Format(_) => false,
            Diagnostics::Values(values) => values.is_empty(),
        }
    }

    /// The rendered line, or `None` when nothing was supplied.
    pub fn render(&self) -> Option<String> {
        match self {
            Diagnostics::None => None,
            Diagnostics::Format(args) => Some(args.to_string()),
            Diagnostics::Values([]) => None,
            Diagnostics::Values(values) => {
                let mut line = String::new();
                for value in values.iter() {
                    // Writing into a String cannot fail.
                    let _ = write!(line, "{}", value);
                }
                Some(line)
            }
        }
    }
}

impl fmt::Debug for Diagnostics<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render() {
            Some(line) => f.debug_tuple("Diagnostics").field(&line).finish(),
            None => f.write_str("Diagnostics(None)"),
        }
    }
}

impl<'a> From<fmt::Arguments<'a>> for Diagnostics<'a> {
    fn from(args: fmt::Arguments<'a>) -> Self {
        Diagnostics::Format(args)
    }
}

impl<'a> From<&'a [&'a dyn Display]> for Diagnostics<'a> {
    fn from(values: &'a [&'a dyn Display]) -> Self {
        Diagnostics::Values(values)
    }
}
