//! The libtest host.
//!
//! Rust's built-in test harness has no context object: a test fails by
//! panicking. [`StdTest`] collects the logged lines and panics with them when
//! the test is failed, so the harness reports the full message at the
//! assertion's call site.

use tracing::error;

use crate::context::{Fatal, FatalContext};

/// Fails a libtest test by panicking with the message.
#[derive(Debug, Default, Clone, Copy)]
pub struct Panic;

impl Fatal for Panic {
    #[track_caller]
    fn fatal(&mut self, message: &str) {
        error!(%message, "test failed");
        panic!("{}", message);
    }
}

/// Test context for `#[test]` functions.
pub type StdTest = FatalContext<Panic>;

/// Creates a context for the current `#[test]` function.
///
/// ```should_panic
/// let mut t = is::std_test();
/// is::are_equal!(&mut t, 1, 2);
/// ```
pub fn std_test() -> StdTest {
    FatalContext::new(Panic)
}
