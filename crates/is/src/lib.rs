//! Minimal assertions for Rust tests.
//!
//! Each assertion takes a [`TestContext`] for the running test, checks one
//! expectation and, when it does not hold, logs a descriptive message that
//! includes the rendered values and their types before failing the test.
//!
//! ```
//! use is::{are_equal, is_nil, is_true, Recorder};
//!
//! let mut t = Recorder::new();
//! are_equal!(&mut t, "123", "234");
//! assert_eq!(t.lines(), vec![r#"Expected "123", but got "234" (type &str)"#]);
//!
//! let mut t = Recorder::new();
//! is_nil!(&mut t, Some(&1), "while checking {}", "the cache");
//! is_true!(&mut t, false; "expected ", 123, " to be valid");
//! assert!(t.failed());
//! ```
//!
//! In a plain `#[test]` function use [`std_test`], which panics with the
//! collected message at the assertion's call site.

#![forbid(unsafe_code)]

pub mod assertions;
pub mod chain;
pub mod check;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod host;
pub mod implementations;
pub mod render;

mod macros;

pub use assertions::{
    are_equal, are_equal_sequence, is_error, is_not_error, is_nil, is_not_nil, is_true,
};
pub use chain::AsDynError;
pub use config::{Settings, TypeNames};
pub use context::{Fatal, FatalContext, TestContext};
pub use diagnostics::Diagnostics;
pub use error::{ConfigError, ExpectationError};
pub use host::{std_test, Panic, StdTest};
pub use implementations::Recorder;
