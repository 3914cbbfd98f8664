//! Shared helpers for the integration tests.

#![allow(dead_code)]

use thiserror::Error;

/// Initialize tracing for tests with a default configuration
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("is=debug")
        .with_test_writer()
        .try_init();
}

/// Name of `T` as failure messages print it under the active settings.
pub fn ty<T: ?Sized>() -> String {
    is::render::type_name::<T>()
}

/// Sentinel errors modelled on a reader's end-of-stream conditions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    #[error("EOF")]
    Eof,
    #[error("multiple Read calls return no data or error")]
    NoProgress,
}

/// An error that wraps a [`ReadError`].
#[derive(Debug, Error)]
#[error("reading {what}")]
pub struct ReadFailure {
    pub what: &'static str,
    #[source]
    pub cause: ReadError,
}
