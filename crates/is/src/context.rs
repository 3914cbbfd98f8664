//! The capability set an assertion needs from the running test.
//!
//! Hosts come in two styles. Log-then-fail hosts collect lines and are then
//! told to stop, which is what [`TestContext`] describes. Immediate-fatal
//! hosts take a single message and stop at once; they implement [`Fatal`]
//! and are adapted with [`FatalContext`].

use std::fmt;

/// Handle to the currently running test.
///
/// Assertions borrow the handle for one call and never keep it.
pub trait TestContext {
    /// Marks the calling function as a test helper.
    ///
    /// Rust attributes failure locations through `#[track_caller]`, so most
    /// hosts leave this as a no-op.
    fn helper(&mut self) {}

    /// Appends a line to the test log.
    fn log(&mut self, line: &str);

    /// Appends a formatted line to the test log.
    fn log_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.log(&args.to_string());
    }

    /// Marks the test as failed and stops it.
    ///
    /// Hosts that cannot unwind record the failure and return; the assertion
    /// then returns to the test without doing anything else.
    #[track_caller]
    fn fail_now(&mut self);
}

impl<C: TestContext + ?Sized> TestContext for &mut C {
    fn helper(&mut self) {
        (**self).helper();
    }

    fn log(&mut self, line: &str) {
        (**self).log(line);
    }

    fn log_fmt(&mut self, args: fmt::Arguments<'_>) {
        (**self).log_fmt(args);
    }

    #[track_caller]
    fn fail_now(&mut self) {
        (**self).fail_now();
    }
}

impl<C: TestContext + ?Sized> TestContext for Box<C> {
    fn helper(&mut self) {
        (**self).helper();
    }

    fn log(&mut self, line: &str) {
        (**self).log(line);
    }

    fn log_fmt(&mut self, args: fmt::Arguments<'_>) {
        (**self).log_fmt(args);
    }

    #[track_caller]
    fn fail_now(&mut self) {
        (**self).fail_now();
    }
}

/// A host that fails a test with one message and stops it immediately.
pub trait Fatal {
    fn helper(&mut self) {}

    /// Fails the test with `message` and stops it.
    #[track_caller]
    fn fatal(&mut self, message: &str);
}

/// Adapts a [`Fatal`] host to the log-then-fail [`TestContext`] shape.
///
/// Logged lines are buffered and handed to [`Fatal::fatal`], joined by
/// newlines, when the test is failed.
#[derive(Debug, Default)]
pub struct FatalContext<F> {
    host: F,
    lines: Vec<String>,
}

impl<F: Fatal> FatalContext<F> {
    pub fn new(host: F) -> Self {
        Self {
            host,
            lines: Vec::new(),
        }
    }

    /// Lines logged since the last failure.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn host(&self) -> &F {
        &self.host
    }

    pub fn into_host(self) -> F {
        self.host
    }
}

impl<F: Fatal> TestContext for FatalContext<F> {
    fn helper(&mut self) {
        self.host.helper();
    }

    fn log(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    #[track_caller]
    fn fail_now(&mut self) {
        let message = self.lines.join("\n");
        self.lines.clear();
        self.host.fatal(&message);
    }
}
