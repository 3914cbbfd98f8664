//! A test context that records everything and never stops the test.

use crate::context::TestContext;

/// Records helper marks, logged lines and failure without halting.
///
/// Each logged line is appended to [`message`](Recorder::message) followed
/// by a newline.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Recorder {
    helper_called: bool,
    message: String,
    failed: bool,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any assertion marked itself as a helper.
    pub fn helper_called(&self) -> bool {
        self.helper_called
    }

    /// Everything logged so far.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Logged lines without their terminators.
    pub fn lines(&self) -> Vec<&str> {
        self.message.lines().collect()
    }

    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Forgets everything recorded so the recorder can be reused.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl TestContext for Recorder {
    fn helper(&mut self) {
        self.helper_called = true;
    }

    fn log(&mut self, line: &str) {
        self.message.push_str(line);
        self.message.push('\n');
    }

    fn fail_now(&mut self) {
        self.failed = true;
    }
}
