//! Assertions that report failures through a [`TestContext`].
//!
//! Every assertion marks itself as a helper, evaluates its condition and
//! returns silently on success. On failure it logs the failure message, logs
//! the caller's diagnostics as a further line when there are any, and fails
//! the test with [`TestContext::fail_now`].

mod equal;
mod error;
mod nil;
mod truth;

pub use equal::{are_equal, are_equal_sequence};
pub use error::{is_error, is_not_error};
pub use nil::{is_nil, is_not_nil};
pub use truth::is_true;

use std::panic::Location;

use tracing::warn;

use crate::config::Settings;
use crate::context::TestContext;
use crate::diagnostics::Diagnostics;
use crate::error::ExpectationError;

#[track_caller]
fn report<C>(ctx: &mut C, outcome: Result<(), ExpectationError>, diagnostics: Diagnostics<'_>)
where
    C: TestContext + ?Sized,
{
    let Err(failure) = outcome else {
        return;
    };

    if Settings::global().trace_failures {
        warn!(
            assertion = failure.kind(),
            location = %Location::caller(),
            message = %failure,
            "expectation not met"
        );
    }

    ctx.log_fmt(format_args!("{}", failure));
    if let Some(line) = diagnostics.render() {
        ctx.log(&line);
    }
    ctx.fail_now();
}
