use std::fmt::Debug;

use super::report;
use crate::check;
use crate::context::TestContext;
use crate::diagnostics::Diagnostics;

/// Fails the test unless `value` is `None`.
///
/// The failure names the type of the option, e.g. `Option<&i32>`.
#[track_caller]
pub fn is_nil<C, T>(ctx: &mut C, value: Option<T>, diagnostics: Diagnostics<'_>)
where
    C: TestContext + ?Sized,
    T: Debug,
{
    ctx.helper();
    report(ctx, check::nil(&value), diagnostics);
}

/// Fails the test unless `value` is `Some`.
#[track_caller]
pub fn is_not_nil<C, T>(ctx: &mut C, value: Option<T>, diagnostics: Diagnostics<'_>)
where
    C: TestContext + ?Sized,
{
    ctx.helper();
    report(ctx, check::not_nil(&value), diagnostics);
}
