use std::error::Error;

use super::report;
use crate::chain::AsDynError;
use crate::check;
use crate::context::TestContext;
use crate::diagnostics::Diagnostics;

/// Fails the test unless `actual` is `expected` or wraps it somewhere in its
/// source chain.
///
/// A missing error (`None`) never matches.
///
/// The type named in the failure is the static type of `A`. An actual passed
/// as `&dyn Error` is reported as `dyn Error`, not as the concrete type behind
/// the trait object; pass the concrete error when the type matters.
#[track_caller]
pub fn is_error<C, E, A>(
    ctx: &mut C,
    expected: &E,
    actual: Option<&A>,
    diagnostics: Diagnostics<'_>,
) where
    C: TestContext + ?Sized,
    E: Error + PartialEq + 'static,
    A: AsDynError + ?Sized,
{
    ctx.helper();
    report(ctx, check::error(expected, actual), diagnostics);
}

/// Fails the test if `actual` holds an error.
///
/// As with [`is_error`], the reported type is the static type of `A`.
#[track_caller]
pub fn is_not_error<C, A>(ctx: &mut C, actual: Option<&A>, diagnostics: Diagnostics<'_>)
where
    C: TestContext + ?Sized,
    A: AsDynError + ?Sized,
{
    ctx.helper();
    report(ctx, check::not_error(actual), diagnostics);
}
