use super::report;
use crate::check;
use crate::context::TestContext;
use crate::diagnostics::Diagnostics;

/// Fails the test unless `expression` is `true`.
#[track_caller]
pub fn is_true<C>(ctx: &mut C, expression: bool, diagnostics: Diagnostics<'_>)
where
    C: TestContext + ?Sized,
{
    ctx.helper();
    report(ctx, check::truth(expression), diagnostics);
}
