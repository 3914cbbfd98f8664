use std::fmt::Debug;

use super::report;
use crate::check;
use crate::context::TestContext;
use crate::diagnostics::Diagnostics;

/// Fails the test unless `expected == actual`.
#[track_caller]
pub fn are_equal<C, T>(ctx: &mut C, expected: T, actual: T, diagnostics: Diagnostics<'_>)
where
    C: TestContext + ?Sized,
    T: PartialEq + Debug,
{
    ctx.helper();
    report(ctx, check::equal(&expected, &actual), diagnostics);
}

/// Fails the test unless both sequences have the same length and equal
/// elements.
///
/// A length mismatch is reported before any element is compared; otherwise
/// the first differing index is reported.
#[track_caller]
pub fn are_equal_sequence<C, E>(
    ctx: &mut C,
    expected: &[E],
    actual: &[E],
    diagnostics: Diagnostics<'_>,
) where
    C: TestContext + ?Sized,
    E: PartialEq + Debug,
{
    ctx.helper();
    report(ctx, check::equal_sequence(expected, actual), diagnostics);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::implementations::Recorder;

    #[derive(Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_are_equal_structs() {
        let mut t = Recorder::new();
        are_equal(
            &mut t,
            Point { x: 1, y: 2 },
            Point { x: 1, y: 3 },
            Diagnostics::None,
        );
        assert_eq!(
            t.lines(),
            vec![format!(
                r#"Expected "Point {{ x: 1, y: 2 }}", but got "Point {{ x: 1, y: 3 }}" (type {})"#,
                crate::render::type_name::<Point>()
            )]
        );
    }

    #[test]
    fn test_are_equal_sequence_vectors() {
        let mut t = Recorder::new();
        let expected = vec!["a", "b"];
        let actual = vec!["a", "b"];
        are_equal_sequence(&mut t, &expected, &actual, Diagnostics::None);
        are_equal_sequence(&mut t, &expected, &actual, Diagnostics::None);
        assert!(!t.failed());
        assert_eq!(t.message(), "");
    }
}
