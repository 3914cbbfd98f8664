//! Expectation checks that return instead of reporting.
//!
//! Each function evaluates the same condition as the assertion of the same
//! kind and describes a failure as an [`ExpectationError`]. They are useful on
//! their own in tests that return `Result`:
//!
//! ```
//! fn parses() -> Result<(), is::ExpectationError> {
//!     is::check::equal(&42, &"42".parse::<i32>().unwrap_or_default())?;
//!     is::check::truth("42".is_ascii())?;
//!     Ok(())
//! }
//! # parses().unwrap();
//! ```

use std::error::Error;
use std::fmt::Debug;

use crate::chain::{self, AsDynError};
use crate::error::ExpectationError;
use crate::render;

/// Checks that `value` is `None`.
pub fn nil<T: Debug>(value: &Option<T>) -> Result<(), ExpectationError> {
    match value {
        None => Ok(()),
        Some(inner) => Err(ExpectationError::NotNil {
            value: render::value(inner),
            type_name: render::type_name::<Option<T>>(),
        }),
    }
}

/// Checks that `value` is `Some`.
pub fn not_nil<T>(value: &Option<T>) -> Result<(), ExpectationError> {
    match value {
        Some(_) => Ok(()),
        None => Err(ExpectationError::Nil {
            type_name: render::type_name::<Option<T>>(),
        }),
    }
}

/// Checks that `actual` is, or wraps, an error equal to `expected`.
///
/// The actual type in the failure is the static type `A`, so a trait object
/// reports as `dyn Error`.
pub fn error<E, A>(expected: &E, actual: Option<&A>) -> Result<(), ExpectationError>
where
    E: Error + PartialEq + 'static,
    A: AsDynError + ?Sized,
{
    let (actual, actual_type) = match actual {
        Some(err) if chain::matches(expected, err.as_dyn_error()) => return Ok(()),
        Some(err) => (err.as_dyn_error().to_string(), render::type_name::<A>()),
        None => ("None".to_string(), render::type_name::<Option<&A>>()),
    };

    Err(ExpectationError::ErrorMismatch {
        expected: expected.to_string(),
        expected_type: render::type_name::<E>(),
        actual,
        actual_type,
    })
}

/// Checks that there is no error. The reported type is the static type `A`.
pub fn not_error<A>(actual: Option<&A>) -> Result<(), ExpectationError>
where
    A: AsDynError + ?Sized,
{
    match actual {
        None => Ok(()),
        Some(err) => Err(ExpectationError::UnexpectedError {
            actual: err.as_dyn_error().to_string(),
            actual_type: render::type_name::<A>(),
        }),
    }
}

/// Checks that `expected == actual`.
pub fn equal<T>(expected: &T, actual: &T) -> Result<(), ExpectationError>
where
    T: PartialEq + Debug + ?Sized,
{
    if expected == actual {
        return Ok(());
    }

    Err(ExpectationError::NotEqual {
        expected: render::value(expected),
        actual: render::value(actual),
        type_name: render::type_name::<T>(),
    })
}

/// Checks that both sequences have the same length and pairwise equal
/// elements, reporting the first mismatch.
pub fn equal_sequence<E>(expected: &[E], actual: &[E]) -> Result<(), ExpectationError>
where
    E: PartialEq + Debug,
{
    if expected.len() != actual.len() {
        return Err(ExpectationError::LengthMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }

    match expected.iter().zip(actual).position(|(e, a)| e != a) {
        None => Ok(()),
        Some(index) => Err(ExpectationError::ElementMismatch {
            expected: render::value(&expected[index]),
            actual: render::value(&actual[index]),
            type_name: render::type_name::<E>(),
            index,
        }),
    }
}

/// Checks that `expression` is `true`.
pub fn truth(expression: bool) -> Result<(), ExpectationError> {
    if expression {
        Ok(())
    } else {
        Err(ExpectationError::NotTrue)
    }
}
