//! Variadic-style call shapes for the assertions.
//!
//! Every assertion macro takes the context and operands, optionally followed
//! by diagnostics in one of two shapes:
//!
//! * `, "format {}", args...` for a format string with arguments
//! * `; value, value, ...` for values concatenated without separators, even
//!   between two numbers

/// Builds [`Diagnostics`](crate::Diagnostics) from either call shape.
#[macro_export]
macro_rules! diagnostics {
    () => {
        $crate::Diagnostics::None
    };
    (; $($value:expr),+ $(,)?) => {
        $crate::Diagnostics::Values(&[$(&$value as &dyn ::core::fmt::Display),+])
    };
    ($($fmt:tt)+) => {
        $crate::Diagnostics::Format(::core::format_args!($($fmt)+))
    };
}

/// Fails the test unless the option is `None`.
#[macro_export]
macro_rules! is_nil {
    ($ctx:expr, $value:expr $(,)?) => {
        $crate::assertions::is_nil($ctx, $value, $crate::Diagnostics::None)
    };
    ($ctx:expr, $value:expr; $($diag:tt)+) => {
        $crate::assertions::is_nil($ctx, $value, $crate::diagnostics!(; $($diag)+))
    };
    ($ctx:expr, $value:expr, $($diag:tt)+) => {
        $crate::assertions::is_nil($ctx, $value, $crate::diagnostics!($($diag)+))
    };
}

/// Fails the test unless the option is `Some`.
#[macro_export]
macro_rules! is_not_nil {
    ($ctx:expr, $value:expr $(,)?) => {
        $crate::assertions::is_not_nil($ctx, $value, $crate::Diagnostics::None)
    };
    ($ctx:expr, $value:expr; $($diag:tt)+) => {
        $crate::assertions::is_not_nil($ctx, $value, $crate::diagnostics!(; $($diag)+))
    };
    ($ctx:expr, $value:expr, $($diag:tt)+) => {
        $crate::assertions::is_not_nil($ctx, $value, $crate::diagnostics!($($diag)+))
    };
}

/// Fails the test unless the error matches the sentinel.
#[macro_export]
macro_rules! is_error {
    ($ctx:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::assertions::is_error($ctx, $expected, $actual, $crate::Diagnostics::None)
    };
    ($ctx:expr, $expected:expr, $actual:expr; $($diag:tt)+) => {
        $crate::assertions::is_error($ctx, $expected, $actual, $crate::diagnostics!(; $($diag)+))
    };
    ($ctx:expr, $expected:expr, $actual:expr, $($diag:tt)+) => {
        $crate::assertions::is_error($ctx, $expected, $actual, $crate::diagnostics!($($diag)+))
    };
}

/// Fails the test if there is an error.
#[macro_export]
macro_rules! is_not_error {
    ($ctx:expr, $actual:expr $(,)?) => {
        $crate::assertions::is_not_error($ctx, $actual, $crate::Diagnostics::None)
    };
    ($ctx:expr, $actual:expr; $($diag:tt)+) => {
        $crate::assertions::is_not_error($ctx, $actual, $crate::diagnostics!(; $($diag)+))
    };
    ($ctx:expr, $actual:expr, $($diag:tt)+) => {
        $crate::assertions::is_not_error($ctx, $actual, $crate::diagnostics!($($diag)+))
    };
}

/// Fails the test unless both values are equal.
#[macro_export]
macro_rules! are_equal {
    ($ctx:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::assertions::are_equal($ctx, $expected, $actual, $crate::Diagnostics::None)
    };
    ($ctx:expr, $expected:expr, $actual:expr; $($diag:tt)+) => {
        $crate::assertions::are_equal($ctx, $expected, $actual, $crate::diagnostics!(; $($diag)+))
    };
    ($ctx:expr, $expected:expr, $actual:expr, $($diag:tt)+) => {
        $crate::assertions::are_equal($ctx, $expected, $actual, $crate::diagnostics!($($diag)+))
    };
}

/// Fails the test unless both sequences have the same length and elements.
#[macro_export]
macro_rules! are_equal_sequence {
    ($ctx:expr, $expected:expr, $actual:expr $(,)?) => {
        $crate::assertions::are_equal_sequence($ctx, $expected, $actual, $crate::Diagnostics::None)
    };
    ($ctx:expr, $expected:expr, $actual:expr; $($diag:tt)+) => {
        $crate::assertions::are_equal_sequence(
            $ctx,
            $expected,
            $actual,
            $crate::diagnostics!(; $($diag)+),
        )
    };
    ($ctx:expr, $expected:expr, $actual:expr, $($diag:tt)+) => {
        $crate::assertions::are_equal_sequence(
            $ctx,
            $expected,
            $actual,
            $crate::diagnostics!($($diag)+),
        )
    };
}

/// Fails the test unless the expression is `true`.
#[macro_export]
macro_rules! is_true {
    ($ctx:expr, $expression:expr $(,)?) => {
        $crate::assertions::is_true($ctx, $expression, $crate::Diagnostics::None)
    };
    ($ctx:expr, $expression:expr; $($diag:tt)+) => {
        $crate::assertions::is_true($ctx, $expression, $crate::diagnostics!(; $($diag)+))
    };
    ($ctx:expr, $expression:expr, $($diag:tt)+) => {
        $crate::assertions::is_true($ctx, $expression, $crate::diagnostics!($($diag)+))
    };
}
