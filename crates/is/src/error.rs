use thiserror::Error;

/// An expectation that was not met.
///
/// The `Display` output of each variant is the exact failure message an
/// assertion logs through the test context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpectationError {
    /// `is_nil` received a value.
    #[error("Expected nil, but got \"{value}\" (type {type_name})")]
    NotNil { value: String, type_name: String },

    /// `is_not_nil` received nothing.
    #[error("Expected not nil, but got nil (type {type_name})")]
    Nil { type_name: String },

    /// `is_error` got an error that does not match the sentinel.
    #[error("Expected \"{expected}\" (type {expected_type}), but got \"{actual}\" (type {actual_type})")]
    ErrorMismatch {
        expected: String,
        expected_type: String,
        actual: String,
        actual_type: String,
    },

    /// `is_not_error` got an error.
    #[error("Expected nil error, but got \"{actual}\" (type {actual_type})")]
    UnexpectedError { actual: String, actual_type: String },

    /// `are_equal` got two different values.
    #[error("Expected \"{expected}\", but got \"{actual}\" (type {type_name})")]
    NotEqual {
        expected: String,
        actual: String,
        type_name: String,
    },

    /// `are_equal_sequence` got sequences of different lengths.
    #[error("Expected slice of length {expected}, but got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// `are_equal_sequence` found the first differing element.
    #[error("Expected \"{expected}\", but got \"{actual}\" (type {type_name}) at index {index}")]
    ElementMismatch {
        expected: String,
        actual: String,
        type_name: String,
        index: usize,
    },

    /// `is_true` got `false`.
    #[error("Not true")]
    NotTrue,
}

impl ExpectationError {
    /// Short name of the expectation kind, used as a tracing field.
    pub fn kind(&self) -> &'static str {
        match self {
            ExpectationError::NotNil { .. } => "is_nil",
            ExpectationError::Nil { .. } => "is_not_nil",
            ExpectationError::ErrorMismatch { .. } => "is_error",
            ExpectationError::UnexpectedError { .. } => "is_not_error",
            ExpectationError::NotEqual { .. } => "are_equal",
            ExpectationError::LengthMismatch { .. } | ExpectationError::ElementMismatch { .. } => {
                "are_equal_sequence"
            }
            ExpectationError::NotTrue => "is_true",
        }
    }
}

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid type name style: {0} (expected \"short\" or \"full\")")]
    InvalidTypeNames(String),

    #[error("Invalid boolean for {key}: {value}")]
    InvalidBool { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates() {
        let err = ExpectationError::LengthMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), "Expected slice of length 3, but got 2");
        assert_eq!(err.kind(), "are_equal_sequence");

        let err = ExpectationError::ElementMismatch {
            expected: "3".to_string(),
            actual: "4".to_string(),
            type_name: "i32".to_string(),
            index: 2,
        };
        assert_eq!(
            err.to_string(),
            r#"Expected "3", but got "4" (type i32) at index 2"#
        );

        assert_eq!(ExpectationError::NotTrue.to_string(), "Not true");
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::InvalidBool {
            key: "IS_TRACE_FAILURES",
            value: "maybe".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid boolean for IS_TRACE_FAILURES: maybe");
    }
}
