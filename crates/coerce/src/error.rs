//! Coercion Error Types
//!
//! Absence is never an error: blank text and `None` sources map to `None` or
//! to a zero default. Everything in this module is a genuine failure that the
//! caller has to decide about (skip the record, reject it, ...).

use thiserror::Error;

/// Result type alias for coercion operations
pub type CoerceResult<T> = Result<T, CoerceError>;

// ============================================================================
// MAIN ERROR TYPE
// ============================================================================

/// Coercion failures
///
/// Every variant carries the raw text that caused it so that a rejected
/// record can be diagnosed without re-running the job.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoerceError {
    /// Non-blank text that is not a numeral for the target type
    #[error("Invalid {target} numeral: \"{input}\"")]
    InvalidNumeral { target: &'static str, input: String },

    /// Text rejected by the decimal parser
    #[error("Incorrect input \"{input}\" for decimal: {reason}")]
    MalformedDecimal { input: String, reason: String },

    /// Text that the date pattern could not fully consume
    #[error("Unparseable date: \"{input}\"")]
    UnparseableDate { input: String },

    /// Date pattern that could not be compiled
    #[error("Invalid date pattern \"{pattern}\": {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Infinite float, which has no decimal value
    #[error("Value {value} cannot be represented as a decimal")]
    DecimalOutOfRange { value: String },

    /// Configuration value that could not be understood
    #[error("Invalid configuration value for {key}: \"{value}\"")]
    InvalidConfig { key: &'static str, value: String },
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl CoerceError {
    /// Create an invalid numeral error
    pub fn invalid_numeral(target: &'static str, input: impl Into<String>) -> Self {
        Self::InvalidNumeral {
            target,
            input: input.into(),
        }
    }

    /// Create a malformed decimal error.
    ///
    /// An empty `reason` is replaced so the rendered message never ends in
    /// an empty clause.
    pub fn malformed_decimal(input: impl Into<String>, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self::MalformedDecimal {
            input: input.into(),
            reason: if reason.trim().is_empty() {
                "not a decimal literal".to_owned()
            } else {
                reason
            },
        }
    }

    /// Create an unparseable date error
    pub fn unparseable_date(input: impl Into<String>) -> Self {
        Self::UnparseableDate {
            input: input.into(),
        }
    }

    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Create a decimal range error
    pub fn decimal_out_of_range(value: impl ToString) -> Self {
        Self::DecimalOutOfRange {
            value: value.to_string(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(key: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// ERROR CLASSIFICATION
// ============================================================================

impl CoerceError {
    /// Get error code for monitoring
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidNumeral { .. } => "COERCE_INVALID_NUMERAL",
            Self::MalformedDecimal { .. } => "COERCE_MALFORMED_DECIMAL",
            Self::UnparseableDate { .. } => "COERCE_UNPARSEABLE_DATE",
            Self::InvalidPattern { .. } => "COERCE_INVALID_PATTERN",
            Self::DecimalOutOfRange { .. } => "COERCE_DECIMAL_OUT_OF_RANGE",
            Self::InvalidConfig { .. } => "COERCE_INVALID_CONFIG",
        }
    }

    /// The raw text (or value rendering) that caused the failure
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidNumeral { input, .. }
            | Self::MalformedDecimal { input, .. }
            | Self::UnparseableDate { input } => input,
            Self::InvalidPattern { pattern, .. } => pattern,
            Self::DecimalOutOfRange { value } => value,
            Self::InvalidConfig { value, .. } => value,
        }
    }

    /// Check if this is a parse failure of caller-supplied data
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidNumeral { .. }
                | Self::MalformedDecimal { .. }
                | Self::UnparseableDate { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CoerceError::invalid_numeral("i32", "abc").code(),
            "COERCE_INVALID_NUMERAL"
        );
        assert_eq!(
            CoerceError::unparseable_date("x").code(),
            "COERCE_UNPARSEABLE_DATE"
        );
        assert_eq!(
            CoerceError::decimal_out_of_range(f64::INFINITY).code(),
            "COERCE_DECIMAL_OUT_OF_RANGE"
        );
    }

    #[test]
    fn test_malformed_decimal_message_never_empty() {
        let err = CoerceError::malformed_decimal("1.2.3", "");
        let msg = err.to_string();
        assert!(msg.contains("\"1.2.3\""));
        assert!(msg.ends_with("not a decimal literal"));
    }

    #[test]
    fn test_input_accessor() {
        assert_eq!(CoerceError::invalid_numeral("i8", "0x1F").input(), "0x1F");
        assert_eq!(
            CoerceError::invalid_pattern("yyyy-QQ", "unknown letter").input(),
            "yyyy-QQ"
        );
    }

    #[test]
    fn test_parse_failure_classification() {
        assert!(CoerceError::invalid_numeral("i64", "1e3").is_parse_failure());
        assert!(CoerceError::unparseable_date("2020").is_parse_failure());
        assert!(!CoerceError::invalid_config("RILL_CHARSET", "ebcdic").is_parse_failure());
    }

    #[test]
    fn test_display_includes_input() {
        let err = CoerceError::unparseable_date("2020-01-02T03:04:05");
        assert_eq!(
            err.to_string(),
            "Unparseable date: \"2020-01-02T03:04:05\""
        );
    }
}
