//! Errors raised at the string-keyed boundary
//!
//! A rule failure is not an error: it is an ordinary [`ValidationResult`](crate::ValidationResult).
//! The only error is asking for rules on an identifier the catalog does not know.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown field identifier: {0}")]
    UnknownField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_message() {
        let err = ValidationError::UnknownField("nickname".to_string());
        assert_eq!(err.to_string(), "unknown field identifier: nickname");
    }
}
