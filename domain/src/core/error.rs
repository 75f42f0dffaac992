//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Please enter a positive integer.")]
    NonPositiveCount(i64),

    #[error("Invalid number, try again.")]
    InvalidCount(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_error_display() {
        assert_eq!(
            DomainError::NonPositiveCount(0).to_string(),
            "Please enter a positive integer."
        );
        assert_eq!(
            DomainError::InvalidCount("x".into()).to_string(),
            "Invalid number, try again."
        );
    }
}
