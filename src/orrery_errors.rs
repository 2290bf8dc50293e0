use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrreryError {
    #[error("Domain error in {function}: {reason}")]
    DomainError {
        function: &'static str,
        reason: String,
    },

    #[error("Celestial body not found: {0}")]
    NotFound(String),

    #[error("Operation '{operation}' is not supported for {body}")]
    NotSupported {
        body: String,
        operation: &'static str,
    },

    #[error("{routine} did not converge after {iterations} iterations")]
    ConvergenceFailure {
        routine: &'static str,
        iterations: usize,
    },

    #[error("Arithmetic overflow in {0}")]
    ArithmeticOverflow(&'static str),

    #[error("Invalid epoch: {0}")]
    InvalidEpoch(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl OrreryError {
    pub(crate) fn domain(function: &'static str, reason: impl Into<String>) -> Self {
        OrreryError::DomainError {
            function,
            reason: reason.into(),
        }
    }

    pub(crate) fn not_supported(body: impl std::fmt::Display, operation: &'static str) -> Self {
        OrreryError::NotSupported {
            body: body.to_string(),
            operation,
        }
    }

    /// Returns `true` for the [`OrreryError::DomainError`] variant, whatever its payload.
    pub fn is_domain_error(&self) -> bool {
        matches!(self, OrreryError::DomainError { .. })
    }
}
