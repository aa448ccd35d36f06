//! Domain Error Types
//!
//! Every way a model construction can fail, with the offending field baked in.

/// Validation error raised by entity constructors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must not exceed {max} characters (got {len})")]
    TooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },

    #[error("{field} must be a positive number (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must be within [{min}, {max}] (got {value})")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("invalid email format")]
    InvalidEmail,

    #[error("email {email} is already registered")]
    EmailTaken { email: String },
}

impl ValidationError {
    /// Coarse category label, handy for log fields and metrics dimensions.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::TooLong { .. } => "field-length",
            ValidationError::NotPositive { .. } | ValidationError::OutOfRange { .. } => "range",
            ValidationError::InvalidEmail => "format",
            ValidationError::EmailTaken { .. } => "uniqueness",
        }
    }
}
