//! Error codes for the shared crate
//!
//! Standardized API error codes shared between the engine and the backend
//! contract.

/// Standard API error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Success
    Success,
    /// Validation error (400)
    Validation,
    /// Authentication required (401)
    Unauthorized,
    /// Permission denied (403)
    Forbidden,
    /// Resource not found (404)
    NotFound,
    /// Business rule violation (422)
    BusinessRule,
    /// Internal server error (500)
    Internal,
    /// Invalid request (400)
    Invalid,
}

impl ApiErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Success => "E0000",
            Self::Validation => "E0002",
            Self::NotFound => "E0003",
            Self::BusinessRule => "E0005",
            Self::Invalid => "E0006",
            Self::Forbidden => "E2001",
            Self::Unauthorized => "E3001",
            Self::Internal => "E9001",
        }
    }

    /// Get the default message for this error
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Validation => "Validation failed",
            Self::Unauthorized => "Authentication required",
            Self::Forbidden => "Permission denied",
            Self::NotFound => "Resource not found",
            Self::BusinessRule => "Business rule violation",
            Self::Internal => "Internal server error",
            Self::Invalid => "Invalid request",
        }
    }

    /// Parse a wire code string
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "E0000" => Some(Self::Success),
            "E0002" => Some(Self::Validation),
            "E0003" => Some(Self::NotFound),
            "E0005" => Some(Self::BusinessRule),
            "E0006" => Some(Self::Invalid),
            "E2001" => Some(Self::Forbidden),
            "E3001" => Some(Self::Unauthorized),
            "E9001" => Some(Self::Internal),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
