//! Error types for token parsing and construction.

use thiserror::Error;

/// Result type alias for token operations
pub type Result<T> = std::result::Result<T, TokenError>;

/// Errors raised while validating or decomposing a token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("'{0}' is not a legal name")]
    InvalidName(String),

    #[error("'{0}' is not a legal qualified name")]
    InvalidQName(String),

    #[error("'{0}' is not a legal package name")]
    InvalidPackageName(String),

    #[error("{kind} token '{token}' needs {expected} delimiter(s), found {found}")]
    DelimiterCount {
        kind: &'static str,
        token: String,
        expected: usize,
        found: usize,
    },

    #[error("{kind} token '{token}' has {found} delimiter(s); expected 0, 2 or 3")]
    NotASymbol {
        kind: &'static str,
        token: String,
        found: usize,
    },

    #[error("'{0}' has more than 3 delimiters")]
    TooManyDelimiters(String),

    #[error("malformed type token '{token}' at offset {offset}: {message}")]
    TypeSyntax {
        token: String,
        offset: usize,
        message: String,
    },

    #[error("'{0}' does not name a type (expected a name or a module member)")]
    NotAType(String),

    #[error("'{0}' is not a class type (expected a module member)")]
    NotAClass(String),

    #[error("'{0}' is a decorated type and has no address")]
    Decorated(String),

    #[error("empty token")]
    Empty,
}

impl TokenError {
    pub(crate) fn delimiters(kind: &'static str, token: &str, expected: usize) -> Self {
        TokenError::DelimiterCount {
            kind,
            token: token.to_string(),
            expected,
            found: token.matches(crate::token::TOKEN_DELIMITER).count(),
        }
    }

    pub(crate) fn not_a_symbol(kind: &'static str, token: &str) -> Self {
        TokenError::NotASymbol {
            kind,
            token: token.to_string(),
            found: token.matches(crate::token::TOKEN_DELIMITER).count(),
        }
    }
}
