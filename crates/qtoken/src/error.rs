//! Error types for the qtoken CLI

use miette::Diagnostic;
use qtoken_core::TokenError;
use thiserror::Error;

/// Errors reported by CLI commands
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("invalid token '{token}'")]
    #[diagnostic(code(qtoken::invalid_token))]
    InvalidToken {
        token: String,
        #[source]
        source: TokenError,
    },

    #[error("{count} invalid token(s) in {origin}")]
    #[diagnostic(
        code(qtoken::invalid_input),
        help("each non-empty line must hold exactly one token")
    )]
    InvalidInput { origin: String, count: usize },

    #[error("tokens in {0} are not in canonical order")]
    #[diagnostic(code(qtoken::unsorted), help("run `qtoken sort` to reorder them"))]
    Unsorted(String),

    #[error("failed to access {path}")]
    #[diagnostic(code(qtoken::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {path}")]
    #[diagnostic(code(qtoken::config))]
    Config {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("JSON error: {0}")]
    #[diagnostic(code(qtoken::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn io(path: impl std::fmt::Display, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.to_string(),
            source,
        }
    }
}
