//! Sort command: validate a token listing and print it in canonical order

use crate::error::CliError;
use crate::output::OutputFormat;
use qtoken_core::ordering::{is_sorted, sort_unique, sorted};
use qtoken_core::{Token, TokenError};
use starbase::AppResult;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, warn};

/// A line that did not hold a valid token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    pub line: usize,
    pub text: String,
    pub error: TokenError,
}

/// Parse one token per line. Blank lines and lines starting with `#` are skipped.
pub fn parse_listing(input: &str) -> Result<Vec<Token>, Vec<LineError>> {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    for (ix, line) in input.lines().enumerate() {
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        match Token::parse(text) {
            Ok(token) => tokens.push(token),
            Err(error) => errors.push(LineError {
                line: ix + 1,
                text: text.to_string(),
                error,
            }),
        }
    }
    if errors.is_empty() {
        Ok(tokens)
    } else {
        Err(errors)
    }
}

/// Order a listing, optionally dropping duplicates
pub fn order(tokens: Vec<Token>, unique: bool) -> Vec<Token> {
    if unique {
        sort_unique(tokens)
    } else {
        sorted(tokens)
    }
}

fn read_input(input: Option<&PathBuf>) -> Result<(String, String), CliError> {
    match input {
        Some(path) => {
            let content =
                std::fs::read_to_string(path).map_err(|e| CliError::io(path.display(), e))?;
            Ok((path.display().to_string(), content))
        }
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .map_err(|e| CliError::io("<stdin>", e))?;
            Ok(("<stdin>".to_string(), content))
        }
    }
}

/// Run the sort command
pub fn run_sort(
    input: Option<PathBuf>,
    unique: bool,
    check: bool,
    format: OutputFormat,
) -> AppResult {
    let (origin, content) = read_input(input.as_ref())?;
    let tokens = match parse_listing(&content) {
        Ok(tokens) => tokens,
        Err(errors) => {
            for e in &errors {
                warn!("{}:{}: {}", origin, e.line, e.error);
                eprintln!("{}:{}: '{}': {}", origin, e.line, e.text, e.error);
            }
            return Err(CliError::InvalidInput {
                origin,
                count: errors.len(),
            }
            .into());
        }
    };
    debug!("Read {} token(s) from {}", tokens.len(), origin);

    if check {
        if !is_sorted(&tokens) {
            return Err(CliError::Unsorted(origin).into());
        }
        return Ok(None);
    }

    let ordered = order(tokens, unique);
    if format.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&ordered).map_err(CliError::from)?
        );
    } else {
        for token in &ordered {
            println!("{}", token);
        }
    }
    Ok(None)
}
