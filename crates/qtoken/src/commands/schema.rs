use crate::error::CliError;
use qtoken_core::{Address, Function, Token, Type, Variable};
use schemars::schema_for;
use starbase::AppResult;
use std::path::PathBuf;

/// Which token encoding to describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SchemaKind {
    Token,
    Address,
    Type,
    Variable,
    Function,
}

pub fn schema_json(kind: SchemaKind) -> Result<String, CliError> {
    let schema = match kind {
        SchemaKind::Token => schema_for!(Token),
        SchemaKind::Address => schema_for!(Address),
        SchemaKind::Type => schema_for!(Type),
        SchemaKind::Variable => schema_for!(Variable),
        SchemaKind::Function => schema_for!(Function),
    };
    Ok(serde_json::to_string_pretty(&schema)?)
}

pub fn run_schema(kind: SchemaKind, output: Option<PathBuf>) -> AppResult {
    let schema_json = schema_json(kind)?;

    if let Some(path) = output {
        std::fs::write(&path, schema_json).map_err(|e| CliError::io(path.display(), e))?;
    } else {
        println!("{}", schema_json);
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_is_json() {
        let json = schema_json(SchemaKind::Type).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.is_object());
    }
}
