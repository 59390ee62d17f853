//! Inspect command: decompose tokens into their structural parts

use crate::output::OutputFormat;
use owo_colors::OwoColorize;
use qtoken_core::{Address, Token, Type};
use serde::Serialize;
use starbase::AppResult;
use std::fmt::Write;
use tracing::debug;

/// Kind reported for a simple token that is both a legal package and a legal
/// primitive type name
pub const SIMPLE_KIND: &str = "package or primitive type";

/// The structure recovered from one token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenReport {
    pub token: String,
    pub kind: String,
    pub delimiters: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<TypeShape>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A decorated type, one node per layer of decoration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeShape {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'static str>,
    pub kind: &'static str,
    pub token: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TypeShape>,
}

impl TypeShape {
    pub fn of(ty: &Type) -> Self {
        Self::with_role(None, ty)
    }

    fn with_role(role: Option<&'static str>, ty: &Type) -> Self {
        let children = match ty {
            Type::Pointer(element) | Type::Array(element) => {
                vec![Self::with_role(Some("element"), element)]
            }
            Type::Map(key, value) => vec![
                Self::with_role(Some("key"), key),
                Self::with_role(Some("value"), value),
            ],
            Type::Function(parameters, returns) => parameters
                .iter()
                .map(|p| Self::with_role(Some("parameter"), p))
                .chain(returns.iter().map(|r| Self::with_role(Some("returns"), r)))
                .collect(),
            Type::Primitive(_) | Type::Named(_) => Vec::new(),
        };
        Self {
            role,
            kind: ty.kind(),
            token: ty.to_string(),
            children,
        }
    }
}

/// Decompose a single token. Invalid tokens produce a report with `error` set.
pub fn inspect_token(input: &str) -> TokenReport {
    let mut report = TokenReport {
        token: input.to_string(),
        kind: "invalid".to_string(),
        delimiters: Token::new_unchecked(input).delimiters(),
        package: None,
        module: None,
        class: None,
        name: None,
        shape: None,
        error: None,
    };

    let token = match Token::parse(input) {
        Ok(token) => token,
        Err(err) => {
            debug!("Rejected token {:?}: {}", input, err);
            report.error = Some(err.to_string());
            return report;
        }
    };

    if token.is_decorated() {
        match token.to_type() {
            Ok(ty) => {
                report.kind = format!("{} type", ty.kind());
                report.shape = Some(TypeShape::of(&ty));
            }
            Err(err) => report.error = Some(err.to_string()),
        }
        return report;
    }

    match token.address() {
        Ok(address) => {
            report.kind = match &address {
                Address::Package(_) if Type::parse(token.as_str()).is_ok() => {
                    SIMPLE_KIND.to_string()
                }
                _ => address.kind().to_string(),
            };
            report.package = Some(address.package().to_string());
            report.module = address.module().map(ToString::to_string);
            report.class = match &address {
                Address::ClassMember(member) => Some(member.class().to_string()),
                _ => None,
            };
            report.name = Some(address.leaf().to_string());
        }
        Err(err) => report.error = Some(err.to_string()),
    }
    report
}

fn render_shape(out: &mut String, shape: &TypeShape, depth: usize) {
    let indent = "  ".repeat(depth);
    let _ = match shape.role {
        Some(role) => writeln!(out, "{}{}: {} ({})", indent, role, shape.token, shape.kind),
        None => writeln!(out, "{}shape: {}", indent, shape.kind),
    };
    for child in &shape.children {
        render_shape(out, child, depth + 1);
    }
}

/// Render a report as indented text
pub fn render_text(report: &TokenReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report.token.bold());
    let _ = writeln!(out, "  kind: {}", report.kind);
    let fields = [
        ("package", &report.package),
        ("module", &report.module),
        ("class", &report.class),
        ("name", &report.name),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            let _ = writeln!(out, "  {}: {}", label, value);
        }
    }
    if let Some(shape) = &report.shape {
        render_shape(&mut out, shape, 1);
    }
    if let Some(error) = &report.error {
        let _ = writeln!(out, "  {}: {}", "error".red(), error);
    }
    out
}

/// Run the inspect command. Exits with 1 if any token is invalid.
pub fn run_inspect(tokens: Vec<String>, format: OutputFormat) -> AppResult {
    let reports: Vec<TokenReport> = tokens.iter().map(|t| inspect_token(t)).collect();
    let invalid = reports.iter().filter(|r| r.error.is_some()).count();

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&reports).map_err(crate::CliError::from)?);
    } else {
        for report in &reports {
            print!("{}", render_text(report));
        }
    }

    Ok(if invalid > 0 { Some(1) } else { None })
}
