use crate::error::{Result, TokenError};
use crate::naming::PackageName;
use crate::token::{Token, TOKEN_DELIMITER};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub(crate) const KIND: &str = "package";

/// A token addressing just a package: `<PackageName>`.
///
/// The package name `.` means "the current package".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "String", into = "String")]
pub struct Package {
    name: PackageName,
}

impl Package {
    pub fn new(name: PackageName) -> Self {
        Self { name }
    }

    /// The current package, `.`
    pub fn current() -> Self {
        Self::new(PackageName::current())
    }

    /// Parse a package token; it must not contain any delimiter.
    pub fn parse(s: &str) -> Result<Self> {
        if s.contains(TOKEN_DELIMITER) {
            return Err(TokenError::delimiters(KIND, s, 0));
        }
        PackageName::new(s).map(Self::new)
    }

    pub fn name(&self) -> &PackageName {
        &self.name
    }

    pub fn is_current(&self) -> bool {
        self.name.is_current()
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<PackageName> for Package {
    fn from(name: PackageName) -> Self {
        Self::new(name)
    }
}

impl FromStr for Package {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Package {
    type Error = TokenError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Package> for String {
    fn from(pkg: Package) -> String {
        pkg.name.into()
    }
}

impl From<Package> for Token {
    fn from(pkg: Package) -> Self {
        Token::new_unchecked(pkg)
    }
}
