use super::module::Module;
use super::package::Package;
use crate::error::{Result, TokenError};
use crate::naming::{ModuleMemberName, Name};
use crate::token::{Token, TOKEN_DELIMITER};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub(crate) const KIND: &str = "module member";

/// A token addressing a member of a module: `<Module> ":" <ModuleMemberName>`.
///
/// Member names are simple names, so the last delimiter always separates the
/// module from the member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleMember {
    module: Module,
    name: ModuleMemberName,
}

impl ModuleMember {
    pub fn new(module: Module, name: ModuleMemberName) -> Self {
        Self { module, name }
    }

    /// Build a member token from a module and an unchecked member name.
    pub fn with_name(module: Module, name: &str) -> Result<Self> {
        Name::new(name).map(|name| Self::new(module, name))
    }

    /// Parse a module member token; it must contain exactly two delimiters.
    pub fn parse(s: &str) -> Result<Self> {
        if s.matches(TOKEN_DELIMITER).count() != 2 {
            return Err(TokenError::delimiters(KIND, s, 2));
        }
        match s.rsplit_once(TOKEN_DELIMITER) {
            Some((module, name)) => Ok(Self::new(Module::parse(module)?, Name::new(name)?)),
            None => Err(TokenError::delimiters(KIND, s, 2)),
        }
    }

    pub fn package(&self) -> &Package {
        self.module.package()
    }

    pub fn module(&self) -> &Module {
        &self.module
    }

    pub fn name(&self) -> &ModuleMemberName {
        &self.name
    }
}

impl fmt::Display for ModuleMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.module, TOKEN_DELIMITER, self.name)
    }
}

impl FromStr for ModuleMember {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ModuleMember {
    type Error = TokenError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<ModuleMember> for String {
    fn from(member: ModuleMember) -> String {
        member.to_string()
    }
}

impl From<ModuleMember> for Token {
    fn from(member: ModuleMember) -> Self {
        Token::new_unchecked(member.to_string())
    }
}
