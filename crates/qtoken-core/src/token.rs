//! The flat token string and delimiter navigation.
//!
//! A [`Token`] is the opaque form that crosses the boundary between the IL and
//! its consumers. Its grammar is:
//!
//! ```text
//! Token          = Identifier | QualifiedToken | DecoratedType
//! QualifiedToken = PackageName [ ":" ModuleName [ ":" ModuleMemberName [ ":" ClassMemberName ] ] ]
//! DecoratedType  = "*" Token | "[]" Token | "map[" Token "]" Token
//!                | "(" [ Token ( "," Token )* ] ")" Token?
//! ```
//!
//! Delimiter counting is literal: `delimiters()` counts every `:` in the string,
//! including those inside the element types of a decorated type. The structural
//! accessors (`package()`, `module()`, ...) consult the type grammar first, so a
//! decorated token never reports an address.

use crate::address::{Address, ClassMember, Module, ModuleMember, Package};
use crate::error::{Result, TokenError};
use crate::naming::Name;
use crate::types::{parser::has_decoration, Type};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Delimits the package, module, module member and class member parts of a token.
pub const TOKEN_DELIMITER: char = ':';

/// A qualified name that resolves to a symbol on its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "String", into = "String")]
pub struct Token(String);

impl Token {
    /// Parse a token, checking it against the full token grammar.
    pub fn parse(s: impl Into<String>) -> Result<Self> {
        let s = s.into();
        if s.is_empty() {
            return Err(TokenError::Empty);
        }
        if has_decoration(&s) {
            Type::parse(&s)?;
        } else {
            Address::parse(&s)?;
        }
        Ok(Self(s))
    }

    /// Wrap a string produced by a trusted emitter without validating it.
    ///
    /// Accessors on such a token never panic; they return `None` for parts
    /// that do not parse.
    pub fn new_unchecked(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of delimiters in the token
    pub fn delimiters(&self) -> usize {
        self.0.matches(TOKEN_DELIMITER).count()
    }

    /// Byte index of the `n`th delimiter (1-indexed), or `None` if there are fewer
    /// than `n`.
    pub fn delimiter(&self, n: usize) -> Option<usize> {
        let n = n.checked_sub(1)?;
        self.0
            .match_indices(TOKEN_DELIMITER)
            .nth(n)
            .map(|(ix, _)| ix)
    }

    pub fn has_module(&self) -> bool {
        self.delimiters() > 0
    }

    pub fn has_module_member(&self) -> bool {
        self.delimiters() > 1
    }

    pub fn has_class_member(&self) -> bool {
        self.delimiters() > 2
    }

    pub fn is_simple(&self) -> bool {
        self.delimiters() == 0
    }

    /// Whether the outer shape is a pointer, array, map or function type.
    pub fn is_decorated(&self) -> bool {
        has_decoration(&self.0)
    }

    /// The token up to (not including) the `depth + 1`th delimiter.
    fn prefix(&self, depth: usize) -> &str {
        match self.delimiter(depth + 1) {
            Some(ix) => &self.0[..ix],
            None => &self.0,
        }
    }

    /// The token as a simple name, if it is one.
    pub fn name(&self) -> Option<Name> {
        Name::new(self.0.as_str()).ok()
    }

    /// The package part. Decorated types are built in and have no package.
    pub fn package(&self) -> Option<Package> {
        if self.is_decorated() {
            return None;
        }
        Package::parse(self.prefix(0)).ok()
    }

    /// The module part, if the token has one.
    pub fn module(&self) -> Option<Module> {
        if self.is_decorated() || !self.has_module() {
            return None;
        }
        Module::parse(self.prefix(1)).ok()
    }

    /// The module member part, if the token has one.
    pub fn module_member(&self) -> Option<ModuleMember> {
        if self.is_decorated() || !self.has_module_member() {
            return None;
        }
        ModuleMember::parse(self.prefix(2)).ok()
    }

    /// The class member, if the token addresses one.
    pub fn class_member(&self) -> Option<ClassMember> {
        if self.is_decorated() || !self.has_class_member() {
            return None;
        }
        ClassMember::parse(&self.0).ok()
    }

    /// Parse the token as a package, module, module member or class member address.
    pub fn address(&self) -> Result<Address> {
        if self.is_decorated() {
            return Err(TokenError::Decorated(self.0.clone()));
        }
        Address::parse(&self.0)
    }

    /// Parse the token as a type.
    pub fn to_type(&self) -> Result<Type> {
        Type::parse(&self.0)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Token {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Token {
    type Error = TokenError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> String {
        token.0
    }
}

impl From<Name> for Token {
    fn from(name: Name) -> Self {
        Self(name.into())
    }
}
