//! Address kinds: successively nested views over the qualified token grammar.
//!
//! | Kind           | Grammar                      | Delimiters |
//! |----------------|------------------------------|------------|
//! | [`Package`]      | `package`                    | 0          |
//! | [`Module`]       | `package:module`             | 1          |
//! | [`ModuleMember`] | `package:module:member`      | 2          |
//! | [`ClassMember`]  | `package:module:class:member`| 3          |
//!
//! Each kind owns its parsed segments. The flat string is produced by `Display`
//! and by the conversion into [`Token`].

pub mod class_member;
pub mod module;
pub mod module_member;
pub mod package;

pub use class_member::ClassMember;
pub use module::Module;
pub use module_member::ModuleMember;
pub use package::Package;

use crate::error::{Result, TokenError};
use crate::token::{Token, TOKEN_DELIMITER};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Any of the four address kinds, chosen by delimiter count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "String", into = "String")]
pub enum Address {
    Package(Package),
    Module(Module),
    ModuleMember(ModuleMember),
    ClassMember(ClassMember),
}

impl Address {
    /// Parse a qualified token, picking the kind from its delimiter count.
    pub fn parse(s: &str) -> Result<Self> {
        let found = s.matches(TOKEN_DELIMITER).count();
        debug!(token = s, delimiters = found, "classifying address");
        let address = match found {
            0 => Package::parse(s).map(Address::Package),
            1 => Module::parse(s).map(Address::Module),
            2 => ModuleMember::parse(s).map(Address::ModuleMember),
            3 => ClassMember::parse(s).map(Address::ClassMember),
            _ => Err(TokenError::TooManyDelimiters(s.to_string())),
        };
        address.inspect_err(|err| trace!(token = s, %err, "invalid address token"))
    }

    /// Number of delimiters in the encoded form (0 for a package, 3 for a class member).
    pub fn depth(&self) -> usize {
        match self {
            Address::Package(_) => 0,
            Address::Module(_) => 1,
            Address::ModuleMember(_) => 2,
            Address::ClassMember(_) => 3,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Address::Package(_) => package::KIND,
            Address::Module(_) => module::KIND,
            Address::ModuleMember(_) => module_member::KIND,
            Address::ClassMember(_) => class_member::KIND,
        }
    }

    pub fn package(&self) -> &Package {
        match self {
            Address::Package(p) => p,
            Address::Module(m) => m.package(),
            Address::ModuleMember(m) => m.package(),
            Address::ClassMember(c) => c.package(),
        }
    }

    pub fn module(&self) -> Option<&Module> {
        match self {
            Address::Package(_) => None,
            Address::Module(m) => Some(m),
            Address::ModuleMember(m) => Some(m.module()),
            Address::ClassMember(c) => Some(c.module()),
        }
    }

    pub fn module_member(&self) -> Option<&ModuleMember> {
        match self {
            Address::ModuleMember(m) => Some(m),
            Address::ClassMember(c) => Some(c.class()),
            _ => None,
        }
    }

    pub fn class_member(&self) -> Option<&ClassMember> {
        match self {
            Address::ClassMember(c) => Some(c),
            _ => None,
        }
    }

    /// The enclosing address, or `None` for a package.
    pub fn parent(&self) -> Option<Address> {
        match self {
            Address::Package(_) => None,
            Address::Module(m) => Some(Address::Package(m.package().clone())),
            Address::ModuleMember(m) => Some(Address::Module(m.module().clone())),
            Address::ClassMember(c) => Some(Address::ModuleMember(c.class().clone())),
        }
    }

    /// The last segment of the address.
    pub fn leaf(&self) -> &str {
        match self {
            Address::Package(p) => p.name().as_str(),
            Address::Module(m) => m.name().as_str(),
            Address::ModuleMember(m) => m.name().as_str(),
            Address::ClassMember(c) => c.name().as_str(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Package(p) => write!(f, "{}", p),
            Address::Module(m) => write!(f, "{}", m),
            Address::ModuleMember(m) => write!(f, "{}", m),
            Address::ClassMember(c) => write!(f, "{}", c),
        }
    }
}

impl TryFrom<String> for Address {
    type Error = TokenError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> String {
        address.to_string()
    }
}

impl From<Address> for Token {
    fn from(address: Address) -> Self {
        Token::new_unchecked(address.to_string())
    }
}

impl From<Package> for Address {
    fn from(p: Package) -> Self {
        Address::Package(p)
    }
}

impl From<Module> for Address {
    fn from(m: Module) -> Self {
        Address::Module(m)
    }
}

impl From<ModuleMember> for Address {
    fn from(m: ModuleMember) -> Self {
        Address::ModuleMember(m)
    }
}

impl From<ClassMember> for Address {
    fn from(c: ClassMember) -> Self {
        Address::ClassMember(c)
    }
}
