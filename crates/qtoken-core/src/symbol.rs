//! Variable and function tokens.
//!
//! Both reuse the address grammar: `Name | ModuleMember | ClassMember`. A
//! [`Variable`] names a storage location (a local or parameter, a module property
//! or a class property) and a [`Function`] names a callable.

use crate::address::{ClassMember, ModuleMember};
use crate::error::{Result, TokenError};
use crate::naming::Name;
use crate::token::{Token, TOKEN_DELIMITER};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which address shape a symbol token has.
enum Shape<'a> {
    Local(Name),
    Module(ModuleMember),
    Class(ClassMember),
    Other(&'a str),
}

fn shape(s: &str) -> Result<Shape<'_>> {
    Ok(match s.matches(TOKEN_DELIMITER).count() {
        0 => Shape::Local(Name::new(s)?),
        2 => Shape::Module(ModuleMember::parse(s)?),
        3 => Shape::Class(ClassMember::parse(s)?),
        _ => Shape::Other(s),
    })
}

/// A storage location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "String", into = "String")]
pub enum Variable {
    /// A local variable or parameter
    Local(Name),
    /// A module property
    ModuleProperty(ModuleMember),
    /// A class property
    ClassProperty(ClassMember),
}

impl Variable {
    pub fn parse(s: &str) -> Result<Self> {
        match shape(s)? {
            Shape::Local(name) => Ok(Variable::Local(name)),
            Shape::Module(member) => Ok(Variable::ModuleProperty(member)),
            Shape::Class(member) => Ok(Variable::ClassProperty(member)),
            Shape::Other(s) => Err(TokenError::not_a_symbol("variable", s)),
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Variable::Local(_))
    }

    /// The simple name of the variable
    pub fn name(&self) -> &Name {
        match self {
            Variable::Local(name) => name,
            Variable::ModuleProperty(member) => member.name(),
            Variable::ClassProperty(member) => member.name(),
        }
    }

    pub fn to_token(&self) -> Token {
        Token::new_unchecked(self.to_string())
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variable::Local(name) => write!(f, "{}", name),
            Variable::ModuleProperty(member) => write!(f, "{}", member),
            Variable::ClassProperty(member) => write!(f, "{}", member),
        }
    }
}

/// A callable: a local function value, a module function or a class method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "String", into = "String")]
pub enum Function {
    Local(Name),
    ModuleFunction(ModuleMember),
    ClassMethod(ClassMember),
}

impl Function {
    pub fn parse(s: &str) -> Result<Self> {
        match shape(s)? {
            Shape::Local(name) => Ok(Function::Local(name)),
            Shape::Module(member) => Ok(Function::ModuleFunction(member)),
            Shape::Class(member) => Ok(Function::ClassMethod(member)),
            Shape::Other(s) => Err(TokenError::not_a_symbol("function", s)),
        }
    }

    pub fn is_method(&self) -> bool {
        matches!(self, Function::ClassMethod(_))
    }

    pub fn name(&self) -> &Name {
        match self {
            Function::Local(name) => name,
            Function::ModuleFunction(member) => member.name(),
            Function::ClassMethod(member) => member.name(),
        }
    }

    pub fn to_token(&self) -> Token {
        Token::new_unchecked(self.to_string())
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::Local(name) => write!(f, "{}", name),
            Function::ModuleFunction(member) => write!(f, "{}", member),
            Function::ClassMethod(member) => write!(f, "{}", member),
        }
    }
}

macro_rules! string_conversions {
    ($ty:ident) => {
        impl FromStr for $ty {
            type Err = TokenError;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = TokenError;

            fn try_from(s: String) -> Result<Self> {
                Self::parse(&s)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> String {
                value.to_string()
            }
        }

        impl From<$ty> for Token {
            fn from(value: $ty) -> Token {
                value.to_token()
            }
        }
    };
}

string_conversions!(Variable);
string_conversions!(Function);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_shapes() {
        assert!(Variable::parse("x").unwrap().is_local());
        assert!(matches!(
            Variable::parse("pkg:mod:counter").unwrap(),
            Variable::ModuleProperty(_)
        ));
        let field = Variable::parse("pkg:mod:Foo:count").unwrap();
        assert!(matches!(field, Variable::ClassProperty(_)));
        assert_eq!(field.name().as_str(), "count");
        assert_eq!(field.to_token().as_str(), "pkg:mod:Foo:count");
    }

    #[test]
    fn test_function_shapes() {
        assert!(matches!(Function::parse("f").unwrap(), Function::Local(_)));
        assert!(matches!(
            Function::parse("pkg:mod:main").unwrap(),
            Function::ModuleFunction(_)
        ));
        assert!(Function::parse("pkg:mod:Foo:run").unwrap().is_method());
    }

    #[test]
    fn test_symbol_rejects_module_token() {
        assert!(matches!(
            Variable::parse("pkg:mod"),
            Err(TokenError::NotASymbol { kind: "variable", found: 1, .. })
        ));
        assert!(matches!(
            Function::parse("pkg:mod:Foo:run:x"),
            Err(TokenError::NotASymbol { kind: "function", found: 4, .. })
        ));
        let message = Function::parse("pkg:mod").unwrap_err().to_string();
        assert!(message.contains("expected 0, 2 or 3"));
        assert!(Function::parse("a/b").is_err());
    }
}
