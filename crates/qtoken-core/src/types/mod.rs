//! Type tokens.
//!
//! A type is either primitive (a bare [`Name`] such as `string`), a reference to a
//! type declared in a module (a [`ModuleMember`]), or decorated: a pointer, array,
//! map or function built from other types. Decoration nests arbitrarily, e.g.
//! `[]*map[string]pkg:mod:Foo`.

pub mod parser;

use crate::address::{Module, ModuleMember, Package};
use crate::error::{Result, TokenError};
use crate::naming::TypeName;
use crate::token::Token;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use parser::{
    ARRAY_PREFIX, FUNCTION_CLOSE, FUNCTION_OPEN, FUNCTION_SEPARATOR, MAP_KEY_CLOSE, MAP_PREFIX,
    POINTER_PREFIX,
};

/// A type token, parsed into its recursive structure.
///
/// Serializes as the flat token string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "String", into = "String")]
pub enum Type {
    /// A built-in type with no module, e.g. `string`
    Primitive(TypeName),

    /// A type declared in a module, e.g. `pkg:mod:Foo`
    Named(ModuleMember),

    /// `*T`
    Pointer(Box<Type>),

    /// `[]T`
    Array(Box<Type>),

    /// `map[K]V`
    Map(Box<Type>, Box<Type>),

    /// `(P1,P2,...)R`, where the return type is optional
    Function(Vec<Type>, Option<Box<Type>>),
}

impl Type {
    /// Parse a type token.
    pub fn parse(s: &str) -> Result<Self> {
        parser::parse_type(s).inspect_err(|err| trace!(token = s, %err, "invalid type token"))
    }

    pub fn primitive(name: TypeName) -> Self {
        Type::Primitive(name)
    }

    pub fn named(member: ModuleMember) -> Self {
        Type::Named(member)
    }

    /// A type declared as `name` in `module`
    pub fn new(module: Module, name: TypeName) -> Self {
        Type::Named(ModuleMember::new(module, name))
    }

    pub fn pointer(element: Type) -> Self {
        Type::Pointer(Box::new(element))
    }

    pub fn array(element: Type) -> Self {
        Type::Array(Box::new(element))
    }

    pub fn map(key: Type, value: Type) -> Self {
        Type::Map(Box::new(key), Box::new(value))
    }

    pub fn function(parameters: Vec<Type>, returns: Option<Type>) -> Self {
        Type::Function(parameters, returns.map(Box::new))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Primitive(_))
    }

    /// Whether this type refers to a type declared in a module
    pub fn is_named(&self) -> bool {
        matches!(self, Type::Named(_))
    }

    pub fn is_decorated(&self) -> bool {
        self.is_pointer() || self.is_array() || self.is_map() || self.is_function()
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Type::Pointer(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Type::Array(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Type::Map(_, _))
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Type::Function(_, _))
    }

    /// The module member declaring this type. `None` for primitive and decorated types.
    pub fn member(&self) -> Option<&ModuleMember> {
        match self {
            Type::Named(member) => Some(member),
            _ => None,
        }
    }

    /// Built-in types (primitive or decorated) have no package.
    pub fn package(&self) -> Option<&Package> {
        self.member().map(ModuleMember::package)
    }

    pub fn module(&self) -> Option<&Module> {
        self.member().map(ModuleMember::module)
    }

    /// The simple name of a primitive or module member type.
    pub fn name(&self) -> Option<&TypeName> {
        match self {
            Type::Primitive(name) => Some(name),
            Type::Named(member) => Some(member.name()),
            _ => None,
        }
    }

    /// The pointee of a pointer or the element of an array
    pub fn element(&self) -> Option<&Type> {
        match self {
            Type::Pointer(element) | Type::Array(element) => Some(&**element),
            _ => None,
        }
    }

    pub fn key(&self) -> Option<&Type> {
        match self {
            Type::Map(key, _) => Some(&**key),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&Type> {
        match self {
            Type::Map(_, value) => Some(&**value),
            _ => None,
        }
    }

    pub fn parameters(&self) -> Option<&[Type]> {
        match self {
            Type::Function(parameters, _) => Some(parameters.as_slice()),
            _ => None,
        }
    }

    pub fn returns(&self) -> Option<&Type> {
        match self {
            Type::Function(_, returns) => returns.as_deref(),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Type::Primitive(_) => "primitive",
            Type::Named(_) => "named",
            Type::Pointer(_) => "pointer",
            Type::Array(_) => "array",
            Type::Map(_, _) => "map",
            Type::Function(_, _) => "function",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Primitive(name) => write!(f, "{}", name),
            Type::Named(member) => write!(f, "{}", member),
            Type::Pointer(element) => write!(f, "{}{}", POINTER_PREFIX, element),
            Type::Array(element) => write!(f, "{}{}", ARRAY_PREFIX, element),
            Type::Map(key, value) => write!(f, "{}{}{}{}", MAP_PREFIX, key, MAP_KEY_CLOSE, value),
            Type::Function(parameters, returns) => {
                f.write_str(FUNCTION_OPEN)?;
                for (i, param) in parameters.iter().enumerate() {
                    if i > 0 {
                        f.write_str(FUNCTION_SEPARATOR)?;
                    }
                    write!(f, "{}", param)?;
                }
                f.write_str(FUNCTION_CLOSE)?;
                if let Some(returns) = returns {
                    write!(f, "{}", returns)?;
                }
                Ok(())
            }
        }
    }
}

impl From<ModuleMember> for Type {
    fn from(member: ModuleMember) -> Self {
        Type::Named(member)
    }
}

impl FromStr for Type {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Type {
    type Error = TokenError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl TryFrom<&Token> for Type {
    type Error = TokenError;

    fn try_from(token: &Token) -> Result<Self> {
        Self::parse(token.as_str())
    }
}

impl From<Type> for String {
    fn from(ty: Type) -> String {
        ty.to_string()
    }
}

impl From<Type> for Token {
    fn from(ty: Type) -> Self {
        Token::new_unchecked(ty.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::Name;

    #[test]
    fn test_primitive_type() {
        let ty = Type::parse("string").unwrap();
        assert!(ty.is_primitive());
        assert!(!ty.is_decorated());
        assert_eq!(ty.name().unwrap().as_str(), "string");
        assert!(ty.package().is_none());
        assert!(ty.module().is_none());
    }

    #[test]
    fn test_named_type() {
        let ty = Type::parse("pkg:mod:Foo").unwrap();
        assert!(ty.is_named());
        assert_eq!(ty.package().unwrap().to_string(), "pkg");
        assert_eq!(ty.module().unwrap().to_string(), "pkg:mod");
        assert_eq!(ty.name().unwrap().as_str(), "Foo");
    }

    #[test]
    fn test_decorated_type_has_no_owner() {
        let ty = Type::parse("[]pkg:mod:Foo").unwrap();
        assert!(ty.is_decorated());
        assert!(ty.is_array());
        assert!(!ty.is_primitive());
        assert!(ty.package().is_none());
        assert!(ty.module().is_none());
        assert!(ty.name().is_none());
        assert_eq!(ty.element().unwrap().to_string(), "pkg:mod:Foo");
    }

    #[test]
    fn test_type_new() {
        let module = Module::parse("pkg:mod").unwrap();
        let ty = Type::new(module, Name::new("Foo").unwrap());
        assert_eq!(ty.to_string(), "pkg:mod:Foo");
    }

    #[test]
    fn test_function_display() {
        let ty = Type::function(
            vec![Type::parse("string").unwrap(), Type::parse("*int").unwrap()],
            Some(Type::parse("bool").unwrap()),
        );
        assert_eq!(ty.to_string(), "(string,*int)bool");
        assert_eq!(Type::function(vec![], None).to_string(), "()");
    }

    #[test]
    fn test_type_serde_as_string() {
        let ty = Type::parse("map[string][]pkg:mod:Foo").unwrap();
        let json = serde_json::to_string(&ty).unwrap();
        assert_eq!(json, "\"map[string][]pkg:mod:Foo\"");
        let back: Type = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ty);
    }
}
