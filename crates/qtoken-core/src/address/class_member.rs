use super::module::Module;
use super::module_member::ModuleMember;
use super::package::Package;
use crate::error::{Result, TokenError};
use crate::naming::{ClassMemberName, Name};
use crate::token::{Token, TOKEN_DELIMITER};
use crate::types::Type;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub(crate) const KIND: &str = "class member";

/// A token addressing a member of a class: `<ModuleMember> ":" <ClassMemberName>`.
///
/// The class is the module member that declares the type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "String", into = "String")]
pub struct ClassMember {
    class: ModuleMember,
    name: ClassMemberName,
}

impl ClassMember {
    pub fn new(class: ModuleMember, name: ClassMemberName) -> Self {
        Self { class, name }
    }

    /// Build a member token from a class and an unchecked member name.
    pub fn with_name(class: ModuleMember, name: &str) -> Result<Self> {
        Name::new(name).map(|name| Self::new(class, name))
    }

    /// Build a member token for a class type. Only module member types declare
    /// classes; primitive and decorated types are rejected.
    pub fn for_type(class: &Type, name: ClassMemberName) -> Result<Self> {
        match class.member() {
            Some(member) => Ok(Self::new(member.clone(), name)),
            None => Err(TokenError::NotAClass(class.to_string())),
        }
    }

    /// Parse a class member token; it must contain exactly three delimiters.
    pub fn parse(s: &str) -> Result<Self> {
        if s.matches(TOKEN_DELIMITER).count() != 3 {
            return Err(TokenError::delimiters(KIND, s, 3));
        }
        match s.rsplit_once(TOKEN_DELIMITER) {
            Some((class, name)) => Ok(Self::new(ModuleMember::parse(class)?, Name::new(name)?)),
            None => Err(TokenError::delimiters(KIND, s, 3)),
        }
    }

    pub fn package(&self) -> &Package {
        self.module().package()
    }

    pub fn module(&self) -> &Module {
        self.class.module()
    }

    /// The module member declaring the class
    pub fn class(&self) -> &ModuleMember {
        &self.class
    }

    /// The class as a type token
    pub fn class_type(&self) -> Type {
        Type::Named(self.class.clone())
    }

    pub fn name(&self) -> &ClassMemberName {
        &self.name
    }
}

impl fmt::Display for ClassMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.class, TOKEN_DELIMITER, self.name)
    }
}

impl FromStr for ClassMember {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClassMember {
    type Error = TokenError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<ClassMember> for String {
    fn from(member: ClassMember) -> String {
        member.to_string()
    }
}

impl From<ClassMember> for Token {
    fn from(member: ClassMember) -> Self {
        Token::new_unchecked(member.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_member_parse() {
        let member = ClassMember::parse("pkg:mod:Foo:bar").unwrap();
        assert_eq!(member.class().to_string(), "pkg:mod:Foo");
        assert_eq!(member.class_type().to_string(), "pkg:mod:Foo");
        assert_eq!(member.module().to_string(), "pkg:mod");
        assert_eq!(member.package().to_string(), "pkg");
        assert_eq!(member.name().as_str(), "bar");
    }

    #[test]
    fn test_class_member_for_primitive_type() {
        let name = Name::new("len").unwrap();
        assert_eq!(
            ClassMember::for_type(&Type::parse("string").unwrap(), name.clone()),
            Err(TokenError::NotAClass("string".to_string()))
        );
        let class = Type::parse("pkg:mod:Foo").unwrap();
        assert_eq!(
            ClassMember::for_type(&class, name).unwrap().to_string(),
            "pkg:mod:Foo:len"
        );
    }
}
