use super::package::Package;
use crate::error::{Result, TokenError};
use crate::naming::{ModuleName, QName};
use crate::token::{Token, TOKEN_DELIMITER};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub(crate) const KIND: &str = "module";

/// A token addressing a module: `<Package> ":" <ModuleName>`.
///
/// The module name `.` means "the current module".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "String", into = "String")]
pub struct Module {
    package: Package,
    name: ModuleName,
}

impl Module {
    pub fn new(package: Package, name: ModuleName) -> Self {
        Self { package, name }
    }

    /// Build a module token from a package and an unchecked module name.
    pub fn with_name(package: Package, name: &str) -> Result<Self> {
        QName::new(name).map(|name| Self::new(package, name))
    }

    /// The current module of `package`
    pub fn current(package: Package) -> Self {
        Self::new(package, QName::current())
    }

    /// Parse a module token; it must contain exactly one delimiter.
    pub fn parse(s: &str) -> Result<Self> {
        match s.split_once(TOKEN_DELIMITER) {
            Some((pkg, name)) if !name.contains(TOKEN_DELIMITER) => {
                Ok(Self::new(Package::parse(pkg)?, QName::new(name)?))
            }
            _ => Err(TokenError::delimiters(KIND, s, 1)),
        }
    }

    pub fn package(&self) -> &Package {
        &self.package
    }

    pub fn name(&self) -> &ModuleName {
        &self.name
    }

    pub fn is_current(&self) -> bool {
        self.name.is_current()
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.package, TOKEN_DELIMITER, self.name)
    }
}

impl FromStr for Module {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Module {
    type Error = TokenError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Module> for String {
    fn from(module: Module) -> String {
        module.to_string()
    }
}

impl From<Module> for Token {
    fn from(module: Module) -> Self {
        Token::new_unchecked(module.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_parse() {
        let module = Module::parse("pkg:mod").unwrap();
        assert_eq!(module.package().to_string(), "pkg");
        assert_eq!(module.name().as_str(), "mod");
    }

    #[test]
    fn test_module_qualified_name() {
        let module = Module::parse("my-org/lib:collections/list").unwrap();
        assert_eq!(module.name().tail().as_str(), "list");
        assert_eq!(module.to_string(), "my-org/lib:collections/list");
    }

    #[test]
    fn test_module_with_name_validates() {
        let pkg = Package::parse("pkg").unwrap();
        assert!(Module::with_name(pkg.clone(), "mod").is_ok());
        assert_eq!(
            Module::with_name(pkg, "bad-name"),
            Err(TokenError::InvalidQName("bad-name".to_string()))
        );
    }

    #[test]
    fn test_module_wrong_depth() {
        assert!(matches!(
            Module::parse("pkg"),
            Err(TokenError::DelimiterCount { expected: 1, found: 0, .. })
        ));
        assert!(matches!(
            Module::parse("pkg:mod:Foo"),
            Err(TokenError::DelimiterCount { expected: 1, found: 2, .. })
        ));
    }

    #[test]
    fn test_current_module() {
        let module = Module::current(Package::current());
        assert!(module.is_current());
        assert_eq!(module.to_string(), ".:.");
    }
}
