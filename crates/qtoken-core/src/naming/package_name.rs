use super::qname::QName;
use super::validate::{is_package_name, NAME_CURRENT, QNAME_DELIMITER};
use crate::error::{Result, TokenError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// PackageName is a qualified name whose segments may also contain dashes,
/// e.g. `my-org/my-lib`.
///
/// Serializes as the canonical string.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(try_from = "String", into = "String")]
pub struct PackageName(String);

impl PackageName {
    /// Create a PackageName, checking it against the package name grammar
    pub fn new(s: impl Into<String>) -> Result<Self> {
        let s = s.into();
        if is_package_name(&s) {
            Ok(Self(s))
        } else {
            Err(TokenError::InvalidPackageName(s))
        }
    }

    /// The `.` package name
    pub fn current() -> Self {
        Self(NAME_CURRENT.to_string())
    }

    pub fn is_current(&self) -> bool {
        self.0 == NAME_CURRENT
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the `/`-separated segments
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(QNAME_DELIMITER)
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<QName> for PackageName {
    fn from(qname: QName) -> Self {
        Self(qname.into())
    }
}

impl FromStr for PackageName {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for PackageName {
    type Error = TokenError;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for PackageName {
    type Error = TokenError;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<PackageName> for String {
    fn from(pkg: PackageName) -> String {
        pkg.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_from_str() {
        let pkg: PackageName = "my-org/my-lib".parse().unwrap();
        assert_eq!(pkg.to_string(), "my-org/my-lib");
        assert_eq!(pkg.segments().collect::<Vec<_>>(), vec!["my-org", "my-lib"]);
    }

    #[test]
    fn test_package_name_equality() {
        let pkg1 = PackageName::new("my/package").unwrap();
        let pkg2 = PackageName::new("my/package").unwrap();
        assert_eq!(pkg1, pkg2);
    }

    #[test]
    fn test_package_name_from_qname() {
        let qname = QName::new("test/pkg").unwrap();
        let pkg = PackageName::from(qname);
        assert_eq!(pkg.as_str(), "test/pkg");
    }

    #[test]
    fn test_package_name_rejects_delimiter() {
        assert_eq!(
            PackageName::new("pkg:mod"),
            Err(TokenError::InvalidPackageName("pkg:mod".to_string()))
        );
    }
}
