use super::name::Name;
use super::validate::{is_qname, NAME_CURRENT, QNAME_DELIMITER};
use crate::error::{Result, TokenError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// QName is a qualified name: simple names separated by `/`, e.g. `collections/list`.
///
/// Module names are qualified names. The last segment is the tail; everything
/// before it is the namespace.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(try_from = "String", into = "String")]
pub struct QName(String);

impl QName {
    /// Create a QName, checking every segment against the simple name grammar
    pub fn new(s: impl Into<String>) -> Result<Self> {
        let s = s.into();
        if is_qname(&s) {
            Ok(Self(s))
        } else {
            Err(TokenError::InvalidQName(s))
        }
    }

    /// Append `name` to a namespace: `join("a/b", "c")` is `a/b/c`.
    pub fn join(namespace: &QName, name: &Name) -> Self {
        Self(format!("{}{}{}", namespace, QNAME_DELIMITER, name))
    }

    /// The `.` module name
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
    pub fn segments(&self) -> impl Iterator<Item = Name> + '_ {
        self.0.split(QNAME_DELIMITER).map(Name::from_validated)
    }

    /// Everything before the last `/`, or `None` for a single-segment name
    pub fn namespace(&self) -> Option<QName> {
        self.0
            .rfind(QNAME_DELIMITER)
            .map(|ix| QName(self.0[..ix].to_string()))
    }

    /// The last segment
    pub fn tail(&self) -> Name {
        match self.0.rfind(QNAME_DELIMITER) {
            Some(ix) => Name::from_validated(&self.0[ix + 1..]),
            None => Name::from_validated(&self.0),
        }
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for QName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Name> for QName {
    fn from(name: Name) -> Self {
        Self(name.into())
    }
}

impl FromStr for QName {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for QName {
    type Error = TokenError;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for QName {
    type Error = TokenError;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<QName> for String {
    fn from(qname: QName) -> String {
        qname.0
    }
}
