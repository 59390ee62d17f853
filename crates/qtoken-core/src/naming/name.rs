use super::validate::{is_name, NAME_CURRENT};
use crate::error::{Result, TokenError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A simple identifier: a module member, class member, local or primitive type name.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Create a Name, checking it against the simple name grammar
    pub fn new(s: impl Into<String>) -> Result<Self> {
        let s = s.into();
        if is_name(&s) {
            Ok(Self(s))
        } else {
            Err(TokenError::InvalidName(s))
        }
    }

    /// The `.` name, meaning "the one currently being emitted"
    pub fn current() -> Self {
        Self(NAME_CURRENT.to_string())
    }

    pub fn is_current(&self) -> bool {
        self.0 == NAME_CURRENT
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn from_validated(s: &str) -> Self {
        debug_assert!(is_name(s));
        Self(s.to_string())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Name {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Name {
    type Error = TokenError;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Name {
    type Error = TokenError;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> String {
        name.0
    }
}
