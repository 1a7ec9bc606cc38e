//! Newtype wrapper for template names
//!
//! A template name is the resolved identity a loader knows a template by.
//! The wrapper prevents mixing template names up with other strings flowing
//! through the engine, and keeps clones cheap so identities can be carried
//! in every execution frame.

use std::fmt;
use std::sync::Arc;

/// The resolved name of a template
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TemplateName(Arc<str>);

impl TemplateName {
    /// Creates a new TemplateName from a string
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Returns the string representation of this template name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TemplateName {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for TemplateName {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<Arc<str>> for TemplateName {
    fn from(s: Arc<str>) -> Self {
        Self(s)
    }
}

impl AsRef<str> for TemplateName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TemplateName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TemplateName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
