//! # Operation Names
//!
//! `OperationName` is the key handlers are stored under. It wraps an
//! `Arc<str>`, so cloning a name into the handler table, an error or a
//! registration record is O(1), and it compares, orders and hashes exactly
//! like the underlying string. Lookups by `&str` go through [`Borrow`].

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A case-sensitive, shared operation name.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OperationName(Arc<str>);

impl OperationName {
    /// Create a new operation name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for OperationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

impl fmt::Display for OperationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for OperationName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for OperationName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OperationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OperationName {
    fn from(name: &str) -> Self {
        Self(Arc::from(name))
    }
}

impl From<String> for OperationName {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl From<&OperationName> for OperationName {
    fn from(name: &OperationName) -> Self {
        name.clone()
    }
}

impl PartialEq<str> for OperationName {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for OperationName {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}
