use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Opaque identifier issued when a receipt is accepted.
///
/// Ids are generated by the store and handed back to clients, who later
/// present them on lookup. A lookup id is untrusted input, so any string can
/// be wrapped with [`ReceiptId::new`]; [`ReceiptId::parse`] additionally
/// checks that the id is safe to embed in a URL path segment.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Wrap a string without validation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Wrap a UUID in its hyphenated lowercase form.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid.hyphenated().to_string())
    }

    /// Parse an id, rejecting empty strings and characters outside the
    /// unreserved URL set (`A-Z a-z 0-9 - . _ ~`).
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        if s.is_empty() {
            return Err(TypeError::EmptyId);
        }
        if let Some(found) = s.chars().find(|c| !is_unreserved(*c)) {
            return Err(TypeError::InvalidIdCharacter { found });
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}

impl fmt::Debug for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReceiptId({})", self.0)
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<uuid::Uuid> for ReceiptId {
    fn from(uuid: uuid::Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}
