use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// A 10- or 13-digit ISBN. Only plain ASCII digits are accepted, no hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Isbn(String);

impl Isbn {
    pub fn parse(candidate: &str) -> Option<Self> {
        is_isbn(candidate).then(|| Self(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_isbn13(&self) -> bool {
        self.0.len() == 13
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Isbn {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Shape check only: exactly 10 or 13 ASCII digits. Check digits are not verified.
pub fn is_isbn(value: &str) -> bool {
    matches!(value.len(), 10 | 13) && value.bytes().all(|b| b.is_ascii_digit())
}
