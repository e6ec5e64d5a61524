use std::{fmt::Display, sync::Arc};

use serde::{Serialize, Serializer};

/// Maximum number of characters kept from a raw location code.
pub const CODE_LENGTH: usize = 3;

/// A short, uppercase location code such as `BLR` or `MAA`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(Arc<str>);

impl Code {
    /// Trims the input, keeps the first three characters and uppercases them.
    /// Returns `None` when nothing is left after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let code: String = raw
            .trim()
            .chars()
            .take(CODE_LENGTH)
            .flat_map(char::to_uppercase)
            .take(CODE_LENGTH)
            .collect();
        if code.is_empty() {
            None
        } else {
            Some(Self(code.into()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Code {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Code {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl Serialize for Code {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[test]
fn parse_uppercases() {
    assert_eq!(Code::parse("blr").unwrap(), "BLR");
}

#[test]
fn parse_trims_and_truncates() {
    assert_eq!(Code::parse("  hyderabad ").unwrap(), "HYD");
}

#[test]
fn parse_keeps_short_codes() {
    assert_eq!(Code::parse("x").unwrap(), "X");
}

#[test]
fn parse_rejects_blank() {
    assert!(Code::parse("").is_none());
    assert!(Code::parse("   \t").is_none());
}

#[test]
fn parse_never_exceeds_length() {
    // 'ß' uppercases to "SS"
    let code = Code::parse("ßab").unwrap();
    assert_eq!(code.as_str().chars().count(), CODE_LENGTH);
    assert_eq!(code, "SSA");
}
