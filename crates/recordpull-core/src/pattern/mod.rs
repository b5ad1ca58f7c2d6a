mod parse;


use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

///
/// Pattern
///
/// The pull grammar. A closed shape set; resolution is an exhaustive
/// match, so an unrecognized shape is only reachable through the wire
/// parser, never through the engine.
///
/// Wildcard → all scalar attributes plus all nested-by-default relations.
/// Field    → one attribute or relation name.
/// Seq      → fragments merged left-to-right, last write wins per key.
/// Nested   → field → child pattern, applied to the related record(s).
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Pattern {
    Wildcard,
    Field(String),
    Seq(Vec<Self>),
    Nested(Vec<(String, Self)>),
}

impl Pattern {
    /// Single-field pattern.
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    /// Ordered fragment sequence.
    #[must_use]
    pub fn seq(patterns: impl IntoIterator<Item = Self>) -> Self {
        Self::Seq(patterns.into_iter().collect())
    }

    /// Nested field → child-pattern mapping, in declaration order.
    pub fn nested(entries: impl IntoIterator<Item = (impl Into<String>, Self)>) -> Self {
        Self::Nested(
            entries
                .into_iter()
                .map(|(name, pattern)| (name.into(), pattern))
                .collect(),
        )
    }
}

impl From<&str> for Pattern {
    /// `"*"` is the wildcard token; any other text names a field.
    fn from(name: &str) -> Self {
        if name == "*" {
            Self::Wildcard
        } else {
            Self::Field(name.to_string())
        }
    }
}

impl From<Vec<Self>> for Pattern {
    fn from(patterns: Vec<Self>) -> Self {
        Self::Seq(patterns)
    }
}

///
/// Patterns serialize back into the wire grammar they parse from:
/// `"*"` | field string | array of patterns | object of field → pattern.
///

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Wildcard => serializer.serialize_str("*"),
            Self::Field(name) => serializer.serialize_str(name),
            Self::Seq(patterns) => {
                let mut seq = serializer.serialize_seq(Some(patterns.len()))?;
                for pattern in patterns {
                    seq.serialize_element(pattern)?;
                }
                seq.end()
            }
            Self::Nested(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (name, pattern) in entries {
                    map.serialize_entry(name, pattern)?;
                }
                map.end()
            }
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(rendered) => f.write_str(&rendered),
            Err(_) => write!(f, "{self:?}"),
        }
    }
}
