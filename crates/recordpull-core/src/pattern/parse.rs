use crate::{error::PullError, pattern::Pattern};
use serde_json::Value as Json;

impl Pattern {
    ///
    /// Parse the wire grammar into a pattern.
    ///
    /// Accepted shapes:
    /// - `"*"` → wildcard
    /// - any other string → field name
    /// - array → fragment sequence, in array order
    /// - object → nested mapping, in key order
    ///
    /// Numbers, booleans, and null are not patterns; they fail with
    /// [`PullError::InvalidPattern`] carrying the offending fragment.
    ///
    pub fn from_json(value: &Json) -> Result<Self, PullError> {
        match value {
            Json::String(text) => Ok(Self::from(text.as_str())),
            Json::Array(items) => items
                .iter()
                .map(Self::from_json)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Seq),
            Json::Object(entries) => entries
                .iter()
                .map(|(name, child)| Ok((name.clone(), Self::from_json(child)?)))
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Nested),
            other => Err(PullError::invalid_pattern(other)),
        }
    }

    /// Parse the wire grammar from raw JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, PullError> {
        let value: Json =
            serde_json::from_str(text).map_err(|_| PullError::invalid_pattern(text))?;
        Self::from_json(&value)
    }
}
