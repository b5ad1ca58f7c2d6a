use crate::value::Value;
use derive_more::{Deref, IntoIterator};
use serde::{
    Serialize,
    ser::{SerializeMap, Serializer},
};

///
/// PullValue
///
/// One resolved entry of a pull result: a scalar attribute, a projected
/// to-one record, or an ordered projection of a to-many relation.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PullValue {
    Scalar(Value),
    One(PullMap),
    Many(Vec<PullMap>),
}

///
/// PullMap
///
/// Insertion-ordered result mapping. Backed by an entry vector so output
/// order stays the resolution order; maps are small and key lookups are
/// linear scans.
///
/// Absent resolutions never enter the map; there are no null
/// placeholders for missing fields.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator, PartialEq)]
#[into_iterator(owned, ref)]
pub struct PullMap(Vec<(String, PullValue)>);

impl PullMap {
    /// Construct an empty result mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Value for `name`, if the key resolved to anything.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PullValue> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Insert an entry. A duplicate key overwrites the existing value
    /// in place, keeping the first occurrence's position.
    pub fn insert(&mut self, name: impl Into<String>, value: PullValue) {
        let name = name.into();
        match self.0.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Shallow union with `other`; entries of `other` win on collision.
    pub fn merge(&mut self, other: Self) {
        for (name, value) in other {
            self.insert(name, value);
        }
    }

    /// Project the result into plain JSON.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Serialize for PullMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<N: Into<String>> FromIterator<(N, PullValue)> for PullMap {
    fn from_iter<I: IntoIterator<Item = (N, PullValue)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (name, value) in iter {
            out.insert(name, value);
        }
        out
    }
}
