//! Unknown-field store.
//!
//! Every node keeps the members it could not match against its known field
//! set, in input order, so that an encode after a decode reproduces them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered mapping of unrecognized member names to their raw JSON values.
///
/// Serializes as a plain map, so serde-derived nodes can `#[serde(flatten)]`
/// it to collect unknown members the same way the hand-written codecs do.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Unrecognized(IndexMap<String, Value>);

impl Unrecognized {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry. A repeated key keeps its first position and takes
    /// the latest value, matching how the JSON parser treats duplicate members.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> IndexMap<String, Value> {
        self.0
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Unrecognized {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Unrecognized(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl IntoIterator for Unrecognized {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Accessors shared by every node that carries an [`Unrecognized`] store.
pub trait HasUnrecognized {
    fn unrecognized(&self) -> &Unrecognized;

    fn unrecognized_mut(&mut self) -> &mut Unrecognized;

    /// Raw value of an unrecognized member, `None` if it was not present.
    fn unrecognized_property(&self, name: &str) -> Option<&Value> {
        self.unrecognized().get(name)
    }

    /// Names of all unrecognized members in input order.
    fn unrecognized_property_names(&self) -> Vec<&str> {
        self.unrecognized().names().collect()
    }
}
