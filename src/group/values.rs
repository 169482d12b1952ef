//! Ordered, nested name → value mappings.

use crate::param::ParamValue;

/// One entry of a [`Values`] mapping.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueEntry {
    /// A parameter's value.
    Value(ParamValue),
    /// A nested group's values.
    Group(Values),
}

impl ValueEntry {
    pub fn as_value(&self) -> Option<&ParamValue> {
        match self {
            Self::Value(v) => Some(v),
            Self::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&Values> {
        match self {
            Self::Group(g) => Some(g),
            Self::Value(_) => None,
        }
    }
}

impl From<ParamValue> for ValueEntry {
    fn from(value: ParamValue) -> Self {
        Self::Value(value)
    }
}

macro_rules! entry_from_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ValueEntry {
                fn from(value: $ty) -> Self {
                    Self::Value(ParamValue::from(value))
                }
            }
        )*
    };
}

entry_from_value!(f64, bool, &str, String);

impl From<Values> for ValueEntry {
    fn from(values: Values) -> Self {
        Self::Group(values)
    }
}

/// Values of a parameter group, keyed by member name in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Values {
    entries: Vec<(String, ValueEntry)>,
}

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Values::insert`].
    pub fn with(mut self, name: impl Into<String>, entry: impl Into<ValueEntry>) -> Self {
        self.insert(name, entry);
        self
    }

    /// Inserts or replaces an entry. Replacing keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, entry: impl Into<ValueEntry>) {
        let name = name.into();
        let entry = entry.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = entry,
            None => self.entries.push((name, entry)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ValueEntry> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, entry)| entry)
    }

    /// Returns the leaf value stored under `name`.
    pub fn value(&self, name: &str) -> Option<&ParamValue> {
        self.get(name).and_then(ValueEntry::as_value)
    }

    /// Returns the nested mapping stored under `name`.
    pub fn group(&self, name: &str) -> Option<&Values> {
        self.get(name).and_then(ValueEntry::as_group)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValueEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, ValueEntry)> for Values {
    fn from_iter<I: IntoIterator<Item = (K, ValueEntry)>>(iter: I) -> Self {
        let mut values = Values::new();
        for (name, entry) in iter {
            values.insert(name, entry);
        }
        values
    }
}
