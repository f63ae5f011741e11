use indexmap::IndexMap;
use serde::Serialize;

/// A scalar or structured value in an attribute mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    I64(i64),

    /// Integer literal outside the `i64` range, kept as its decimal digits.
    BigInt(String),

    F64(f64),
    String(String),
    List(Vec<Value>),
    Map(Attributes),
}

/// Ordered attribute mapping, rendered by the emission layer as annotation
/// arguments or metadata entries. Keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Attributes {
    entries: IndexMap<String, Value>,
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(value) => Some(*value),
            _ => None,
        }
    }

    /// Decimal digits of an integer literal of any size.
    pub fn as_integer_literal(&self) -> Option<String> {
        match self {
            Self::I64(value) => Some(value.to_string()),
            Self::BigInt(digits) => Some(digits.clone()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Attributes> {
        match self {
            Self::Map(value) => Some(value),
            _ => None,
        }
    }
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing any previous value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Sets `key` only when `value` is present. Absent options are omitted
    /// rather than emitted as null.
    pub fn insert_opt<V: Into<Value>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl From<Attributes> for Value {
    fn from(value: Attributes) -> Self {
        Self::Map(value)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut ret = Self::new();
        for (key, value) in iter {
            ret.insert(key, value);
        }
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_order() {
        let mut attrs = Attributes::new();
        attrs.insert("name", "title");
        attrs.insert("type", "string");
        attrs.insert("nullable", true);
        attrs.insert("name", "`title`");

        assert_eq!(attrs.keys().collect::<Vec<_>>(), ["name", "type", "nullable"]);
        assert_eq!(attrs.get("name"), Some(&Value::from("`title`")));
    }

    #[test]
    fn insert_opt_skips_none() {
        let mut attrs = Attributes::new();
        attrs.insert_opt("fetch", None::<&str>);
        attrs.insert_opt("orphanRemoval", Some(true));

        assert_eq!(attrs.len(), 1);
        assert!(!attrs.contains_key("fetch"));
    }
}
