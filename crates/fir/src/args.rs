use std::{collections::BTreeMap, fmt, slice};

/// A bound parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Flag(bool),
    One(String),
    Many(Vec<String>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Flag(it) => fmt::Display::fmt(it, f),
            Value::One(it) => fmt::Debug::fmt(it, f),
            Value::Many(it) => fmt::Debug::fmt(it, f),
        }
    }
}

/// The parsed namespace handed to a handler, keyed by parameter name.
///
/// Flags are always bound. Positionals are bound whenever parsing succeeded,
/// optionals only when they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    values: BTreeMap<String, Value>,
}

impl Arguments {
    pub fn new() -> Arguments {
        Arguments::default()
    }

    pub(crate) fn insert(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The value of a single-valued parameter.
    pub fn value(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            Value::One(it) => Some(it.as_str()),
            Value::Flag(_) | Value::Many(_) => None,
        }
    }

    /// Every value of a parameter; a single value is a one-element slice.
    pub fn values(&self, name: &str) -> Option<&[String]> {
        match self.get(name)? {
            Value::One(it) => Some(slice::from_ref(it)),
            Value::Many(it) => Some(it.as_slice()),
            Value::Flag(_) => None,
        }
    }

    /// The values of a parameter joined with `sep`, e.g. a multi-word task name.
    pub fn joined(&self, name: &str, sep: &str) -> Option<String> {
        self.values(name).map(|it| it.join(sep))
    }

    /// False for absent flags and for anything that isn't a flag.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.get(name), Some(Value::Flag(true)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
