use derive_more::From;
use serde::{Deserialize, Serialize};

///
/// Value
///
/// Closed set of property value kinds a node type can carry.
/// Defaults are stored as `Value`s and cloned into every new node.
///

#[derive(Clone, Debug, Default, Deserialize, From, PartialEq, Serialize)]
#[remain::sorted]
pub enum Value {
    Blob(Vec<u8>),
    Bool(bool),
    Float(f64),
    Int(i64),
    List(Vec<Self>),
    /// Entries keep declaration order; keys are not deduplicated.
    #[from(skip)]
    Map(Vec<(Self, Self)>),
    #[default]
    #[from(skip)]
    Null,
    /// Atom-like tag, e.g. the `unique` in `index: unique`.
    #[from(skip)]
    Symbol(String),
    Text(String),
    Uint(u64),
}

impl Value {
    #[must_use]
    pub fn symbol(s: impl Into<String>) -> Self {
        Self::Symbol(s.into())
    }

    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Everything except `Null` and `Bool(false)` is truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Bool(false))
    }

    /// Symbol or text payload, if this value carries a name.
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Symbol(s) | Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Stable human-readable kind label for diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Blob(_) => "Blob",
            Self::Bool(_) => "Bool",
            Self::Float(_) => "Float",
            Self::Int(_) => "Int",
            Self::List(_) => "List",
            Self::Map(_) => "Map",
            Self::Null => "Null",
            Self::Symbol(_) => "Symbol",
            Self::Text(_) => "Text",
            Self::Uint(_) => "Uint",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

///
/// Options
///
/// Ordered `key => value` list handed to a property or association
/// declaration. Keys are checked against the allowed set before use.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Options {
    entries: Vec<(String, Value)>,
}

impl Options {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Last value supplied for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

///
/// TESTS
///
