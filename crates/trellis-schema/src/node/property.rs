use crate::{types::IndexKind, value::Value};
use serde::{Deserialize, Serialize};

///
/// PropertyDescriptor
///
/// `default` is evaluated once when the property is declared and cloned
/// into every new node value.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PropertyDescriptor {
    pub name: String,

    #[serde(default)]
    pub default: Value,

    #[serde(default)]
    pub index: IndexKind,
}

impl PropertyDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, default: Value, index: IndexKind) -> Self {
        Self {
            name: name.into(),
            default,
            index,
        }
    }
}
