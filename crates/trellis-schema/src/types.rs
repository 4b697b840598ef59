use crate::value::Value;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Cardinality
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum Cardinality {
    /// `nil | id`
    One,
    /// ordered sequence of ids
    Many,
}

///
/// IndexKind
///
/// Lookup classification of a property. `Unique` and `Primary` both
/// imply uniqueness; `NonUnique` is the plain boolean index.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum IndexKind {
    #[default]
    None,
    NonUnique,
    Unique,
    Primary,
}

impl IndexKind {
    /// Normalize an `index` option value.
    ///
    /// `primary` and `unique` symbols pass through, any other truthy value
    /// becomes a non-unique index, everything else means no index.
    #[must_use]
    pub fn from_option(value: &Value) -> Self {
        match value {
            Value::Symbol(s) if s == "primary" => Self::Primary,
            Value::Symbol(s) if s == "unique" => Self::Unique,
            v if v.is_truthy() => Self::NonUnique,
            _ => Self::None,
        }
    }

    #[must_use]
    pub const fn is_indexed(self) -> bool {
        !matches!(self, Self::None)
    }

    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Unique | Self::Primary)
    }
}

impl From<IndexKind> for Value {
    fn from(kind: IndexKind) -> Self {
        match kind {
            IndexKind::None => Self::Bool(false),
            IndexKind::NonUnique => Self::Bool(true),
            IndexKind::Unique => Self::symbol("unique"),
            IndexKind::Primary => Self::symbol("primary"),
        }
    }
}

///
/// MetaField
///
/// Fields every node type carries ahead of its declared fields.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum MetaField {
    #[display("id")]
    Id,
    #[display("repo")]
    Repo,
}

impl MetaField {
    pub const ALL: [Self; 2] = [Self::Id, Self::Repo];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Repo => "repo",
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_option_normalizes() {
        let cases = [
            (Value::Null, IndexKind::None),
            (Value::Bool(false), IndexKind::None),
            (Value::Bool(true), IndexKind::NonUnique),
            (Value::symbol("unique"), IndexKind::Unique),
            (Value::symbol("primary"), IndexKind::Primary),
            (Value::symbol("sorted"), IndexKind::NonUnique),
            (Value::text("unique"), IndexKind::NonUnique),
            (Value::Int(1), IndexKind::NonUnique),
        ];

        for (value, expected) in cases {
            assert_eq!(IndexKind::from_option(&value), expected, "value {value:?}");
        }
    }

    #[test]
    fn index_kind_round_trips_through_option_value() {
        for kind in [
            IndexKind::None,
            IndexKind::NonUnique,
            IndexKind::Unique,
            IndexKind::Primary,
        ] {
            assert_eq!(IndexKind::from_option(&kind.into()), kind);
        }
    }

    #[test]
    fn unique_covers_primary() {
        assert!(IndexKind::Primary.is_unique());
        assert!(IndexKind::Unique.is_unique());
        assert!(!IndexKind::NonUnique.is_unique());
        assert!(!IndexKind::None.is_indexed());
    }
}
