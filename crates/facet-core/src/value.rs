use crate::traits::Record;
use chrono::{DateTime, SecondsFormat, Utc};
use derive_more::{Deref, DerefMut, IntoIterator};
use serde::{
    Serialize, Serializer,
    ser::{SerializeMap, SerializeSeq},
};

///
/// Scalar
///
/// Leaf value carried through projection unchanged. `Null` doubles as the
/// projected form of an absent single relation.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::Uint(v) => serializer.serialize_u64(*v),
            Self::Float(v) => serializer.serialize_f64(*v),
            Self::Text(v) => serializer.serialize_str(v),
        }
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for Scalar {
    fn from(v: u32) -> Self {
        Self::Uint(u64::from(v))
    }
}

impl From<u64> for Scalar {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

///
/// FieldValue
///
/// Tagged result of one named-field read on a [`Record`]. The resolver
/// dispatches on this tag instead of inspecting runtime types; the record
/// implementation owns the mapping from its storage shape to these variants.
///

pub enum FieldValue<'a> {
    Scalar(Scalar),
    Timestamp(DateTime<Utc>),
    One(Option<&'a dyn Record>),
    Many(Vec<&'a dyn Record>),
}

/// Render a timestamp the way the transport layer expects it: RFC 3339 with
/// an explicit `+00:00` offset, subseconds only when nonzero.
#[must_use]
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

///
/// Projected
///
/// Output tree of one projection call: scalar leaves, ordered maps for
/// projected records, lists for projected collections. Serializes to the
/// matching JSON shape with map entries in insertion order.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Projected {
    Scalar(Scalar),
    List(Vec<Projected>),
    Map(ProjectedMap),
}

impl Projected {
    #[must_use]
    pub const fn null() -> Self {
        Self::Scalar(Scalar::Null)
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Scalar::Null))
    }

    /// True for `Null`, an empty string, an empty list, or an empty map.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Scalar(Scalar::Null) => true,
            Self::Scalar(Scalar::Text(text)) => text.is_empty(),
            Self::Scalar(_) => false,
            Self::List(items) => items.is_empty(),
            Self::Map(map) => map.is_empty(),
        }
    }

    /// Entry lookup on a map-shaped value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Map(map) => map.get(key),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Scalar(Scalar::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Scalar(Scalar::Int(v)) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Scalar(Scalar::Uint(v)) => Some(*v),
            Self::Scalar(Scalar::Int(v)) if *v >= 0 => Some(v.unsigned_abs()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::Text(v)) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&Vec<Self>> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl Serialize for Projected {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Scalar(scalar) => scalar.serialize(serializer),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(map) => map.serialize(serializer),
        }
    }
}

impl From<Scalar> for Projected {
    fn from(v: Scalar) -> Self {
        Self::Scalar(v)
    }
}

macro_rules! projected_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Projected {
                fn from(v: $ty) -> Self {
                    Self::Scalar(v.into())
                }
            }
        )*
    };
}

projected_from_scalar!(bool, i32, i64, u32, u64, f64, &str, String);

impl From<ProjectedMap> for Projected {
    fn from(map: ProjectedMap) -> Self {
        Self::Map(map)
    }
}

impl From<Vec<Projected>> for Projected {
    fn from(items: Vec<Projected>) -> Self {
        Self::List(items)
    }
}

///
/// ProjectedMap
///
/// Ordered key/value mapping assembled from resolved fields, in plan order.
/// Inserting an existing key overwrites its value in place, keeping the
/// original position.
///

#[derive(Clone, Debug, Default, Deref, DerefMut, IntoIterator, PartialEq)]
pub struct ProjectedMap(Vec<(String, Projected)>);

impl ProjectedMap {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Projected>) {
        let key = key.into();
        let value = value.into();

        if let Some(slot) = self.0.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.0.push((key, value));
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Projected> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for ProjectedMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl FromIterator<(String, Projected)> for ProjectedMap {
    fn from_iter<I: IntoIterator<Item = (String, Projected)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
