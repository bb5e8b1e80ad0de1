//! Stored entities and their field values.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use graphtest_values::{Address, BigInt, Bytes};

/// Name of the field every entity is keyed by
pub const ID_FIELD: &str = "id";

/// A field value of a stored entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum StoreValue {
    String(String),
    Int(i32),
    Int8(i64),
    BigInt(BigInt),
    Bool(bool),
    Bytes(Bytes),
    List(Vec<StoreValue>),
    Null,
}

impl StoreValue {
    pub fn is_null(&self) -> bool {
        matches!(self, StoreValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StoreValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Rendered id for the kinds an entity can be keyed by.
    pub fn as_id(&self) -> Option<String> {
        match self {
            StoreValue::String(_) | StoreValue::Bytes(_) | StoreValue::Int8(_) => Some(self.to_string()),
            _ => None,
        }
    }
}

/// The text `field_equals` compares against.
impl fmt::Display for StoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreValue::String(s) => f.write_str(s),
            StoreValue::Int(v) => write!(f, "{}", v),
            StoreValue::Int8(v) => write!(f, "{}", v),
            StoreValue::BigInt(v) => write!(f, "{}", v),
            StoreValue::Bool(v) => write!(f, "{}", v),
            StoreValue::Bytes(v) => write!(f, "{}", v),
            StoreValue::List(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                f.write_str("]")
            }
            StoreValue::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for StoreValue {
    fn from(value: &str) -> Self {
        StoreValue::String(value.to_string())
    }
}

impl From<String> for StoreValue {
    fn from(value: String) -> Self {
        StoreValue::String(value)
    }
}

impl From<i32> for StoreValue {
    fn from(value: i32) -> Self {
        StoreValue::Int(value)
    }
}

impl From<i64> for StoreValue {
    fn from(value: i64) -> Self {
        StoreValue::Int8(value)
    }
}

impl From<bool> for StoreValue {
    fn from(value: bool) -> Self {
        StoreValue::Bool(value)
    }
}

impl From<BigInt> for StoreValue {
    fn from(value: BigInt) -> Self {
        StoreValue::BigInt(value)
    }
}

impl From<Bytes> for StoreValue {
    fn from(value: Bytes) -> Self {
        StoreValue::Bytes(value)
    }
}

/// Addresses are stored as their raw bytes.
impl From<Address> for StoreValue {
    fn from(value: Address) -> Self {
        StoreValue::Bytes(Bytes::from(value))
    }
}

impl<T: Into<StoreValue>> From<Vec<T>> for StoreValue {
    fn from(values: Vec<T>) -> Self {
        StoreValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<StoreValue>> From<Option<T>> for StoreValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(StoreValue::Null, Into::into)
    }
}

/// An entity: an ordered map of field name to value
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity(BTreeMap<String, StoreValue>);

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `set`.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<StoreValue>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<StoreValue>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&StoreValue> {
        self.0.get(field)
    }

    pub fn remove(&mut self, field: &str) -> Option<StoreValue> {
        self.0.remove(field)
    }

    pub fn id(&self) -> Option<String> {
        self.get(ID_FIELD).and_then(StoreValue::as_id)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &StoreValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}
