//! The comparable value union.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::big_int::BigInt;
use crate::bytes::Bytes;

/// Discriminant of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Address,
    FixedBytes,
    Bytes,
    Int,
    Uint,
    Bool,
    String,
    FixedArray,
    Array,
    Tuple,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Address => "address",
            ValueKind::FixedBytes => "fixedBytes",
            ValueKind::Bytes => "bytes",
            ValueKind::Int => "int",
            ValueKind::Uint => "uint",
            ValueKind::Bool => "bool",
            ValueKind::String => "string",
            ValueKind::FixedArray => "fixedArray",
            ValueKind::Array => "array",
            ValueKind::Tuple => "tuple",
        };
        f.write_str(name)
    }
}

/// An ordered, heterogeneous group of values
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tuple(Vec<Value>);

impl Tuple {
    pub fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[Value] {
        &self.0
    }

    pub fn push(&mut self, value: Value) {
        self.0.push(value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Value>> for Tuple {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl FromIterator<Value> for Tuple {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Tagged union over every operand kind the equality primitive accepts.
///
/// Two values are equal only when both the kind and the payload match, so
/// `Int(5)` and `Uint(5)` differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Value {
    Address(Address),
    FixedBytes(Bytes),
    Bytes(Bytes),
    Int(BigInt),
    Uint(BigInt),
    Bool(bool),
    String(String),
    FixedArray(Vec<Value>),
    Array(Vec<Value>),
    Tuple(Tuple),
}

impl Value {
    pub fn from_address(address: Address) -> Self {
        Value::Address(address)
    }

    pub fn from_fixed_bytes(bytes: Bytes) -> Self {
        Value::FixedBytes(bytes)
    }

    pub fn from_bytes(bytes: Bytes) -> Self {
        Value::Bytes(bytes)
    }

    /// Signed integer value; `i32` operands compare as `Int`.
    pub fn from_i32(value: i32) -> Self {
        Value::Int(BigInt::from_i32(value))
    }

    pub fn from_signed_big_int(value: BigInt) -> Self {
        Value::Int(value)
    }

    pub fn from_unsigned_big_int(value: BigInt) -> Self {
        Value::Uint(value)
    }

    pub fn from_boolean(value: bool) -> Self {
        Value::Bool(value)
    }

    pub fn from_string(value: impl Into<String>) -> Self {
        Value::String(value.into())
    }

    pub fn from_array(values: Vec<Value>) -> Self {
        Value::Array(values)
    }

    pub fn from_fixed_size_array(values: Vec<Value>) -> Self {
        Value::FixedArray(values)
    }

    pub fn from_tuple(tuple: Tuple) -> Self {
        Value::Tuple(tuple)
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Address(_) => ValueKind::Address,
            Value::FixedBytes(_) => ValueKind::FixedBytes,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::Int(_) => ValueKind::Int,
            Value::Uint(_) => ValueKind::Uint,
            Value::Bool(_) => ValueKind::Bool,
            Value::String(_) => ValueKind::String,
            Value::FixedArray(_) => ValueKind::FixedArray,
            Value::Array(_) => ValueKind::Array,
            Value::Tuple(_) => ValueKind::Tuple,
        }
    }

    pub fn to_address(&self) -> Option<Address> {
        match self {
            Value::Address(address) => Some(*address),
            _ => None,
        }
    }

    /// Payload of either byte kind.
    pub fn to_bytes(&self) -> Option<&Bytes> {
        match self {
            Value::Bytes(bytes) | Value::FixedBytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Payload of either integer kind.
    pub fn to_big_int(&self) -> Option<&BigInt> {
        match self {
            Value::Int(value) | Value::Uint(value) => Some(value),
            _ => None,
        }
    }

    pub fn to_i32(&self) -> Option<i32> {
        self.to_big_int().and_then(BigInt::to_i32)
    }

    pub fn to_boolean(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn to_string_value(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    /// Elements of either array kind.
    pub fn to_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) | Value::FixedArray(values) => Some(values),
            _ => None,
        }
    }

    pub fn to_tuple(&self) -> Option<&Tuple> {
        match self {
            Value::Tuple(tuple) => Some(tuple),
            _ => None,
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, values: &[Value], open: &str, close: &str) -> fmt::Result {
    f.write_str(open)?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", value)?;
    }
    f.write_str(close)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Address(address) => write!(f, "{}", address),
            Value::FixedBytes(bytes) | Value::Bytes(bytes) => write!(f, "{}", bytes),
            Value::Int(value) | Value::Uint(value) => write!(f, "{}", value),
            Value::Bool(value) => write!(f, "{}", value),
            Value::String(value) => f.write_str(value),
            Value::FixedArray(values) | Value::Array(values) => write_list(f, values, "[", "]"),
            Value::Tuple(tuple) => write_list(f, tuple.values(), "(", ")"),
        }
    }
}

impl From<Address> for Value {
    fn from(address: Address) -> Self {
        Value::from_address(address)
    }
}

impl From<Bytes> for Value {
    fn from(bytes: Bytes) -> Self {
        Value::from_bytes(bytes)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::from_boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::from_i32(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::from_signed_big_int(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::from_string(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::from_string(value)
    }
}

impl From<Tuple> for Value {
    fn from(tuple: Tuple) -> Self {
        Value::from_tuple(tuple)
    }
}
