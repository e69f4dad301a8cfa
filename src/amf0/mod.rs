//! AMF0 codec for the subset of types carried by RTMP command messages.
//!
//! Supported markers:
//! ```text
//! 0x00 - Number (IEEE 754 double)
//! 0x01 - Boolean
//! 0x02 - String (UTF-8, 16-bit length prefix)
//! 0x03 - Object (key-value pairs until 0x000009)
//! 0x05 - Null
//! 0x08 - ECMA Array (32-bit count, key-value pairs, 3-byte tail)
//! ```

use indexmap::IndexMap;

mod config;
pub mod decoding;
pub mod encoding;


pub use config::{DecoderConfig, ObjectValueMarkers};

const NUMBER: u8 = 0x00;
const BOOLEAN: u8 = 0x01;
const STRING: u8 = 0x02;
const OBJECT: u8 = 0x03;
const NULL: u8 = 0x05;
const ARRAY: u8 = 0x08;

const OBJECT_END_MARKER: [u8; 3] = [0x00, 0x00, 0x09];

#[derive(Debug, Clone, PartialEq)]
pub enum Amf0Value {
    Number(f64),
    Boolean(bool),
    String(String),
    Object(Properties),
    Null,
    /// ECMA array, decoded as an associative list of its properties.
    Array(Properties),
}

impl Amf0Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Amf0Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Amf0Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Amf0Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Properties of an Object or Array.
    pub fn as_properties(&self) -> Option<&Properties> {
        match self {
            Amf0Value::Object(props) | Amf0Value::Array(props) => Some(props),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Amf0Value::Null)
    }

    fn type_name(&self) -> &'static str {
        match self {
            Amf0Value::Number(_) => "Number",
            Amf0Value::Boolean(_) => "Boolean",
            Amf0Value::String(_) => "String",
            Amf0Value::Object(_) => "Object",
            Amf0Value::Null => "Null",
            Amf0Value::Array(_) => "Array",
        }
    }
}

impl From<f64> for Amf0Value {
    fn from(v: f64) -> Self {
        Amf0Value::Number(v)
    }
}

impl From<bool> for Amf0Value {
    fn from(v: bool) -> Self {
        Amf0Value::Boolean(v)
    }
}

impl From<String> for Amf0Value {
    fn from(v: String) -> Self {
        Amf0Value::String(v)
    }
}

impl From<&str> for Amf0Value {
    fn from(v: &str) -> Self {
        Amf0Value::String(v.to_string())
    }
}

/// Ordered property list of an Object or Array.
///
/// Entries keep insertion order. Inserting a key that is already present
/// replaces its value without moving it. Two lists are equal only if they
/// hold the same entries in the same order.
#[derive(Debug, Clone, Default)]
pub struct Properties(IndexMap<String, Amf0Value>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(IndexMap::with_capacity(capacity))
    }

    /// Returns the previous value if `key` was already present.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Amf0Value>,
    ) -> Option<Amf0Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Amf0Value> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Amf0Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for Properties {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl<K: Into<String>, V: Into<Amf0Value>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Properties::new();
        for (key, value) in iter {
            props.insert(key, value);
        }
        props
    }
}

impl IntoIterator for Properties {
    type Item = (String, Amf0Value);
    type IntoIter = indexmap::map::IntoIter<String, Amf0Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
