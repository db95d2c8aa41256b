//! The attribute node: an insertion-ordered bag of named, tagged values.
//!
//! Every card document type is a [`Node`]; what distinguishes a `TextBlock` from
//! a `Container` is only which fields its kind writes (see [`crate::emit`]).
//! Nodes own their children outright, so a tree can never alias or cycle.
use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::Number;

use crate::enums::EnumValue;
use crate::error::{CardError, Result};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// One field value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// Serialized as its wire string, never its symbolic name.
    Enum(EnumValue),
    Node(Box<Node>),
    Nodes(Vec<Node>),
    /// Primitives, or a mix of primitives and nodes (e.g. rich text inlines).
    List(Vec<AttrValue>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    fields: IndexMap<String, AttrValue>,
}

// ————————————————————————————————————————————————————————————————————————————
// ATTRIBUTE VALUE
// ————————————————————————————————————————————————————————————————————————————

impl AttrValue {
    /// Falsy: null, `false`, zero, `""`, an empty node or sequence.
    /// Enum values always count as supplied.
    pub fn is_truthy(&self) -> bool {
        match self {
            AttrValue::Null => false,
            AttrValue::Bool(b) => *b,
            AttrValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            AttrValue::String(s) => !s.is_empty(),
            AttrValue::Enum(_) => true,
            AttrValue::Node(node) => !node.is_empty(),
            AttrValue::Nodes(nodes) => !nodes.is_empty(),
            AttrValue::List(items) => !items.is_empty(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Text as it would appear on the wire: plain strings and enum wire strings.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            AttrValue::Enum(e) => Some(e.wire()),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            AttrValue::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_nodes(&self) -> Option<&[Node]> {
        match self {
            AttrValue::Nodes(nodes) => Some(nodes),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::String(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::String(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

macro_rules! from_integer {
    ($($t:ty),+) => {
        $(impl From<$t> for AttrValue {
            fn from(value: $t) -> Self {
                AttrValue::Number(Number::from(value))
            }
        })+
    };
}

from_integer!(i32, i64, u32, u64, usize);

impl From<f64> for AttrValue {
    /// Non-finite floats have no JSON form and become null.
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(AttrValue::Null, AttrValue::Number)
    }
}

impl From<Number> for AttrValue {
    fn from(value: Number) -> Self {
        AttrValue::Number(value)
    }
}

impl From<EnumValue> for AttrValue {
    fn from(value: EnumValue) -> Self {
        AttrValue::Enum(value)
    }
}

impl From<Node> for AttrValue {
    fn from(value: Node) -> Self {
        AttrValue::Node(Box::new(value))
    }
}

impl From<Vec<Node>> for AttrValue {
    fn from(value: Vec<Node>) -> Self {
        AttrValue::Nodes(value)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(value: Vec<String>) -> Self {
        AttrValue::List(value.into_iter().map(AttrValue::String).collect())
    }
}

impl<'a> From<Vec<&'a str>> for AttrValue {
    fn from(value: Vec<&'a str>) -> Self {
        AttrValue::List(value.into_iter().map(AttrValue::from).collect())
    }
}

impl From<Vec<AttrValue>> for AttrValue {
    /// A non-empty sequence made only of nodes collapses to [`AttrValue::Nodes`].
    fn from(items: Vec<AttrValue>) -> Self {
        let all_nodes = !items.is_empty() && items.iter().all(|v| matches!(v, AttrValue::Node(_)));
        if !all_nodes {
            return AttrValue::List(items);
        }
        let nodes = items
            .into_iter()
            .filter_map(|v| match v {
                AttrValue::Node(node) => Some(*node),
                _ => None,
            })
            .collect();
        AttrValue::Nodes(nodes)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttrValue::Null, Into::into)
    }
}

impl From<serde_json::Value> for AttrValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => AttrValue::Null,
            Value::Bool(b) => AttrValue::Bool(b),
            Value::Number(n) => AttrValue::Number(n),
            Value::String(s) => AttrValue::String(s),
            Value::Array(xs) => xs.into_iter().map(AttrValue::from).collect::<Vec<_>>().into(),
            Value::Object(map) => AttrValue::from(map.into_iter().collect::<Node>()),
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// NODE
// ————————————————————————————————————————————————————————————————————————————

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-initialize from `(key, value)` pairs. A repeated key keeps its
    /// first position and its last value.
    pub fn from_mapping<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttrValue>,
    {
        entries.into_iter().collect()
    }

    /// Unconditional assignment.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Declare-once assignment; an existing key is left untouched.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Result<()> {
        match self.fields.entry(key.into()) {
            Entry::Occupied(entry) => Err(CardError::duplicate(entry.key().as_str())),
            Entry::Vacant(entry) => {
                entry.insert(value.into());
                Ok(())
            }
        }
    }

    pub fn get(&self, key: &str) -> Result<&AttrValue> {
        self.fields.get(key).ok_or_else(|| CardError::not_found(key))
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut AttrValue> {
        self.fields.get_mut(key).ok_or_else(|| CardError::not_found(key))
    }

    /// Remove a field, keeping the relative order of the others.
    pub fn delete(&mut self, key: &str) -> Result<AttrValue> {
        self.fields.shift_remove(key).ok_or_else(|| CardError::not_found(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Field names in insertion order. Call again to restart.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + Clone + '_ {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &AttrValue)> + Clone + '_ {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Field count.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Node {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut node = Node::new();
        for (key, value) in iter {
            node.set(key, value);
        }
        node
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = (&'a String, &'a AttrValue);
    type IntoIter = indexmap::map::Iter<'a, String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl fmt::Display for Node {
    /// The pretty form: sorted keys, two-space indent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_pretty_string().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// DESERIALIZE
// ————————————————————————————————————————————————————————————————————————————

// Enum identity is not recoverable from JSON text; wire strings come back as
// plain strings.

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(NodeVisitor)
    }
}

impl<'de> Deserialize<'de> for AttrValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Node, A::Error> {
        let mut node = Node::new();
        while let Some((key, value)) = map.next_entry::<String, AttrValue>()? {
            node.set(key, value);
        }
        Ok(node)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = AttrValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<AttrValue, E> {
        Ok(AttrValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<AttrValue, E> {
        Ok(AttrValue::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<AttrValue, E> {
        Ok(AttrValue::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<AttrValue, E> {
        Ok(AttrValue::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<AttrValue, E> {
        Ok(AttrValue::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<AttrValue, E> {
        Ok(AttrValue::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<AttrValue, E> {
        Ok(AttrValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<AttrValue, E> {
        Ok(AttrValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<AttrValue, D::Error> {
        AttrValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<AttrValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<AttrValue>()? {
            items.push(item);
        }
        Ok(AttrValue::from(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<AttrValue, A::Error> {
        NodeVisitor.visit_map(map).map(AttrValue::from)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
