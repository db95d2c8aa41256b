//! Node serializer.
//!
//! Two renderings of the same tree:
//! - **pretty**: two-space indented, keys sorted at every level (what `Display` shows)
//! - **wire**: compact, keys in insertion order (what gets transmitted)
//!
//! Both dispatch on the [`AttrValue`] tag; enum values always emit their wire
//! string. Trees are acyclic by construction, so recursion always terminates.
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::Result;
use crate::node::{AttrValue, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Pretty,
    Wire,
}

impl Node {
    pub fn to_pretty_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&Sorted(self))?)
    }

    pub fn to_wire_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn render(&self, format: Format) -> Result<String> {
        match format {
            Format::Pretty => self.to_pretty_string(),
            Format::Wire => self.to_wire_json(),
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INSERTION ORDER
// ————————————————————————————————————————————————————————————————————————————

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttrValue::Null => serializer.serialize_unit(),
            AttrValue::Bool(b) => serializer.serialize_bool(*b),
            AttrValue::Number(n) => n.serialize(serializer),
            AttrValue::String(s) => serializer.serialize_str(s),
            AttrValue::Enum(e) => serializer.serialize_str(e.wire()),
            AttrValue::Node(node) => node.serialize(serializer),
            AttrValue::Nodes(nodes) => serializer.collect_seq(nodes),
            AttrValue::List(items) => serializer.collect_seq(items),
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// SORTED KEYS
// ————————————————————————————————————————————————————————————————————————————

/// Serializes the wrapped tree with keys sorted lexicographically at every level.
pub struct Sorted<'a, T>(pub &'a T);

impl Serialize for Sorted<'_, Node> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entries: Vec<(&str, &AttrValue)> = self.0.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            map.serialize_entry(key, &Sorted(value))?;
        }
        map.end()
    }
}

impl Serialize for Sorted<'_, AttrValue> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            AttrValue::Node(node) => Sorted(&**node).serialize(serializer),
            AttrValue::Nodes(nodes) => serializer.collect_seq(nodes.iter().map(Sorted)),
            AttrValue::List(items) => serializer.collect_seq(items.iter().map(Sorted)),
            primitive => primitive.serialize(serializer),
        }
    }
}
