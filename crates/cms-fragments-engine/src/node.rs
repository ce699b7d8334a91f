use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};

/// A dynamically shaped content tree, as delivered by the API.
///
/// Object keys keep their source order, which is what gives document fields
/// and image views a stable rendering order.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentNode {
    Object(Vec<(String, ContentNode)>),
    Array(Vec<ContentNode>),
    String(String),
    Number(Number),
    Bool(bool),
    Null,
}

impl ContentNode {
    /// Parses JSON text into a node tree.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Value>(json).map(Self::from)
    }

    /// Looks up a key on an object node. Returns `None` for any other shape.
    pub fn get(&self, key: &str) -> Option<&ContentNode> {
        match self {
            ContentNode::Object(entries) => {
                entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
            }
            _ => None,
        }
    }

    /// Follows a chain of object keys, e.g. `["value", "document", "id"]`.
    pub fn path(&self, keys: &[&str]) -> Option<&ContentNode> {
        keys.iter().try_fold(self, |node, key| node.get(key))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ContentNode::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ContentNode::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ContentNode::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ContentNode::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            _ => None,
        }
    }

    /// Reads an unsigned integer from a number or a numeric string.
    ///
    /// File sizes and image link dimensions arrive as strings in some API
    /// versions and as numbers in others.
    pub fn as_u64_lenient(&self) -> Option<u64> {
        match self {
            ContentNode::Number(n) => n.as_u64(),
            ContentNode::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[ContentNode]> {
        match self {
            ContentNode::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[(String, ContentNode)]> {
        match self {
            ContentNode::Object(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ContentNode::Null)
    }

    /// Number of direct children: entries for objects, items for arrays.
    pub fn len(&self) -> usize {
        match self {
            ContentNode::Object(entries) => entries.len(),
            ContentNode::Array(items) => items.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Collects an array of strings, skipping non-string items.
    pub fn string_items(&self) -> Vec<String> {
        self.as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Converts back to a `serde_json::Value` for callers decoding raw content.
    pub fn to_json(&self) -> Value {
        match self {
            ContentNode::Object(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect::<Map<String, Value>>(),
            ),
            ContentNode::Array(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            ContentNode::String(s) => Value::String(s.clone()),
            ContentNode::Number(n) => Value::Number(n.clone()),
            ContentNode::Bool(b) => Value::Bool(*b),
            ContentNode::Null => Value::Null,
        }
    }
}

impl From<Value> for ContentNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                ContentNode::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
            Value::Array(items) => ContentNode::Array(items.into_iter().map(Into::into).collect()),
            Value::String(s) => ContentNode::String(s),
            Value::Number(n) => ContentNode::Number(n),
            Value::Bool(b) => ContentNode::Bool(b),
            Value::Null => ContentNode::Null,
        }
    }
}

impl<'de> Deserialize<'de> for ContentNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

impl Serialize for ContentNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
