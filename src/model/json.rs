//! JSON shape of content tree nodes.
//!
//! Nodes arrive as `{type, attrs?, text?, content?}` objects. Loading is
//! lenient about attribute values: anything the engines cannot use is kept
//! in [`Attrs::extra`] and otherwise ignored, so unknown attributes and keys
//! survive a round trip. Interpreted values are written back in canonical
//! form: zones in lowercase, heading levels as numbers, and an empty
//! `content` array omitted.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::document::Zone;
use super::node::{Attrs, Node, Role};

/// Level stored for headings whose level is present but not a positive
/// integer. No engine numbers or lists it.
const UNNUMBERED_LEVEL: u8 = 0;

#[derive(Deserialize)]
struct RawNode {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    attrs: Option<Map<String, Value>>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    content: Option<Vec<Node>>,
    #[serde(flatten)]
    other: Map<String, Value>,
}

#[derive(Serialize)]
struct RawNodeRef<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    #[serde(skip_serializing_if = "Map::is_empty")]
    attrs: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "is_empty")]
    content: &'a [Node],
    #[serde(flatten)]
    other: &'a Map<String, Value>,
}

fn is_empty(content: &&[Node]) -> bool {
    content.is_empty()
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawNode::deserialize(deserializer).map(node_from_raw)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawNodeRef {
            kind: &self.tag,
            attrs: attrs_to_map(self),
            text: self.text.as_deref(),
            content: &self.content,
            other: &self.other,
        }
        .serialize(serializer)
    }
}

fn node_from_raw(raw: RawNode) -> Node {
    let mut attrs = Attrs::default();
    let mut level = None;
    let is_heading = raw.kind == "heading";

    for (key, value) in raw.attrs.unwrap_or_default() {
        let used = match key.as_str() {
            "id" => set_string(&mut attrs.id, &value),
            "caption" => set_string(&mut attrs.caption, &value),
            "alt" => set_string(&mut attrs.alt, &value),
            "language" => set_string(&mut attrs.language, &value),
            "zone" => {
                attrs.zone = value.as_str().and_then(Zone::parse);
                attrs.zone.is_some()
            }
            "level" if is_heading => {
                level = parse_level(&value);
                level.is_some()
            }
            _ => false,
        };
        if !used {
            attrs.extra.insert(key, value);
        }
    }

    Node {
        role: Role::from_tag(&raw.kind, level),
        tag: raw.kind,
        attrs,
        text: raw.text,
        content: raw.content.unwrap_or_default(),
        other: raw.other,
    }
}

fn set_string(slot: &mut Option<String>, value: &Value) -> bool {
    match value {
        Value::String(s) => {
            *slot = Some(s.clone());
            true
        }
        _ => false,
    }
}

/// Heading levels arrive as numbers or numeric strings.
///
/// Returns `None` only when the value is not numeric at all. Oversized
/// levels saturate at `u8::MAX`; zero, negative and fractional levels map
/// to [`UNNUMBERED_LEVEL`].
fn parse_level(value: &Value) -> Option<u8> {
    match value {
        Value::Number(n) => Some(n.as_u64().map_or(UNNUMBERED_LEVEL, saturate_level)),
        Value::String(s) => {
            let s = s.trim();
            if let Ok(level) = s.parse::<u64>() {
                Some(saturate_level(level))
            } else if s.parse::<f64>().is_ok() {
                Some(UNNUMBERED_LEVEL)
            } else {
                None
            }
        }
        _ => None,
    }
}

fn saturate_level(level: u64) -> u8 {
    u8::try_from(level).unwrap_or(u8::MAX)
}

fn attrs_to_map(node: &Node) -> Map<String, Value> {
    let attrs = &node.attrs;
    let mut map = attrs.extra.clone();
    if let Role::Heading(level) = node.role {
        map.insert("level".to_string(), Value::from(level));
    }
    let fields = [
        ("id", &attrs.id),
        ("caption", &attrs.caption),
        ("alt", &attrs.alt),
        ("language", &attrs.language),
    ];
    for (key, value) in fields {
        if let Some(value) = value {
            map.insert(key.to_string(), Value::String(value.clone()));
        }
    }
    if let Some(zone) = attrs.zone {
        map.insert("zone".to_string(), Value::from(zone.as_str()));
    }
    map
}
