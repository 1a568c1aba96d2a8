// src/domain/portable_text/node.rs
//! Portable-text node tree as stored in dataset documents.
//!
//! Every array member carries a `_type` tag. Members with a known tag
//! deserialize into their typed form; members with an unknown or missing
//! tag, and tagged members whose shape does not parse, are preserved
//! verbatim as `Other` so that reserializing a document never loses data.
//! Deserialization of a node therefore never fails.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A top-level member of a portable-text array.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentNode {
    Block(Block),
    Image(ImageNode),
    Break(BreakNode),
    Other(Value),
}

impl ContentNode {
    /// Classifies a raw JSON value by its `_type` tag.
    pub fn from_value(value: Value) -> Self {
        match value.get("_type").and_then(Value::as_str) {
            Some("block") => match serde_json::from_value(value.clone()) {
                Ok(block) => Self::Block(block),
                Err(_) => Self::Other(value),
            },
            Some("image") => match serde_json::from_value(value.clone()) {
                Ok(image) => Self::Image(image),
                Err(_) => Self::Other(value),
            },
            Some("break") => match serde_json::from_value(value.clone()) {
                Ok(node) => Self::Break(node),
                Err(_) => Self::Other(value),
            },
            _ => Self::Other(value),
        }
    }

    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Self::Block(block) => Some(block),
            _ => None,
        }
    }
}

impl Serialize for ContentNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Block(block) => serialize_tagged(serializer, "block", block),
            Self::Image(image) => serialize_tagged(serializer, "image", image),
            Self::Break(node) => serialize_tagged(serializer, "break", node),
            Self::Other(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ContentNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

/// A block of inline children, one paragraph-level unit of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(rename = "_key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default)]
    pub style: BlockStyle,
    #[serde(rename = "markDefs", default)]
    pub mark_defs: Vec<MarkDef>,
    #[serde(default)]
    pub children: Vec<BlockChild>,
    #[serde(rename = "listItem", default, skip_serializing_if = "Option::is_none")]
    pub list_item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
}

impl Block {
    /// Looks up an annotation by the key referenced from a span's marks.
    pub fn mark_def(&self, key: &str) -> Option<&MarkDef> {
        self.mark_defs.iter().find(|def| def.key() == Some(key))
    }
}

/// An inline member of a block's `children` array.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockChild {
    Span(Span),
    Other(Value),
}

impl BlockChild {
    pub fn from_value(value: Value) -> Self {
        match value.get("_type").and_then(Value::as_str) {
            Some("span") => match serde_json::from_value(value.clone()) {
                Ok(span) => Self::Span(span),
                Err(_) => Self::Other(value),
            },
            _ => Self::Other(value),
        }
    }

    pub fn as_span(&self) -> Option<&Span> {
        match self {
            Self::Span(span) => Some(span),
            Self::Other(_) => None,
        }
    }
}

impl Serialize for BlockChild {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Span(span) => serialize_tagged(serializer, "span", span),
            Self::Other(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for BlockChild {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

/// A run of text with zero or more marks applied.
///
/// Marks are either decorator names (`strong`, `em`, ...) or `_key`
/// references into the enclosing block's `markDefs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    #[serde(rename = "_key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub marks: Vec<String>,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            key: None,
            text: text.into(),
            marks: Vec::new(),
        }
    }
}

/// An annotation definition referenced from span marks.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkDef {
    Link(LinkAnnotation),
    Other(Value),
}

impl MarkDef {
    pub fn from_value(value: Value) -> Self {
        match value.get("_type").and_then(Value::as_str) {
            Some("link") => match serde_json::from_value(value.clone()) {
                Ok(link) => Self::Link(link),
                Err(_) => Self::Other(value),
            },
            _ => Self::Other(value),
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Link(link) => Some(link.key.as_str()),
            Self::Other(value) => value.get("_key").and_then(Value::as_str),
        }
    }
}

impl Serialize for MarkDef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Link(link) => serialize_tagged(serializer, "link", link),
            Self::Other(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for MarkDef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

/// An external link annotation. `blank` requests a new-tab target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkAnnotation {
    #[serde(rename = "_key", default)]
    pub key: String,
    #[serde(default)]
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blank: Option<bool>,
}

/// A visual separator member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakNode {
    #[serde(rename = "_key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default)]
    pub style: BreakStyle,
}

/// An image member with an optional resolved asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageNode {
    #[serde(rename = "_key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<ImageAsset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Asset payload of an image node. Exported datasets resolve `url`;
/// live documents may only carry the `_ref` pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "_ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Block style. Unknown styles are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockStyle {
    #[default]
    Normal,
    H1,
    H2,
    H3,
    H4,
    Blockquote,
    Other(String),
}

impl From<String> for BlockStyle {
    fn from(value: String) -> Self {
        match value.as_str() {
            "normal" => Self::Normal,
            "h1" => Self::H1,
            "h2" => Self::H2,
            "h3" => Self::H3,
            "h4" => Self::H4,
            "blockquote" => Self::Blockquote,
            _ => Self::Other(value),
        }
    }
}

impl From<BlockStyle> for String {
    fn from(value: BlockStyle) -> Self {
        match value {
            BlockStyle::Normal => "normal".to_owned(),
            BlockStyle::H1 => "h1".to_owned(),
            BlockStyle::H2 => "h2".to_owned(),
            BlockStyle::H3 => "h3".to_owned(),
            BlockStyle::H4 => "h4".to_owned(),
            BlockStyle::Blockquote => "blockquote".to_owned(),
            BlockStyle::Other(other) => other,
        }
    }
}

/// Separator weight of a break node. Anything but `double` is a
/// single rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BreakStyle {
    #[default]
    Single,
    Double,
}

impl From<String> for BreakStyle {
    fn from(value: String) -> Self {
        if value == "double" {
            Self::Double
        } else {
            Self::Single
        }
    }
}

impl From<BreakStyle> for String {
    fn from(value: BreakStyle) -> Self {
        match value {
            BreakStyle::Single => "single".to_owned(),
            BreakStyle::Double => "double".to_owned(),
        }
    }
}

fn serialize_tagged<S, T>(serializer: S, tag: &str, value: &T) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    let mut json = serde_json::to_value(value).map_err(serde::ser::Error::custom)?;
    if let Value::Object(map) = &mut json {
        map.insert("_type".to_owned(), Value::String(tag.to_owned()));
    }
    json.serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn block_deserializes_with_children_and_mark_defs() {
        let node: ContentNode = serde_json::from_value(json!({
            "_type": "block",
            "_key": "b1",
            "style": "h2",
            "markDefs": [{"_type": "link", "_key": "m1", "href": "https://example.com", "blank": true}],
            "children": [
                {"_type": "span", "_key": "s1", "text": "Hello", "marks": ["m1"]},
                {"_type": "unknownInline", "payload": 1}
            ]
        }))
        .unwrap();

        let ContentNode::Block(block) = node else {
            panic!("expected block");
        };
        assert_eq!(block.style, BlockStyle::H2);
        assert_eq!(block.children.len(), 2);
        let span = block.children[0].as_span().unwrap();
        assert_eq!(span.text, "Hello");
        assert!(matches!(block.children[1], BlockChild::Other(_)));
        assert!(matches!(
            block.mark_def("m1"),
            Some(MarkDef::Link(link)) if link.href == "https://example.com"
        ));
    }

    #[test]
    fn unknown_type_round_trips_verbatim() {
        let raw = json!({"_type": "callout", "tone": "info", "body": ["x"]});
        let node: ContentNode = serde_json::from_value(raw.clone()).unwrap();
        assert!(matches!(node, ContentNode::Other(_)));
        assert_eq!(serde_json::to_value(&node).unwrap(), raw);
    }

    #[test]
    fn malformed_block_falls_back_to_other() {
        let raw = json!({"_type": "block", "children": "not an array"});
        let node: ContentNode = serde_json::from_value(raw.clone()).unwrap();
        assert!(matches!(node, ContentNode::Other(_)));
        assert_eq!(serde_json::to_value(&node).unwrap(), raw);
    }

    #[test]
    fn serialized_nodes_carry_their_type_tag() {
        let node = ContentNode::Block(Block {
            key: Some("b1".to_owned()),
            style: BlockStyle::Normal,
            mark_defs: Vec::new(),
            children: vec![BlockChild::Span(Span::new("Hi"))],
            list_item: None,
            level: None,
        });
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["_type"], "block");
        assert_eq!(value["style"], "normal");
        assert_eq!(value["children"][0]["_type"], "span");
        assert_eq!(value["children"][0]["text"], "Hi");
    }

    #[test]
    fn break_style_defaults_to_single() {
        let node: ContentNode =
            serde_json::from_value(json!({"_type": "break", "style": "hairline"})).unwrap();
        let ContentNode::Break(node) = node else {
            panic!("expected break");
        };
        assert_eq!(node.style, BreakStyle::Single);
    }

    #[test]
    fn unknown_block_style_is_preserved() {
        let style = BlockStyle::from("lede".to_owned());
        assert_eq!(style, BlockStyle::Other("lede".to_owned()));
        assert_eq!(String::from(style), "lede");
    }
}
