// src/domain/document/title.rs
use crate::domain::portable_text::{self, ContentNode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A document title in either of its historical shapes.
///
/// Older documents store a plain string, migrated documents a
/// portable-text array. Anything else is carried as `Unsupported` so a
/// single odd document never aborts batch work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Title {
    PlainText(String),
    RichText(Vec<ContentNode>),
    Unsupported(Value),
}

impl Title {
    /// The projected plain text, suitable as slug source input.
    ///
    /// Plain strings are returned as-is, rich text goes through the
    /// portable-text projection and unsupported shapes project to the
    /// empty string.
    pub fn plain_text(&self) -> String {
        match self {
            Self::PlainText(text) => text.clone(),
            Self::RichText(nodes) => portable_text::plain_text(nodes),
            Self::Unsupported(_) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_all_three_shapes() {
        let plain: Title = serde_json::from_value(json!("My Post")).unwrap();
        assert_eq!(plain, Title::PlainText("My Post".to_owned()));
        assert_eq!(plain.plain_text(), "My Post");

        let rich: Title = serde_json::from_value(json!([
            {"_type": "block", "children": [{"_type": "span", "text": "My Post"}]}
        ]))
        .unwrap();
        assert!(matches!(rich, Title::RichText(_)));
        assert_eq!(rich.plain_text(), "My Post");

        let odd: Title = serde_json::from_value(json!({"nested": true})).unwrap();
        assert!(matches!(odd, Title::Unsupported(_)));
        assert_eq!(odd.plain_text(), "");
    }

    #[test]
    fn plain_text_is_not_trimmed_for_plain_titles() {
        let plain: Title = serde_json::from_value(json!("  padded  ")).unwrap();
        assert_eq!(plain.plain_text(), "  padded  ");
    }
}
