// src/domain/portable_text/text.rs
//! Plain-text projection of a portable-text array.

use super::node::{Block, ContentNode};

/// Projects a portable-text array to plain text.
///
/// Span texts inside a block are concatenated directly, blocks are
/// joined with a single space and the result is trimmed. Non-block
/// members and non-span children contribute nothing.
pub fn plain_text(nodes: &[ContentNode]) -> String {
    let parts: Vec<String> = nodes
        .iter()
        .filter_map(ContentNode::as_block)
        .map(block_text)
        .collect();
    parts.join(" ").trim().to_owned()
}

fn block_text(block: &Block) -> String {
    let mut text = String::new();
    for child in &block.children {
        if let Some(span) = child.as_span() {
            text.push_str(&span.text);
        }
    }
    text
}
