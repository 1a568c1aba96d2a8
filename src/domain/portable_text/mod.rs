// src/domain/portable_text/mod.rs
pub mod node;
pub mod text;

pub use node::{
    Block, BlockChild, BlockStyle, BreakNode, BreakStyle, ContentNode, ImageAsset, ImageNode,
    LinkAnnotation, MarkDef, Span,
};
pub use text::plain_text;
