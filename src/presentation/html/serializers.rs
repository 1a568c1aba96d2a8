// src/presentation/html/serializers.rs
//! HTML serializers for portable-text content.
//!
//! Every node and mark maps to a fixed HTML fragment. Normal paragraphs
//! keep `white-space: pre-wrap` so intra-text line breaks survive;
//! newlines inside span text additionally render as explicit `<br />`.

use crate::domain::portable_text::{
    Block, BlockChild, BlockStyle, BreakNode, BreakStyle, ContentNode, ImageNode, LinkAnnotation,
    MarkDef, Span,
};

pub struct HtmlSerializer;

impl Default for HtmlSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Renders a portable-text array to an HTML fragment. Members of
    /// unknown type render as nothing.
    pub fn render(&self, nodes: &[ContentNode]) -> String {
        let mut out = String::new();
        for node in nodes {
            match node {
                ContentNode::Block(block) => out.push_str(&self.render_block(block)),
                ContentNode::Image(image) => out.push_str(&render_image(image)),
                ContentNode::Break(node) => out.push_str(render_break(node)),
                ContentNode::Other(_) => {}
            }
        }
        out
    }

    fn render_block(&self, block: &Block) -> String {
        let children = self.render_children(block);
        match &block.style {
            BlockStyle::H1 => format!("<h1>{children}</h1>"),
            BlockStyle::H2 => format!("<h2>{children}</h2>"),
            BlockStyle::H3 => format!("<h3>{children}</h3>"),
            BlockStyle::H4 => format!("<h4>{children}</h4>"),
            BlockStyle::Blockquote => format!("<blockquote>{children}</blockquote>"),
            // Unknown styles fall back to the normal paragraph shape.
            BlockStyle::Normal | BlockStyle::Other(_) => {
                format!(r#"<p style="white-space: pre-wrap;">{children}</p>"#)
            }
        }
    }

    fn render_children(&self, block: &Block) -> String {
        let mut out = String::new();
        for child in &block.children {
            if let BlockChild::Span(span) = child {
                out.push_str(&render_span(span, block));
            }
        }
        out
    }
}

fn render_span(span: &Span, block: &Block) -> String {
    let mut html = html_escape(&span.text).replace('\n', "<br />");
    for mark in &span.marks {
        html = apply_mark(mark, html, block);
    }
    html
}

fn apply_mark(mark: &str, inner: String, block: &Block) -> String {
    match mark {
        "strong" => format!("<strong>{inner}</strong>"),
        "em" => format!("<em>{inner}</em>"),
        "code" => format!("<code>{inner}</code>"),
        "underline" => format!(r#"<span style="text-decoration: underline;">{inner}</span>"#),
        "strike-through" => format!("<s>{inner}</s>"),
        key => match block.mark_def(key) {
            Some(MarkDef::Link(link)) => render_link(link, &inner),
            // Unknown decorators and annotation types wrap nothing.
            _ => inner,
        },
    }
}

fn render_link(link: &LinkAnnotation, inner: &str) -> String {
    let href = html_escape(&link.href);
    if link.blank.unwrap_or(false) {
        format!(r#"<a href="{href}" target="_blank" rel="noopener">{inner}</a>"#)
    } else {
        format!(r#"<a href="{href}">{inner}</a>"#)
    }
}

fn render_image(image: &ImageNode) -> String {
    let src = image
        .asset
        .as_ref()
        .and_then(|asset| asset.url.as_deref())
        .unwrap_or("");
    let alt = image.alt.as_deref().unwrap_or("");
    format!(
        r#"<figure><img src="{}" alt="{}" /></figure>"#,
        html_escape(src),
        html_escape(alt)
    )
}

fn render_break(node: &BreakNode) -> &'static str {
    match node.style {
        BreakStyle::Single => "<br/>",
        BreakStyle::Double => "<br/><br/>",
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
