use serde_json::{Map, Value};
use stele_core::domain::document::{Document, DocumentId, DocumentType, SlugField, Title};
use stele_core::domain::portable_text::{Block, BlockChild, BlockStyle, ContentNode, Span};

/// Builds dataset documents for tests without going through JSON.
pub struct DocumentBuilder {
    id: String,
    doc_type: String,
    title: Option<Title>,
    slug: Option<SlugField>,
    extra: Map<String, Value>,
}

impl DocumentBuilder {
    pub fn new(id: &str, doc_type: &str) -> Self {
        Self {
            id: id.to_owned(),
            doc_type: doc_type.to_owned(),
            title: None,
            slug: None,
            extra: Map::new(),
        }
    }

    pub fn plain_title(mut self, text: &str) -> Self {
        self.title = Some(Title::PlainText(text.to_owned()));
        self
    }

    pub fn rich_title(mut self, text: &str) -> Self {
        self.title = Some(Title::RichText(vec![single_span_block(text)]));
        self
    }

    pub fn unsupported_title(mut self, value: Value) -> Self {
        self.title = Some(Title::Unsupported(value));
        self
    }

    pub fn slug(mut self, current: &str) -> Self {
        self.slug = Some(SlugField::new(current));
        self
    }

    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.extra.insert(key.to_owned(), value);
        self
    }

    pub fn build(self) -> Document {
        Document {
            id: DocumentId::new(self.id).expect("builder id"),
            doc_type: DocumentType::new(self.doc_type).expect("builder doc type"),
            title: self.title,
            slug: self.slug,
            created_at: None,
            updated_at: None,
            extra: self.extra,
        }
    }
}

/// A normal block holding a single unmarked span, the shape produced by
/// the title migration.
pub fn single_span_block(text: &str) -> ContentNode {
    ContentNode::Block(Block {
        key: None,
        style: BlockStyle::Normal,
        mark_defs: Vec::new(),
        children: vec![BlockChild::Span(Span::new(text))],
        list_item: None,
        level: None,
    })
}
