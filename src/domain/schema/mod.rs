// src/domain/schema/mod.rs
//! Declarative description of the studio's document types.
//!
//! This is the single place that knows which document types exist, what
//! fields they carry and where their slugs are sourced from. Services
//! validate requested type names against it instead of trusting input.

/// Rich-text capabilities of an array-of-blocks field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RichTextSpec {
    pub styles: &'static [&'static str],
    pub lists: &'static [&'static str],
    pub decorators: &'static [&'static str],
    pub annotations: &'static [&'static str],
    /// Array members beside `block` (`image`, `break`).
    pub extra_members: &'static [&'static str],
}

impl RichTextSpec {
    /// Full editorial body configuration.
    pub const BODY: Self = Self {
        styles: &["normal", "h1", "h2", "h3", "h4", "blockquote"],
        lists: &["bullet", "number"],
        decorators: &["strong", "em", "code", "underline", "strike-through"],
        annotations: &["link"],
        extra_members: &["image", "break"],
    };

    /// Restricted configuration for rich-text titles.
    pub const TITLE: Self = Self {
        styles: &["normal"],
        lists: &[],
        decorators: &["strong", "em", "underline"],
        annotations: &["link"],
        extra_members: &[],
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Text { rows: u8 },
    RichText(RichTextSpec),
    Image { hotspot: bool },
    Reference { to: &'static str },
    Slug { source: &'static str, max_length: usize },
    Datetime,
    Select { options: &'static [&'static str] },
    StringArray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub title: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

#[derive(Debug, Clone)]
pub struct SchemaType {
    pub name: &'static str,
    pub title: &'static str,
    pub fields: Vec<FieldDef>,
}

impl SchemaType {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn slug_field(&self) -> Option<&FieldDef> {
        self.fields
            .iter()
            .find(|field| matches!(field.kind, FieldKind::Slug { .. }))
    }

    /// Name of the field the slug is generated from, when the type has
    /// a slug field.
    pub fn slug_source(&self) -> Option<&'static str> {
        self.fields.iter().find_map(|field| match field.kind {
            FieldKind::Slug { source, .. } => Some(source),
            _ => None,
        })
    }
}

pub fn article() -> SchemaType {
    SchemaType {
        name: "article",
        title: "Article",
        fields: vec![
            FieldDef {
                name: "title",
                title: "Post Title",
                kind: FieldKind::String,
                required: true,
            },
            FieldDef {
                name: "description",
                title: "Post Description",
                kind: FieldKind::Text { rows: 3 },
                required: false,
            },
            FieldDef {
                name: "featureImage",
                title: "Feature Image",
                kind: FieldKind::Image { hotspot: true },
                required: false,
            },
            FieldDef {
                name: "category",
                title: "Blog Category",
                kind: FieldKind::Reference { to: "category" },
                required: false,
            },
            FieldDef {
                name: "slug",
                title: "Slug",
                kind: FieldKind::Slug {
                    source: "title",
                    max_length: 96,
                },
                required: true,
            },
            FieldDef {
                name: "publishedAt",
                title: "Post Date",
                kind: FieldKind::Datetime,
                required: true,
            },
            FieldDef {
                name: "status",
                title: "Status",
                kind: FieldKind::Select {
                    options: &["draft", "published", "inactive"],
                },
                required: false,
            },
            FieldDef {
                name: "metaTitle",
                title: "Meta Title",
                kind: FieldKind::String,
                required: false,
            },
            FieldDef {
                name: "metaDescription",
                title: "Meta Description",
                kind: FieldKind::Text { rows: 3 },
                required: false,
            },
            FieldDef {
                name: "keywords",
                title: "Keywords",
                kind: FieldKind::StringArray,
                required: false,
            },
            FieldDef {
                name: "content",
                title: "Content",
                kind: FieldKind::RichText(RichTextSpec::BODY),
                required: true,
            },
        ],
    }
}

pub fn category() -> SchemaType {
    SchemaType {
        name: "category",
        title: "Category",
        fields: vec![
            FieldDef {
                name: "title",
                title: "Category Title",
                kind: FieldKind::RichText(RichTextSpec::TITLE),
                required: true,
            },
            FieldDef {
                name: "slug",
                title: "Slug",
                kind: FieldKind::Slug {
                    source: "title",
                    max_length: 96,
                },
                required: true,
            },
        ],
    }
}

pub fn registry() -> Vec<SchemaType> {
    vec![article(), category()]
}

pub fn find(name: &str) -> Option<SchemaType> {
    registry().into_iter().find(|schema| schema.name == name)
}

pub fn document_type_names() -> Vec<&'static str> {
    registry().iter().map(|schema| schema.name).collect()
}
