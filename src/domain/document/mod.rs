pub mod entity;
pub mod repository;
pub mod services;
pub mod title;
pub mod value_objects;

pub use entity::{Document, SlugField};
pub use repository::{DocumentSource, SlugEntry, SlugIndex};
pub use title::Title;
pub use value_objects::{DRAFT_PREFIX, DocumentId, DocumentType, ExcludedIds, Slug};
