pub mod document;
pub mod errors;
pub mod portable_text;
pub mod schema;
