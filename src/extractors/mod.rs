// src/extractors/mod.rs
pub mod attributes;
pub mod dimension;
pub mod identifier;
pub mod rows;

// Re-export key extraction types for convenience
pub use attributes::{AttributeKey, AttributeMapper, DocumentRecord, MISSING};
pub use rows::normalize_rows;
