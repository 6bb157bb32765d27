//! Common types and traits for all backend records

pub mod record;
pub mod reference;

// Re-exports
pub use record::Record;
pub use reference::{NamedRef, Reference};
