//! Core data model types.

pub mod attachment;

pub use attachment::Attachment;
