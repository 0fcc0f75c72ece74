//! `attachview` — attachment classification, preview selection, and image
//! galleries.
//!
//! Each attachment is classified by its declared MIME type and, failing an
//! image type, by its file extension. The composer turns a whole list into
//! positioned preview slots, and every image preview links into a gallery of
//! all images in the same list.

pub mod classify;
pub mod compose;
pub mod config;
pub mod error;
pub mod gallery;
pub mod input;
pub mod model;
pub mod render;
pub mod resolve;
pub mod tui;

pub use classify::{classify, PreviewStrategy};
pub use compose::{compose, Slot, SlotKey};
pub use gallery::{collect_images, Gallery};
pub use model::Attachment;
pub use render::{render, PreviewOptions, PreviewUnit};
