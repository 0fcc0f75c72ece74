//! Viewer widgets for rendering the different panels.

pub mod attachment_list;
pub mod gallery_popup;
pub mod help_popup;
pub mod status_bar;
