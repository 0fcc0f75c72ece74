//! Loading attachment lists from JSON files.

use std::path::Path;

use serde::Deserialize;

use crate::error::{PreviewError, Result};
use crate::model::Attachment;

/// Accepted top-level shapes: a bare array or `{ "attachments": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum AttachmentDocument {
    List(Vec<Attachment>),
    Wrapped { attachments: Vec<Attachment> },
}

/// Read an attachment list from a JSON file.
pub fn load_attachments(path: &Path) -> Result<Vec<Attachment>> {
    if !path.exists() {
        return Err(PreviewError::FileNotFound(path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(path).map_err(|e| PreviewError::io(path, e))?;
    let attachments = parse_attachments(&contents).map_err(|reason| PreviewError::InvalidInput {
        path: path.to_path_buf(),
        reason,
    })?;
    tracing::info!(
        path = %path.display(),
        count = attachments.len(),
        "Loaded attachments"
    );
    Ok(attachments)
}

/// Parse an attachment list from JSON text.
pub fn parse_attachments(json: &str) -> std::result::Result<Vec<Attachment>, String> {
    match serde_json::from_str::<AttachmentDocument>(json) {
        Ok(AttachmentDocument::List(list)) => Ok(list),
        Ok(AttachmentDocument::Wrapped { attachments }) => Ok(attachments),
        Err(e) => Err(e.to_string()),
    }
}
