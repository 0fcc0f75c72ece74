//! Attachment metadata.
//!
//! Only already-resolved metadata is modelled here. The file bytes live
//! behind the `url` and are never touched by this crate.

use serde::{Deserialize, Serialize};

/// Metadata describing one referenced file.
///
/// Every field is optional because upstream producers are loose about what
/// they fill in. `mime_type` is the primary classification signal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attachment {
    /// Original filename, if the uploader provided one.
    #[serde(default)]
    pub name: Option<String>,

    /// Storage key or absolute URL of the file. Doubles as a name fallback.
    #[serde(default)]
    pub url: Option<String>,

    /// Declared MIME type (e.g. `"image/png"`). Serialized as `type`.
    #[serde(default, rename = "type")]
    pub mime_type: Option<String>,

    /// Size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
}

impl Attachment {
    /// Start an attachment from its url.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Builder-style setter for the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder-style setter for the MIME type.
    pub fn with_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Builder-style setter for the size in bytes.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// The declared MIME type, treating an empty string as absent.
    pub fn declared_type(&self) -> Option<&str> {
        non_empty(self.mime_type.as_deref())
    }

    /// Label shown to the user: `name`, then `url`, then the empty string.
    pub fn display_name(&self) -> &str {
        non_empty(self.name.as_deref())
            .or_else(|| non_empty(self.url.as_deref()))
            .unwrap_or("")
    }

    /// Text used for extension inference: `url`, then `name`, then empty.
    pub fn extension_source(&self) -> &str {
        non_empty(self.url.as_deref())
            .or_else(|| non_empty(self.name.as_deref()))
            .unwrap_or("")
    }

    /// The url handed to the file resolver (empty when absent).
    pub fn url_or_empty(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
