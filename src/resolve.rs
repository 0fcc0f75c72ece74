//! External display collaborators: download resolution and icon drawing.

use serde::Serialize;

/// Turns an attachment url into something the user can download from.
///
/// Resolution is infallible here; a dead link is the resolver's problem.
pub trait FileResolver {
    fn resolve(&self, url: &str) -> String;
}

/// Returns urls unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughResolver;

impl FileResolver for PassthroughResolver {
    fn resolve(&self, url: &str) -> String {
        url.to_string()
    }
}

/// Resolves storage keys against a file API's `read-file` endpoint.
///
/// Empty values and values that already contain `http` pass through.
#[derive(Debug, Clone)]
pub struct ApiFileResolver {
    base_url: String,
}

impl ApiFileResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }
}

impl FileResolver for ApiFileResolver {
    fn resolve(&self, url: &str) -> String {
        if url.is_empty() || url.contains("http") {
            return url.to_string();
        }
        format!(
            "{}/read-file?key={}",
            self.base_url,
            urlencoding::encode(url)
        )
    }
}

/// Fixed icon vocabulary used by previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Music,
    Cube,
    #[serde(rename = "videocamera")]
    VideoCamera,
    File,
    DownArrow,
}

impl Icon {
    /// Name of the icon in the icon font.
    pub fn name(self) -> &'static str {
        match self {
            Self::Music => "music",
            Self::Cube => "cube",
            Self::VideoCamera => "videocamera",
            Self::File => "file",
            Self::DownArrow => "down-arrow",
        }
    }
}

/// Draws an icon into whatever the caller displays.
pub trait IconRenderer {
    type Output;

    fn render_icon(&self, icon: Icon) -> Self::Output;
}

/// Single-glyph icons for terminal output.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphIconRenderer;

impl IconRenderer for GlyphIconRenderer {
    type Output = &'static str;

    fn render_icon(&self, icon: Icon) -> &'static str {
        match icon {
            Icon::Music => "♪",
            Icon::Cube => "▣",
            Icon::VideoCamera => "▶",
            Icon::File => "▤",
            Icon::DownArrow => "↓",
        }
    }
}
