//! Attachment classification: declared MIME type first, file extension second.

use serde::Serialize;

use crate::model::Attachment;

/// MIME prefix that routes an attachment into the image gallery.
pub const IMAGE_TYPE_PREFIX: &str = "image";

/// How an attachment should be previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewStrategy {
    /// Gallery-linked thumbnail.
    Image,
    /// Inline mp4 player.
    Video,
    /// Music icon with metadata.
    AudioIcon,
    /// Cube icon with metadata.
    ArchiveIcon,
    /// Camera icon for video containers that are not played inline.
    VideoIcon,
    /// Generic file icon. Also the fallback for unknown extensions.
    DocumentIcon,
}

impl PreviewStrategy {
    /// Short lowercase label used in CLI output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::AudioIcon => "audio_icon",
            Self::ArchiveIcon => "archive_icon",
            Self::VideoIcon => "video_icon",
            Self::DocumentIcon => "document_icon",
        }
    }

    /// Whether this strategy renders as an icon plus metadata block.
    pub fn is_icon(self) -> bool {
        !matches!(self, Self::Image | Self::Video)
    }
}

impl std::fmt::Display for PreviewStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Pick a preview strategy for `attachment`.
///
/// Returns `None` when the attachment has no declared type; such attachments
/// get no preview at all. An `image*` type always wins over the extension.
pub fn classify(attachment: &Attachment) -> Option<PreviewStrategy> {
    let declared = attachment.declared_type()?;
    if declared.starts_with(IMAGE_TYPE_PREFIX) {
        return Some(PreviewStrategy::Image);
    }
    Some(classify_by_extension(attachment))
}

/// Whether the declared type marks `attachment` as an image.
///
/// Extensions are never consulted here: a `photo.png` without a type is not
/// a gallery member.
pub fn is_image(attachment: &Attachment) -> bool {
    attachment
        .declared_type()
        .is_some_and(|t| t.starts_with(IMAGE_TYPE_PREFIX))
}

/// Strategy implied by the extension of the url (or name) alone.
pub fn classify_by_extension(attachment: &Attachment) -> PreviewStrategy {
    let ext = file_extension(attachment.extension_source());
    let strategy = strategy_for_extension(ext);
    tracing::trace!(extension = ext, strategy = %strategy, "Classified by extension");
    strategy
}

/// Text after the last `.`; the whole input when there is no dot.
///
/// No case folding happens: `"PNG"` and `"png"` are different tokens.
pub fn file_extension(source: &str) -> &str {
    match source.rfind('.') {
        Some(pos) => &source[pos + 1..],
        None => source,
    }
}

/// Map a raw extension token to a strategy. Unknown tokens get the
/// generic document icon.
pub fn strategy_for_extension(ext: &str) -> PreviewStrategy {
    match ext {
        "png" | "jpeg" | "doc" | "docx" | "txt" | "pdf" | "xls" | "xlsx" | "ppt" | "pptx" => {
            PreviewStrategy::DocumentIcon
        }
        "mp4" => PreviewStrategy::Video,
        "avi" => PreviewStrategy::VideoIcon,
        "mp3" | "wav" => PreviewStrategy::AudioIcon,
        "zip" => PreviewStrategy::ArchiveIcon,
        _ => PreviewStrategy::DocumentIcon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_empty_type_is_unclassifiable() {
        assert_eq!(classify(&Attachment::new("f.zip")), None);
        assert_eq!(classify(&Attachment::new("f.zip").with_type("")), None);
        assert_eq!(classify(&Attachment::default()), None);
    }

    #[test]
    fn test_image_type_wins_over_extension() {
        let att = Attachment::new("a.zip").with_type("image/png");
        assert_eq!(classify(&att), Some(PreviewStrategy::Image));

        let odd = Attachment::new("clip.mp4").with_type("imagery");
        assert_eq!(classify(&odd), Some(PreviewStrategy::Image));
    }

    #[test]
    fn test_extension_table() {
        let cases = [
            ("f.zip", PreviewStrategy::ArchiveIcon),
            ("f.mp4", PreviewStrategy::Video),
            ("f.avi", PreviewStrategy::VideoIcon),
            ("f.mp3", PreviewStrategy::AudioIcon),
            ("f.wav", PreviewStrategy::AudioIcon),
            ("f.pdf", PreviewStrategy::DocumentIcon),
            ("f.pptx", PreviewStrategy::DocumentIcon),
            ("f.png", PreviewStrategy::DocumentIcon),
            ("f.unknown", PreviewStrategy::DocumentIcon),
            ("noext", PreviewStrategy::DocumentIcon),
            ("trailing.", PreviewStrategy::DocumentIcon),
        ];
        for (url, expected) in cases {
            assert_eq!(
                classify_by_extension(&Attachment::new(url)),
                expected,
                "url {url}"
            );
        }
    }

    #[test]
    fn test_typed_non_image_uses_extension() {
        let video = Attachment::new("b.mp4").with_type("video/mp4");
        assert_eq!(classify(&video), Some(PreviewStrategy::Video));

        // The declared type is not consulted beyond the image prefix.
        let mislabeled = Attachment::new("b.zip").with_type("video/mp4");
        assert_eq!(classify(&mislabeled), Some(PreviewStrategy::ArchiveIcon));
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        assert_eq!(strategy_for_extension("MP4"), PreviewStrategy::DocumentIcon);
        assert_eq!(strategy_for_extension("ZIP"), PreviewStrategy::DocumentIcon);
        assert_eq!(strategy_for_extension("mp4"), PreviewStrategy::Video);
    }

    #[test]
    fn test_name_used_when_url_missing() {
        let att = Attachment {
            name: Some("track.wav".into()),
            mime_type: Some("audio/wav".into()),
            ..Attachment::default()
        };
        assert_eq!(classify(&att), Some(PreviewStrategy::AudioIcon));
    }

    #[test]
    fn test_file_extension_takes_last_segment() {
        assert_eq!(file_extension("archive.tar.zip"), "zip");
        assert_eq!(file_extension("https://cdn.example.com/v1/key"), "com/v1/key");
        assert_eq!(file_extension(""), "");
    }

    #[test]
    fn test_is_image_ignores_extension() {
        assert!(!is_image(&Attachment::new("photo.png")));
        assert!(is_image(&Attachment::new("photo").with_type("image/webp")));
    }
}
